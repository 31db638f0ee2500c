// src/api/rest.rs
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    Router,
};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::{
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse},
    cors::{Any, CorsLayer},
    compression::CompressionLayer,
    timeout::TimeoutLayer,
};
use tracing::{info, warn, Level};

use crate::config::ServerConfig;
use super::routes::{api_routes, ApiState};

pub struct RestApi {
    server_config: ServerConfig,
    state: ApiState,
}

impl RestApi {
    pub fn new(server_config: ServerConfig, state: ApiState) -> Self {
        Self {
            server_config,
            state,
        }
    }

    /// 在已綁定的監聽器上提供服務，`shutdown` 完成後優雅關閉
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.build_app();

        if let Ok(addr) = listener.local_addr() {
            info!("Starting REST API server on {}", addr);
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
    }

    pub fn build_app(&self) -> Router {
        let mut app = api_routes(self.state.clone())
            // 請求體大小上限
            .layer(DefaultBodyLimit::max(self.server_config.max_body_size as usize))
            // 超時設置
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                self.server_config.request_timeout(),
            ));

        if self.server_config.enable_compression {
            app = app.layer(CompressionLayer::new());
        }

        if self.server_config.enable_cors {
            app = app.layer(self.build_cors_layer());
        }

        // 追蹤層放在最外層，記錄所有回應
        app.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
    }

    fn build_cors_layer(&self) -> CorsLayer {
        let cors = CorsLayer::new()
            .allow_methods(vec![Method::GET, Method::POST, Method::DELETE])
            .allow_headers(vec![header::CONTENT_TYPE]);

        let origins = &self.server_config.cors_allowed_origins;
        if origins.iter().any(|origin| origin == "*") {
            return cors.allow_origin(Any);
        }

        // 無法解析的來源略過
        let origins = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("忽略無效的CORS來源 {}: {}", origin, e);
                    None
                }
            })
            .collect::<Vec<_>>();

        cors.allow_origin(origins)
    }
}
