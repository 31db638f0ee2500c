use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::redis::pool::RedisPool;

pub type SharedRedisPool = Arc<dyn RedisPool>;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
    redis: String,
}

/// GET /system/health
pub async fn health(State(pool): State<SharedRedisPool>) -> impl IntoResponse {
    let redis_up = pool.check_health().await;

    let (status_code, status, redis) = if redis_up {
        (StatusCode::OK, "ok", "up")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "down")
    };

    let health_response = HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        redis: redis.to_string(),
    };

    (status_code, Json(health_response))
}
