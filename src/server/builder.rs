use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::api::{ApiState, RestApi};
use crate::config::types::{RedisConfig, ServerConfig};
use crate::redis::pool::{ConnectionPool, RedisPool};
use crate::server::{ServerError, ServerResult, ServerState};

/// 伺服器實例
pub struct Server {
    /// 伺服器狀態
    state: Arc<RwLock<ServerState>>,
    /// 伺服器配置
    config: ServerConfig,
    /// 共享的 Redis 連接池
    pool: Arc<ConnectionPool>,
    /// HTTP 服務
    rest_api: RestApi,
}

impl Server {
    /// 綁定配置中的位址並運行，直到收到 Ctrl-C
    pub async fn run(&self) -> ServerResult<()> {
        let address = self.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| ServerError::Bind { address, source })?;
        self.serve(listener, shutdown_signal()).await
    }

    /// 在已綁定的監聽器上運行，`shutdown` 完成後開始優雅關閉
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.set_state(ServerState::Running).await;
        info!("伺服器已啟動");

        let state = self.state.clone();
        let signal = async move {
            shutdown.await;
            info!("接收到關閉信號，正在關閉伺服器...");
            *state.write().await = ServerState::ShuttingDown;
        };

        let result = self.rest_api.serve(listener, signal).await;

        self.set_state(ServerState::Stopped).await;

        match result {
            Ok(()) => {
                info!("伺服器已關閉");
                Ok(())
            }
            Err(e) => {
                error!("伺服器運行錯誤: {}", e);
                Err(ServerError::Io(e))
            }
        }
    }

    /// 檢查伺服器健康狀態
    pub async fn check_health(&self) -> ServerResult<()> {
        debug!("檢查伺服器健康狀態");

        let state = self.state().await;
        if state != ServerState::Running {
            return Err(ServerError::Runtime(format!("伺服器狀態不是運行中: {:?}", state)));
        }

        if !self.pool.check_health().await {
            return Err(ServerError::Runtime("Redis 無法連線".to_string()));
        }

        Ok(())
    }

    /// 獲取伺服器狀態
    pub async fn state(&self) -> ServerState {
        *self.state.read().await
    }

    async fn set_state(&self, state: ServerState) {
        *self.state.write().await = state;
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("無法監聽關閉信號: {}", e);
        // 監聽失敗時不主動關閉
        std::future::pending::<()>().await;
    }
}

/// 伺服器構建器
pub struct ServerBuilder {
    server_config: Option<ServerConfig>,
    redis_config: Option<RedisConfig>,
    redis_pool: Option<Arc<ConnectionPool>>,
}

impl ServerBuilder {
    /// 創建新的伺服器構建器
    pub fn new() -> Self {
        Self {
            server_config: None,
            redis_config: None,
            redis_pool: None,
        }
    }

    /// 設置伺服器配置
    pub fn with_server_config(mut self, config: ServerConfig) -> Self {
        self.server_config = Some(config);
        self
    }

    /// 設置 Redis 配置
    pub fn with_redis_config(mut self, config: RedisConfig) -> Self {
        self.redis_config = Some(config);
        self
    }

    /// 使用現成的連接池，優先於 Redis 配置
    pub fn with_redis_pool(mut self, pool: Arc<ConnectionPool>) -> Self {
        self.redis_pool = Some(pool);
        self
    }

    /// 構建並返回伺服器實例
    ///
    /// Redis 無法連線時直接失敗，伺服器不會在沒有後端的情況下啟動。
    pub async fn build(self) -> ServerResult<Server> {
        info!("構建伺服器實例");

        let server_config = self
            .server_config
            .ok_or_else(|| ServerError::Config("未提供伺服器配置".to_string()))?;

        let pool = match (self.redis_pool, self.redis_config) {
            (Some(pool), _) => pool,
            (None, Some(config)) => Arc::new(ConnectionPool::new(config).await?),
            (None, None) => return Err(ServerError::Config("未提供Redis配置".to_string())),
        };

        if !pool.check_health().await {
            return Err(ServerError::Initialization("無法連線到 Redis".to_string()));
        }
        info!("Redis 連線成功");

        let rest_api = RestApi::new(server_config.clone(), ApiState::from_pool(pool.clone()));

        let server = Server {
            state: Arc::new(RwLock::new(ServerState::Initializing)),
            config: server_config,
            pool,
            rest_api,
        };

        info!("伺服器實例構建完成");

        Ok(server)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
