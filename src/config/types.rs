use serde::{Serialize, Deserialize};
use crate::config::validation::{ValidationError, ValidationUtils, Validator};

/// 應用程序配置結構
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub log: LogConfig,
    pub server: ServerConfig,
    pub redis: RedisConfig,
}

impl Validator for ApplicationConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證各個部分的配置
        self.log.validate()?;
        self.server.validate()?;
        self.redis.validate()?;

        Ok(())
    }
}

/// 日誌配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
}

impl Validator for LogConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證日誌級別
        ValidationUtils::one_of(&self.level, &["trace", "debug", "info", "warn", "error"], "log.level")?;

        // 驗證日誌格式
        ValidationUtils::one_of(&self.format, &["pretty", "json"], "log.format")?;

        Ok(())
    }
}

/// 伺服器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 單一請求的超時秒數
    pub request_timeout: u64,
    /// 請求體大小上限（位元組）
    pub max_body_size: u64,
    pub enable_compression: bool,
    pub enable_cors: bool,
    pub cors_allowed_origins: Vec<String>,
}

impl Validator for ServerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證服務器配置
        ValidationUtils::not_empty(&self.host, "server.host")?;
        ValidationUtils::in_range(self.port, 1, 65535, "server.port")?;
        ValidationUtils::in_range(self.request_timeout, 1, 3600, "server.request_timeout")?;
        ValidationUtils::in_range(self.max_body_size, 1, 64 * 1024 * 1024, "server.max_body_size")?;

        // 啟用CORS時必須指定允許的來源
        ValidationUtils::check_dependency(
            self.enable_cors,
            !self.cors_allowed_origins.is_empty(),
            "server.enable_cors",
            "server.cors_allowed_origins",
        )?;
        ValidationUtils::cors_origins(&self.cors_allowed_origins, "server.cors_allowed_origins")?;

        Ok(())
    }
}

impl ServerConfig {
    /// 監聽地址字串
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 請求超時持續時間
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout)
    }
}

/// Redis配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    pub pool_size: u32,
    pub connection_timeout_secs: u64,
}

impl Validator for RedisConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證Redis配置
        ValidationUtils::url_scheme(&self.url, &["redis", "rediss"], "redis.url")?;
        ValidationUtils::in_range(self.pool_size, 1, 100, "redis.pool_size")?;
        ValidationUtils::in_range(self.connection_timeout_secs, 1, 60, "redis.connection_timeout_secs")?;

        Ok(())
    }
}
