use thiserror::Error;
use crate::redis::pool::RedisPoolError;

/// 伺服器錯誤類型
#[derive(Error, Debug)]
pub enum ServerError {
    /// 構建時缺少配置
    #[error("配置錯誤: {0}")]
    Config(String),

    /// 建立 Redis 連接池失敗
    #[error("Redis 連接池錯誤: {0}")]
    RedisPool(#[from] RedisPoolError),

    /// 無法綁定監聽位址
    #[error("無法綁定 {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP 服務運行中斷
    #[error("IO 錯誤: {0}")]
    Io(#[from] std::io::Error),

    /// 啟動前檢查失敗，例如 Redis 無法連線
    #[error("初始化錯誤: {0}")]
    Initialization(String),

    #[error("運行時錯誤: {0}")]
    Runtime(String),
}

/// 伺服器結果類型別名
pub type ServerResult<T> = Result<T, ServerError>;
