use deadpool_redis::redis::RedisError;
use thiserror::Error;

use crate::redis::pool::RedisPoolError;

/// 倉儲操作錯誤
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 無法從連接池取得連接
    #[error("Redis連接錯誤: {0}")]
    Pool(#[from] RedisPoolError),

    /// Redis命令執行失敗
    #[error("Redis操作錯誤: {0}")]
    Redis(#[from] RedisError),

    /// JSON 編碼或解碼失敗
    #[error("數據序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 雜湊不存在或沒有任何欄位
    #[error("找不到主題的資料: {0}")]
    NotFound(String),

    /// 從空列表彈出元素
    #[error("列表為空: {0}")]
    EmptyList(String),
}

/// 倉儲結果類型別名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
