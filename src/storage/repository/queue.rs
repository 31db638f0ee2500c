use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;
use tracing::debug;

use crate::redis::pool::RedisPool;
use crate::storage::models::QueueItem;
use crate::storage::repository::RepositoryResult;

/// FIFO 佇列存取接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueueRepository: Send + Sync {
    /// 推入佇列尾部
    async fn enqueue(&self, key: &str, item: &QueueItem) -> RepositoryResult<()>;

    /// 從佇列頭部取出，佇列為空時回傳 `None`
    async fn dequeue(&self, key: &str) -> RepositoryResult<Option<QueueItem>>;

    /// 佇列長度
    async fn length(&self, key: &str) -> RepositoryResult<i64>;
}

/// 以 Redis 列表實現的佇列，RPUSH 入列、LPOP 出列
pub struct RedisQueueRepository<P: RedisPool> {
    pool: P,
}

impl<P: RedisPool> RedisQueueRepository<P> {
    pub fn new(pool: P) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<P: RedisPool> QueueRepository for RedisQueueRepository<P> {
    async fn enqueue(&self, key: &str, item: &QueueItem) -> RepositoryResult<()> {
        let data = serde_json::to_string(item)?;
        let mut conn = self.pool.get_conn().await?;

        let len: i64 = conn.rpush(key, data).await?;
        debug!("入列 [{}] id={}，目前長度: {}", key, item.id, len);
        Ok(())
    }

    async fn dequeue(&self, key: &str) -> RepositoryResult<Option<QueueItem>> {
        let mut conn = self.pool.get_conn().await?;

        let data: Option<String> = conn.lpop(key, None).await?;
        match data {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => {
                debug!("佇列 [{}] 為空", key);
                Ok(None)
            }
        }
    }

    async fn length(&self, key: &str) -> RepositoryResult<i64> {
        let mut conn = self.pool.get_conn().await?;
        Ok(conn.llen(key).await?)
    }
}
