use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;
use tracing::debug;

use crate::redis::pool::RedisPool;
use crate::storage::models::ListItem;
use crate::storage::repository::{RepositoryError, RepositoryResult};

/// 列表存取接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// 逐一將元素推入列表頭部
    async fn push(&self, key: &str, items: &[ListItem]) -> RepositoryResult<()>;

    /// 從頭部（`from_start`）或尾部彈出一個元素
    async fn pop(&self, key: &str, from_start: bool) -> RepositoryResult<ListItem>;

    /// 讀取整個列表
    async fn get_all(&self, key: &str) -> RepositoryResult<Vec<ListItem>>;

    /// 移除至多 `count` 個與 `{id, value: null}` 完全相同的元素，回傳移除數量
    async fn remove(&self, key: &str, item_id: &str, count: i64) -> RepositoryResult<i64>;

    /// 列表長度
    async fn length(&self, key: &str) -> RepositoryResult<i64>;
}

/// 基於 Redis 列表的實現
pub struct RedisListRepository<P: RedisPool> {
    pool: P,
}

impl<P: RedisPool> RedisListRepository<P> {
    pub fn new(pool: P) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<P: RedisPool> ListRepository for RedisListRepository<P> {
    async fn push(&self, key: &str, items: &[ListItem]) -> RepositoryResult<()> {
        let mut conn = self.pool.get_conn().await?;

        // 每個元素一次 LPUSH，中途失敗時先前推入的元素保留
        for item in items {
            let data = serde_json::to_string(item)?;
            let len: i64 = conn.lpush(key, data).await?;
            debug!("LPUSH [{}] id={}，目前長度: {}", key, item.id, len);
        }

        Ok(())
    }

    async fn pop(&self, key: &str, from_start: bool) -> RepositoryResult<ListItem> {
        let mut conn = self.pool.get_conn().await?;

        let result: Option<String> = if from_start {
            conn.lpop(key, None).await?
        } else {
            conn.rpop(key, None).await?
        };

        let data = result.ok_or_else(|| RepositoryError::EmptyList(key.to_string()))?;
        Ok(serde_json::from_str(&data)?)
    }

    async fn get_all(&self, key: &str) -> RepositoryResult<Vec<ListItem>> {
        let mut conn = self.pool.get_conn().await?;

        let results: Vec<String> = conn.lrange(key, 0, -1).await?;
        debug!("LRANGE [{}]，元素數: {}", key, results.len());

        results
            .iter()
            .map(|data| serde_json::from_str(data).map_err(RepositoryError::from))
            .collect()
    }

    async fn remove(&self, key: &str, item_id: &str, count: i64) -> RepositoryResult<i64> {
        let target = serde_json::to_string(&ListItem::removal_target(item_id))?;
        let mut conn = self.pool.get_conn().await?;

        let removed: i64 = conn.lrem(key, count as isize, target).await?;
        debug!("LREM [{}] id={}，移除數: {}", key, item_id, removed);
        Ok(removed)
    }

    async fn length(&self, key: &str) -> RepositoryResult<i64> {
        let mut conn = self.pool.get_conn().await?;
        Ok(conn.llen(key).await?)
    }
}
