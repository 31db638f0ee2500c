use std::collections::HashMap;

use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;
use tracing::debug;

use crate::redis::pool::RedisPool;
use crate::storage::models::{hash_key, HashRecord, JsonObject};
use crate::storage::repository::{RepositoryError, RepositoryResult};

const TOPIC_FIELD: &str = "topic";
const PAYLOAD_FIELD: &str = "payload";

/// 雜湊記錄存取接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HashRepository: Send + Sync {
    /// 寫入記錄，已存在時覆蓋
    async fn save(&self, record: &HashRecord) -> RepositoryResult<()>;

    /// 讀取記錄，雜湊沒有任何欄位時回傳 `NotFound`
    async fn get(&self, topic: &str) -> RepositoryResult<HashRecord>;

    /// 與 `save` 相同的覆蓋寫入
    async fn update(&self, record: &HashRecord) -> RepositoryResult<()>;

    /// 刪除記錄，鍵不存在時不視為錯誤
    async fn delete(&self, topic: &str) -> RepositoryResult<()>;
}

/// 將記錄轉為 HSET 欄位
fn encode_fields(record: &HashRecord) -> RepositoryResult<[(&'static str, String); 2]> {
    let payload = serde_json::to_string(&record.payload)?;
    Ok([
        (TOPIC_FIELD, record.topic.clone()),
        (PAYLOAD_FIELD, payload),
    ])
}

/// 將 HGETALL 的結果還原為記錄
fn decode_record(topic: &str, mut fields: HashMap<String, String>) -> RepositoryResult<HashRecord> {
    if fields.is_empty() {
        return Err(RepositoryError::NotFound(topic.to_string()));
    }

    let payload_json = fields.remove(PAYLOAD_FIELD).unwrap_or_default();
    let payload: Option<JsonObject> = serde_json::from_str(&payload_json)?;

    Ok(HashRecord {
        topic: fields.remove(TOPIC_FIELD).unwrap_or_default(),
        payload,
    })
}

/// 基於 Redis 雜湊的實現
pub struct RedisHashRepository<P: RedisPool> {
    pool: P,
}

impl<P: RedisPool> RedisHashRepository<P> {
    pub fn new(pool: P) -> Self {
        Self { pool }
    }

    async fn write(&self, record: &HashRecord) -> RepositoryResult<()> {
        let key = record.key();
        let fields = encode_fields(record)?;

        let mut conn = self.pool.get_conn().await?;
        conn.hset_multiple::<_, _, _, ()>(&key, &fields[..]).await?;

        debug!("寫入雜湊 [{}]", key);
        Ok(())
    }
}

#[async_trait]
impl<P: RedisPool> HashRepository for RedisHashRepository<P> {
    async fn save(&self, record: &HashRecord) -> RepositoryResult<()> {
        self.write(record).await
    }

    async fn get(&self, topic: &str) -> RepositoryResult<HashRecord> {
        let key = hash_key(topic);
        let mut conn = self.pool.get_conn().await?;

        let fields: HashMap<String, String> = conn.hgetall(&key).await?;
        debug!("讀取雜湊 [{}]，欄位數: {}", key, fields.len());

        decode_record(topic, fields)
    }

    async fn update(&self, record: &HashRecord) -> RepositoryResult<()> {
        self.write(record).await
    }

    async fn delete(&self, topic: &str) -> RepositoryResult<()> {
        let key = hash_key(topic);
        let mut conn = self.pool.get_conn().await?;

        let removed: i64 = conn.del(&key).await?;
        debug!("刪除雜湊 [{}]，刪除數: {}", key, removed);
        Ok(())
    }
}
