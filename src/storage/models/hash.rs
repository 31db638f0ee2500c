use serde::{Deserialize, Serialize};

use super::JsonObject;

/// Redis 雜湊鍵前綴
pub const HASH_KEY_PREFIX: &str = "demo";

/// 由主題組出雜湊鍵，例如 `demo:orders`
pub fn hash_key(topic: &str) -> String {
    format!("{}:{}", HASH_KEY_PREFIX, topic)
}

/// 以主題為識別的雜湊記錄
///
/// 存放於 `demo:<topic>`，欄位 `topic` 為原始字串、`payload` 為 JSON 文字。
/// 缺少的 `topic` 解碼為空字串，缺少或為 `null` 的 `payload` 以 `null` 保存。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashRecord {
    #[serde(default)]
    pub topic: String,
    pub payload: Option<JsonObject>,
}

impl HashRecord {
    pub fn new(topic: impl Into<String>, payload: Option<JsonObject>) -> Self {
        Self {
            topic: topic.into(),
            payload,
        }
    }

    /// 此記錄對應的 Redis 鍵
    pub fn key(&self) -> String {
        hash_key(&self.topic)
    }
}
