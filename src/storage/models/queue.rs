use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 佇列元素，`payload` 可為任意 JSON 值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub payload: Value,
}

impl QueueItem {
    pub fn new(id: impl Into<String>, payload: Value) -> Self {
        Self {
            id: id.into(),
            payload,
        }
    }
}
