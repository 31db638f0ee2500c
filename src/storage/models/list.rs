use serde::{Deserialize, Serialize};

use super::JsonObject;

/// 存入 Redis 列表的元素
///
/// 序列化欄位順序固定為 `id`、`value`，按值移除時依賴此字串形式完全一致。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub id: String,
    pub value: Option<JsonObject>,
}

impl ListItem {
    pub fn new(id: impl Into<String>, value: Option<JsonObject>) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    /// 按 ID 移除時用來比對的元素，只帶 `id`，`value` 為 `null`
    pub fn removal_target(id: impl Into<String>) -> Self {
        Self::new(id, None)
    }
}
