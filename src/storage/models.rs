pub mod hash;
pub mod list;
pub mod queue;

// 重新匯出常用模型類型
pub use hash::{hash_key, HashRecord, HASH_KEY_PREFIX};
pub use list::ListItem;
pub use queue::QueueItem;

/// 任意 JSON 物件
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
