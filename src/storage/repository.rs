// 重新導出子模塊
pub mod error;
pub mod hash;
pub mod list;
pub mod queue;

// 重新導出常用類型
pub use error::{RepositoryError, RepositoryResult};
pub use hash::HashRepository;
pub use list::ListRepository;
pub use queue::QueueRepository;

// 重新導出具體實現
pub use hash::RedisHashRepository;
pub use list::RedisListRepository;
pub use queue::RedisQueueRepository;
