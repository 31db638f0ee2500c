pub mod models;
pub mod repository;

// 匯出主要的模型
pub use models::{HashRecord, ListItem, QueueItem};

// 匯出主要的倉儲接口和實現
pub use repository::{
    HashRepository,
    ListRepository,
    QueueRepository,
    RedisHashRepository,
    RedisListRepository,
    RedisQueueRepository,
    RepositoryError,
    RepositoryResult,
};
