use std::sync::Arc;

use axum::Router;

use crate::api::handlers::{
    hash::SharedHashRepository, list::SharedListRepository, queue::SharedQueueRepository,
    system::SharedRedisPool,
};
use crate::redis::pool::RedisPool;
use crate::storage::repository::{RedisHashRepository, RedisListRepository, RedisQueueRepository};

pub mod hash;
pub mod list;
pub mod queue;
pub mod system;

/// 各路由所需的倉儲與連接池
#[derive(Clone)]
pub struct ApiState {
    pub hash: SharedHashRepository,
    pub list: SharedListRepository,
    pub queue: SharedQueueRepository,
    pub pool: SharedRedisPool,
}

impl ApiState {
    /// 以同一個連接池建立三個 Redis 倉儲
    pub fn from_pool<P>(pool: P) -> Self
    where
        P: RedisPool + Clone,
    {
        Self {
            hash: Arc::new(RedisHashRepository::new(pool.clone())),
            list: Arc::new(RedisListRepository::new(pool.clone())),
            queue: Arc::new(RedisQueueRepository::new(pool.clone())),
            pool: Arc::new(pool),
        }
    }
}

pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .merge(hash::routes(state.hash))
        .merge(list::routes(state.list))
        .merge(queue::routes(state.queue))
        .merge(system::routes(state.pool))
}
