//! 整合測試共用的記憶體倉儲
//!
//! 以字串保存列表與佇列元素，模擬 Redis 按值比對的行為。
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use deadpool_redis::Connection;
use tower::ServiceExt;

use redis_demo_server::api::{ApiState, RestApi};
use redis_demo_server::config::ServerConfig;
use redis_demo_server::redis::{RedisPool, RedisPoolError};
use redis_demo_server::storage::models::hash_key;
use redis_demo_server::storage::{
    HashRecord, HashRepository, ListItem, ListRepository, QueueItem, QueueRepository,
    RepositoryError, RepositoryResult,
};

#[derive(Default)]
pub struct MemoryStore {
    hashes: Mutex<HashMap<String, HashRecord>>,
    lists: Mutex<HashMap<String, VecDeque<String>>>,
}

impl MemoryStore {
    fn list_op<T>(&self, key: &str, f: impl FnOnce(&mut VecDeque<String>) -> T) -> T {
        let mut lists = self.lists.lock().expect("鎖已中毒");
        let list = lists.entry(key.to_string()).or_default();
        let result = f(list);
        if list.is_empty() {
            lists.remove(key);
        }
        result
    }
}

#[async_trait]
impl HashRepository for MemoryStore {
    async fn save(&self, record: &HashRecord) -> RepositoryResult<()> {
        self.hashes
            .lock()
            .expect("鎖已中毒")
            .insert(record.key(), record.clone());
        Ok(())
    }

    async fn get(&self, topic: &str) -> RepositoryResult<HashRecord> {
        self.hashes
            .lock()
            .expect("鎖已中毒")
            .get(&hash_key(topic))
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(topic.to_string()))
    }

    async fn update(&self, record: &HashRecord) -> RepositoryResult<()> {
        self.save(record).await
    }

    async fn delete(&self, topic: &str) -> RepositoryResult<()> {
        self.hashes
            .lock()
            .expect("鎖已中毒")
            .remove(&hash_key(topic));
        Ok(())
    }
}

#[async_trait]
impl ListRepository for MemoryStore {
    async fn push(&self, key: &str, items: &[ListItem]) -> RepositoryResult<()> {
        let encoded = items
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?;
        self.list_op(key, |list| {
            for item in encoded {
                list.push_front(item);
            }
        });
        Ok(())
    }

    async fn pop(&self, key: &str, from_start: bool) -> RepositoryResult<ListItem> {
        let raw = self.list_op(key, |list| {
            if from_start {
                list.pop_front()
            } else {
                list.pop_back()
            }
        });
        let raw = raw.ok_or_else(|| RepositoryError::EmptyList(key.to_string()))?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn get_all(&self, key: &str) -> RepositoryResult<Vec<ListItem>> {
        let raw: Vec<String> = self.list_op(key, |list| list.iter().cloned().collect());
        raw.iter()
            .map(|item| serde_json::from_str(item).map_err(RepositoryError::from))
            .collect()
    }

    async fn remove(&self, key: &str, item_id: &str, count: i64) -> RepositoryResult<i64> {
        let target = serde_json::to_string(&ListItem::removal_target(item_id))?;
        let removed = self.list_op(key, |list| {
            let limit = if count == 0 { usize::MAX } else { count.unsigned_abs() as usize };
            let mut removed = 0usize;
            if count >= 0 {
                let mut i = 0;
                while i < list.len() && removed < limit {
                    if list[i] == target {
                        list.remove(i);
                        removed += 1;
                    } else {
                        i += 1;
                    }
                }
            } else {
                let mut i = list.len();
                while i > 0 && removed < limit {
                    i -= 1;
                    if list[i] == target {
                        list.remove(i);
                        removed += 1;
                    }
                }
            }
            removed as i64
        });
        Ok(removed)
    }

    async fn length(&self, key: &str) -> RepositoryResult<i64> {
        Ok(self.list_op(key, |list| list.len() as i64))
    }
}

#[async_trait]
impl QueueRepository for MemoryStore {
    async fn enqueue(&self, key: &str, item: &QueueItem) -> RepositoryResult<()> {
        let encoded = serde_json::to_string(item)?;
        self.list_op(key, |list| list.push_back(encoded));
        Ok(())
    }

    async fn dequeue(&self, key: &str) -> RepositoryResult<Option<QueueItem>> {
        match self.list_op(key, |list| list.pop_front()) {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn length(&self, key: &str) -> RepositoryResult<i64> {
        Ok(self.list_op(key, |list| list.len() as i64))
    }
}

/// 不提供真實連接的連接池，健康狀態固定
pub struct StubPool {
    pub healthy: bool,
}

#[async_trait]
impl RedisPool for StubPool {
    async fn get_conn(&self) -> Result<Connection, RedisPoolError> {
        Err(RedisPoolError::GetConnectionError("stub".to_string()))
    }

    async fn check_health(&self) -> bool {
        self.healthy
    }

    fn pool_size(&self) -> u32 {
        1
    }
}

pub fn server_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout: 5,
        max_body_size: 1024 * 1024,
        enable_compression: false,
        enable_cors: false,
        cors_allowed_origins: Vec::new(),
    }
}

/// 以記憶體倉儲組出完整應用
pub fn memory_app() -> Router {
    let store = Arc::new(MemoryStore::default());
    let state = ApiState {
        hash: store.clone(),
        list: store.clone(),
        queue: store,
        pool: Arc::new(StubPool { healthy: true }),
    };
    RestApi::new(server_config(), state).build_app()
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.clone().oneshot(request).await.expect("請求失敗");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("讀取回應失敗");
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("無法建立請求")
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("無法建立請求")
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .expect("無法建立請求")
}

/// 不帶 Content-Type 的 POST
pub fn post_raw(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .expect("無法建立請求")
}
