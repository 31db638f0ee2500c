// src/api/routes/system.rs
use axum::{
    routing::get,
    Router,
};
use crate::api::handlers::system::{self, SharedRedisPool};

pub fn routes(pool: SharedRedisPool) -> Router {
    Router::new()
        .route("/system/health", get(system::health))
        .with_state(pool)
}
