use axum::{
    routing::{get, post},
    Router,
};
use crate::api::handlers::hash::{self, SharedHashRepository};

pub fn routes(repo: SharedHashRepository) -> Router {
    Router::new()
        .route("/hash-save", post(hash::hash_save))
        .route("/hash-get", get(hash::hash_get))
        .route("/hash-update", post(hash::hash_update))
        .route("/hash-delete", post(hash::hash_delete).delete(hash::hash_delete))
        .with_state(repo)
}
