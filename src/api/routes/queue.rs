use axum::{
    routing::{get, post},
    Router,
};
use crate::api::handlers::queue::{self, SharedQueueRepository};

pub fn routes(repo: SharedQueueRepository) -> Router {
    Router::new()
        .route("/queue-enqueue", post(queue::enqueue))
        .route("/queue-dequeue", get(queue::dequeue))
        .route("/queue-length", get(queue::length))
        .with_state(repo)
}
