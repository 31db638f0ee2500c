use axum::{
    routing::{get, post},
    Router,
};
use crate::api::handlers::list::{self, SharedListRepository};

pub fn routes(repo: SharedListRepository) -> Router {
    Router::new()
        .route("/list-push", post(list::push))
        .route("/list-pop", get(list::pop))
        .route("/list-get-all", get(list::get_all))
        .route("/list-remove", post(list::remove))
        .route("/list-length", get(list::length))
        .with_state(repo)
}
