use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::error::{decode_json, ApiError};
use crate::api::handlers::{LengthResponse, QueryParams};
use crate::storage::models::QueueItem;
use crate::storage::repository::QueueRepository;

pub type SharedQueueRepository = Arc<dyn QueueRepository>;

/// POST /queue-enqueue?key=
pub async fn enqueue(
    State(repo): State<SharedQueueRepository>,
    query: QueryParams,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let key = query.require("key")?;
    let item: QueueItem = decode_json(body)?;

    repo.enqueue(&key, &item)
        .await
        .map_err(|err| ApiError::repository("Failed to enqueue item", err))?;

    Ok((StatusCode::CREATED, "Item enqueued successfully"))
}

/// GET /queue-dequeue?key=
///
/// 佇列為空時回 204，不視為錯誤。
pub async fn dequeue(
    State(repo): State<SharedQueueRepository>,
    query: QueryParams,
) -> Result<Response, ApiError> {
    let key = query.require("key")?;

    let item = repo
        .dequeue(&key)
        .await
        .map_err(|err| ApiError::repository("Failed to dequeue item", err))?;

    Ok(match item {
        Some(item) => Json(item).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// GET /queue-length?key=
pub async fn length(
    State(repo): State<SharedQueueRepository>,
    query: QueryParams,
) -> Result<impl IntoResponse, ApiError> {
    let key = query.require("key")?;

    let length = repo
        .length(&key)
        .await
        .map_err(|err| ApiError::repository("Failed to get queue length", err))?;

    Ok(Json(LengthResponse { length }))
}
