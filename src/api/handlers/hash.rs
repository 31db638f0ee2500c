use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::api::error::{decode_json, ApiError};
use crate::api::handlers::QueryParams;
use crate::storage::models::HashRecord;
use crate::storage::repository::HashRepository;

pub type SharedHashRepository = Arc<dyn HashRepository>;

/// POST /hash-save
pub async fn hash_save(
    State(repo): State<SharedHashRepository>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let record: HashRecord = decode_json(body)?;

    repo.save(&record)
        .await
        .map_err(|err| ApiError::repository("Failed to save data", err))?;

    Ok((StatusCode::CREATED, "Demo saved successfully"))
}

/// GET /hash-get?topic=
pub async fn hash_get(
    State(repo): State<SharedHashRepository>,
    query: QueryParams,
) -> Result<impl IntoResponse, ApiError> {
    let topic = query.require("topic")?;

    // 找不到主題同樣回 500
    let record = repo
        .get(&topic)
        .await
        .map_err(|err| ApiError::repository("Failed to get data", err))?;

    Ok(Json(record))
}

/// POST /hash-update
pub async fn hash_update(
    State(repo): State<SharedHashRepository>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let record: HashRecord = decode_json(body)?;

    repo.update(&record)
        .await
        .map_err(|err| ApiError::repository("Failed to update data", err))?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST 或 DELETE /hash-delete?topic=
pub async fn hash_delete(
    State(repo): State<SharedHashRepository>,
    query: QueryParams,
) -> Result<impl IntoResponse, ApiError> {
    let topic = query.require("topic")?;

    repo.delete(&topic)
        .await
        .map_err(|err| ApiError::repository("Failed to delete data", err))?;

    Ok(StatusCode::NO_CONTENT)
}
