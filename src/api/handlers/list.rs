use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::error::{decode_json, require_param, ApiError};
use crate::api::handlers::{LengthResponse, QueryParams};
use crate::storage::models::ListItem;
use crate::storage::repository::ListRepository;

pub type SharedListRepository = Arc<dyn ListRepository>;

#[derive(Debug, Deserialize)]
pub struct PushRequest {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub items: Vec<ListItem>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveRequest {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub item_id: String,
    /// 與 LREM 相同：正數從頭、負數從尾、0 表示全部
    #[serde(default)]
    pub count: i64,
}

/// POST /list-push
pub async fn push(
    State(repo): State<SharedListRepository>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request: PushRequest = decode_json(body)?;
    let key = require_param(Some(request.key), "key")?;

    repo.push(&key, &request.items)
        .await
        .map_err(|err| ApiError::repository("Failed to push items", err))?;

    Ok((StatusCode::CREATED, "Items pushed successfully"))
}

/// GET /list-pop?key=&fromStart=true
pub async fn pop(
    State(repo): State<SharedListRepository>,
    query: QueryParams,
) -> Result<impl IntoResponse, ApiError> {
    let key = query.require("key")?;
    let from_start = query.first("fromStart") == Some("true");

    // 空列表視為錯誤
    let item = repo
        .pop(&key, from_start)
        .await
        .map_err(|err| ApiError::repository("Failed to pop item", err))?;

    Ok(Json(item))
}

/// GET /list-get-all?key=
pub async fn get_all(
    State(repo): State<SharedListRepository>,
    query: QueryParams,
) -> Result<impl IntoResponse, ApiError> {
    let key = query.require("key")?;

    let items = repo
        .get_all(&key)
        .await
        .map_err(|err| ApiError::repository("Failed to get list", err))?;

    Ok(Json(items))
}

/// POST /list-remove
pub async fn remove(
    State(repo): State<SharedListRepository>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request: RemoveRequest = decode_json(body)?;
    let key = require_param(Some(request.key), "key")?;

    let removed = repo
        .remove(&key, &request.item_id, request.count)
        .await
        .map_err(|err| ApiError::repository("Failed to remove item", err))?;
    debug!("列表 [{}] 移除 id={} 共 {} 個", key, request.item_id, removed);

    Ok((StatusCode::OK, "Item removed successfully"))
}

/// GET /list-length?key=
pub async fn length(
    State(repo): State<SharedListRepository>,
    query: QueryParams,
) -> Result<impl IntoResponse, ApiError> {
    let key = query.require("key")?;

    let length = repo
        .length(&key)
        .await
        .map_err(|err| ApiError::repository("Failed to get list length", err))?;

    Ok(Json(LengthResponse { length }))
}
