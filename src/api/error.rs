use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error};

use crate::storage::repository::RepositoryError;

/// API 錯誤
///
/// 回應內容只包含固定訊息，倉儲錯誤細節只寫入日誌。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// 請求體無法解碼
    #[error("Invalid request payload")]
    InvalidPayload,

    /// 請求體超過大小上限
    #[error("Request body too large")]
    PayloadTooLarge,

    /// 缺少必要的查詢參數
    #[error("Missing {0} parameter")]
    MissingParameter(&'static str),

    /// 倉儲操作失敗
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// 記錄倉儲錯誤並轉為 500
    pub fn repository(message: &'static str, err: RepositoryError) -> Self {
        error!(error = %err, "{}", message);
        ApiError::Internal(message)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload | ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

/// 以 JSON 解碼請求體，不檢查 Content-Type
///
/// 超過大小上限回 413，其餘讀取或解碼失敗都回 400。
pub fn decode_json<T: DeserializeOwned>(body: Result<Bytes, BytesRejection>) -> Result<T, ApiError> {
    let body = match body {
        Ok(body) => body,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err(ApiError::PayloadTooLarge);
        }
        Err(rejection) => {
            debug!("讀取請求體失敗: {}", rejection);
            return Err(ApiError::InvalidPayload);
        }
    };

    serde_json::from_slice(&body).map_err(|e| {
        debug!("請求體解碼失敗: {}", e);
        ApiError::InvalidPayload
    })
}

/// 取出必要的參數，缺少或為空字串時回 400
pub fn require_param(value: Option<String>, name: &'static str) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::MissingParameter(name)),
    }
}
