//! API處理器模組
//!
//! 每個處理器解碼請求、呼叫一次倉儲操作，再把結果轉成 HTTP 回應。

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::error::{require_param, ApiError};

pub mod hash;
pub mod list;
pub mod queue;
pub mod system;

/// 查詢字串參數
///
/// 同名參數重複出現時只取第一個值。
#[derive(Debug, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// 第一個名為 `name` 的值
    pub fn first(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// 必要參數，缺少或為空字串時回 400
    pub fn require(&self, name: &'static str) -> Result<String, ApiError> {
        require_param(self.first(name).map(str::to_string), name)
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => Ok(Self(pairs)),
            Err(rejection) => {
                debug!("查詢字串解碼失敗: {}", rejection);
                Err(ApiError::InvalidPayload)
            }
        }
    }
}

/// 長度查詢的回應
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LengthResponse {
    pub length: i64,
}
