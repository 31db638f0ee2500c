// api.rs - API服務模組，宣告子模組
//
// API服務模組提供外部接口，實現：
// - 雜湊、列表、佇列的 HTTP 端點
// - 請求解碼與錯誤到狀態碼的映射
// - API路由和中間件

/// REST API實現
pub mod rest;
/// API錯誤類型
pub mod error;
/// API路由定義
pub mod routes;
/// API處理器模組
pub mod handlers;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::ApiError;
pub use rest::RestApi;
pub use routes::{api_routes, ApiState};
