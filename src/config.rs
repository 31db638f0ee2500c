/// 配置管理模組
///
/// 本模組負責加載、驗證和管理系統配置。
/// 配置來源依序為內建預設值、環境配置文件與 `DEMO__*` 環境變數。
// 宣告子模組
pub mod loader;
pub mod manager;
pub mod types;
pub mod validation;

// 重新導出常用組件
pub use loader::{ConfigLoader, Environment};
pub use types::*;
pub use validation::{ValidationError, ValidationUtils, Validator};
