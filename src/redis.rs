//! Redis存儲模組
//!
//! 提供基於 deadpool-redis 的連接池。各資料結構的讀寫由 `storage::repository` 負責。

pub mod pool;

#[cfg(test)]
pub mod test_config;

pub use pool::*;
