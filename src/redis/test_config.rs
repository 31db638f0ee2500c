//! 集中化的 Redis 測試配置
//!
//! 提供一致的測試環境配置，支援不同部署環境（本地開發、Docker 容器）

use crate::config::types::RedisConfig;
use crate::redis::pool::{ConnectionPool, RedisPool, RedisPoolError};
use std::sync::Arc;

/// Redis 測試配置建構器
pub struct RedisTestConfig;

impl RedisTestConfig {
    /// 獲取測試用 Redis URL
    ///
    /// 優先級：
    /// 1. REDIS_TEST_URL 環境變數
    /// 2. 檢測 Docker 環境使用 redis:6379
    /// 3. 預設 localhost:6379
    pub fn get_test_url() -> String {
        if let Ok(url) = std::env::var("REDIS_TEST_URL") {
            return url;
        }

        if Self::is_docker_environment() {
            "redis://redis:6379".to_string()
        } else {
            "redis://localhost:6379".to_string()
        }
    }

    /// 檢測是否在 Docker 環境中執行
    fn is_docker_environment() -> bool {
        std::env::var("DOCKER_CONTAINER").is_ok()
            || std::path::Path::new("/.dockerenv").exists()
    }

    /// 建立標準測試 Redis 配置
    pub fn create_test_config() -> RedisConfig {
        RedisConfig {
            url: Self::get_test_url(),
            pool_size: 3,
            connection_timeout_secs: 2,
        }
    }

    /// 建立測試用 Redis 連接池
    pub async fn create_test_pool() -> Result<Arc<ConnectionPool>, RedisPoolError> {
        let config = Self::create_test_config();
        let pool = ConnectionPool::new(config).await?;
        Ok(Arc::new(pool))
    }

    /// 是否要求 Redis 必須可用，由 `REDIS_TEST_REQUIRED` 控制
    pub fn is_redis_required() -> bool {
        Self::parse_required(std::env::var("REDIS_TEST_REQUIRED").ok().as_deref())
    }

    fn parse_required(value: Option<&str>) -> bool {
        matches!(
            value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
            Some("1" | "true" | "yes")
        )
    }

    /// Redis 可用時回傳連接池，否則略過測試
    ///
    /// 設定 `REDIS_TEST_REQUIRED=1` 時（例如 CI），Redis 不可用直接讓測試失敗。
    pub async fn skip_if_redis_unavailable(test_name: &str) -> Option<Arc<ConnectionPool>> {
        match Self::create_test_pool().await {
            Ok(pool) if pool.check_health().await => Some(pool),
            _ => Self::redis_unavailable(test_name, Self::is_redis_required()),
        }
    }

    fn redis_unavailable(test_name: &str, required: bool) -> Option<Arc<ConnectionPool>> {
        if required {
            panic!(
                "Redis 測試 '{}' 需要 Redis，但 {} 無法連線",
                test_name,
                Self::get_test_url()
            );
        }
        eprintln!("略過 Redis 測試 '{}' - Redis 環境不可用", test_name);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_get_test_url_with_env_var() {
        std::env::set_var("REDIS_TEST_URL", "redis://custom:1234");

        let url = RedisTestConfig::get_test_url();
        assert_eq!(url, "redis://custom:1234");

        std::env::remove_var("REDIS_TEST_URL");
    }

    #[test]
    fn test_parse_required() {
        assert!(RedisTestConfig::parse_required(Some("1")));
        assert!(RedisTestConfig::parse_required(Some(" TRUE ")));
        assert!(!RedisTestConfig::parse_required(Some("0")));
        assert!(!RedisTestConfig::parse_required(None));
    }

    #[test]
    fn test_unavailable_redis_is_skipped_when_optional() {
        assert!(RedisTestConfig::redis_unavailable("optional", false).is_none());
    }

    #[test]
    #[should_panic(expected = "需要 Redis")]
    fn test_unavailable_redis_fails_when_required() {
        RedisTestConfig::redis_unavailable("required", true);
    }

    #[test]
    #[serial]
    fn test_create_test_config() {
        let config = RedisTestConfig::create_test_config();
        assert!(config.url.starts_with("redis://"));
        assert_eq!(config.pool_size, 3);
        assert_eq!(config.connection_timeout_secs, 2);
    }
}
