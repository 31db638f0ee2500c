use config::{Config, ConfigBuilder, ConfigError, Environment as ConfigEnvironment, File};
use config::builder::DefaultState;
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// 環境變數前綴，例如 `DEMO__REDIS__URL`
pub const ENV_PREFIX: &str = "DEMO";

/// 環境類型枚舉
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// 轉換為配置文件名
    pub fn as_filename(&self) -> &'static str {
        match self {
            Environment::Development => "development.toml",
            Environment::Production => "production.toml",
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("未知的環境: {}", other)),
        }
    }
}

/// 配置加載器，負責根據環境加載適當的配置
pub struct ConfigLoader;

impl ConfigLoader {
    /// 預設配置目錄，可由 `CONFIG_DIR` 覆蓋
    pub fn config_dir() -> PathBuf {
        PathBuf::from(env::var("CONFIG_DIR").unwrap_or_else(|_| "config".into()))
    }

    /// 從指定目錄載入指定環境的配置
    ///
    /// 優先級由低到高：內建預設值、`<dir>/<env>.toml`（可不存在）、`DEMO__*` 環境變數。
    pub fn load_from(dir: &Path, env: Environment) -> Result<Config, ConfigError> {
        let config_path = dir.join(env.as_filename());

        let mut config_builder = Self::with_defaults(Config::builder())?;

        // 加載環境特定配置
        config_builder = config_builder.add_source(File::from(config_path).required(false));

        // 從環境變數加載配置（優先級高於文件配置）
        config_builder = config_builder.add_source(
            ConfigEnvironment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.cors_allowed_origins")
                .try_parsing(true),
        );

        // 構建最終配置
        config_builder.build()
    }

    // 預設值沿用 redis:6379 / DB 0 與 6000 端口
    fn with_defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_default("log.level", "info")?
            .set_default("log.format", "pretty")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 6000i64)?
            .set_default("server.request_timeout", 30i64)?
            .set_default("server.max_body_size", 1024i64 * 1024)?
            .set_default("server.enable_compression", true)?
            .set_default("server.enable_cors", false)?
            .set_default("server.cors_allowed_origins", Vec::<String>::new())?
            .set_default("redis.url", "redis://redis:6379/0")?
            .set_default("redis.pool_size", 16i64)?
            .set_default("redis.connection_timeout_secs", 5i64)
    }
}
