use config::ConfigError;
use std::path::Path;
use tracing::debug;
use crate::config::types::ApplicationConfig;
use crate::config::loader::{ConfigLoader, Environment};
use crate::config::validation::Validator;

/// ApplicationConfig 加載方法實現
impl ApplicationConfig {
    /// 從指定目錄與環境加載配置並驗證
    pub fn load_from(dir: &Path, env: Environment) -> Result<Self, ConfigError> {
        let config_source = ConfigLoader::load_from(dir, env)?;

        // 使用 serde 反序列化配置
        let app_config: ApplicationConfig = config_source.try_deserialize()?;

        app_config
            .validate()
            .map_err(|err| ConfigError::Message(format!("配置驗證失敗: {}", err)))?;
        debug!("配置驗證通過，環境：{:?}", env);

        Ok(app_config)
    }
}
