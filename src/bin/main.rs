use anyhow::{anyhow, Context, Result};
use clap::Parser;
use redis_demo_server::config::{ApplicationConfig, ConfigLoader, Environment, LogConfig};
use redis_demo_server::server::ServerBuilder;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "redis-demo-server", about = "Redis 雜湊、列表與佇列的 HTTP 示範服務")]
struct Cli {
    /// 運行環境 (development 或 production)
    #[arg(short, long, env = "DEMO_ENV")]
    environment: Option<Environment>,

    /// 配置文件目錄
    #[arg(short, long, env = "CONFIG_DIR")]
    config_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化配置
    let environment = cli.environment.unwrap_or(Environment::Development);
    let config_dir = cli.config_dir.unwrap_or_else(ConfigLoader::config_dir);
    let app_config = ApplicationConfig::load_from(&config_dir, environment)
        .with_context(|| format!("無法載入配置: {}", config_dir.display()))?;

    // 初始化日誌系統
    init_logging(&app_config.log)?;
    info!("使用環境 {:?}，配置目錄 {}", environment, config_dir.display());

    let server = ServerBuilder::new()
        .with_server_config(app_config.server.clone())
        .with_redis_config(app_config.redis.clone())
        .build()
        .await
        .context("伺服器初始化失敗")?;

    info!("監聽位址: {}", app_config.server.bind_address());
    server.run().await.context("伺服器運行失敗")?;

    Ok(())
}

// 初始化日誌系統，RUST_LOG 優先於配置中的級別
fn init_logging(log_config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_config.level.to_lowercase()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let result = if log_config.format.eq_ignore_ascii_case("json") {
        builder.json().try_init()
    } else {
        builder.pretty().try_init()
    };
    result.map_err(|e| anyhow!("設置日誌系統失敗: {}", e))?;

    info!("日誌系統初始化完成");
    Ok(())
}
