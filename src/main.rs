//! suno-relay - Suno 兼容歌曲生成服务的 HTTP 转发层

use std::sync::Arc;

use suno_relay::application::SongGeneratorPort;
use suno_relay::config::{load_config, print_config, LogConfig};
use suno_relay::infrastructure::adapters::{AceDataClient, AceDataClientConfig, FakeSongGenerator};
use suno_relay::infrastructure::http::{AppState, HttpServer, ServerConfig, TASK_CALLBACK_PATH};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},suno_relay={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("suno-relay starting");
    print_config(&config);

    // 创建上游生成器
    let generator: Arc<dyn SongGeneratorPort> = if config.acedata.use_fake {
        Arc::new(FakeSongGenerator::new())
    } else {
        let callback_url = format!("{}{}", config.server.public_base_url(), TASK_CALLBACK_PATH);
        let client_config = AceDataClientConfig::new(&config.acedata.base_url, &config.acedata.token)
            .with_callback_url(callback_url)
            .with_timeout(config.acedata.timeout_secs);
        Arc::new(AceDataClient::new(client_config)?)
    };

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(generator, config.app.implementation_type.clone());
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
