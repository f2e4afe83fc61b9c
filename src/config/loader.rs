//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 兼容旧部署的环境变量（ACEDATA_TOKEN 等）
//! 2. 前缀环境变量（SUNO_RELAY_）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 旧部署使用的无前缀环境变量 → 配置键
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("ACEDATA_TOKEN", "acedata.token"),
    ("ACEDATA_BASE_URL", "acedata.base_url"),
    ("PUBLIC_BASE_URL", "server.base_url"),
    ("IMPLEMENTATION_TYPE", "app.implementation_type"),
];

/// 加载应用配置
///
/// # 环境变量示例
/// - `SUNO_RELAY_SERVER__PORT=8080`
/// - `SUNO_RELAY_ACEDATA__TOKEN=xxx` 或 `ACEDATA_TOKEN=xxx`
/// - `SUNO_RELAY_LOG__JSON=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let legacy = LEGACY_ENV_KEYS
        .iter()
        .map(|(var, key)| (*key, std::env::var(var).ok()))
        .collect::<Vec<_>>();
    load_config_with_overrides(config_path, &legacy)
}

fn load_config_with_overrides(
    config_path: Option<&Path>,
    overrides: &[(&str, Option<String>)],
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("acedata.base_url", "https://api.acedata.cloud/suno")?
        .set_default("acedata.token", "")?
        .set_default("acedata.timeout_secs", 300)?
        .set_default("acedata.use_fake", false)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量，层级分隔符 __
    // 例如: SUNO_RELAY_ACEDATA__BASE_URL=https://api.acedata.cloud/suno
    builder = builder.add_source(
        Environment::with_prefix("SUNO_RELAY")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 旧环境变量（最高优先级）
    for (key, value) in overrides {
        builder = builder.set_override_option(*key, value.clone())?;
    }

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if !config.acedata.use_fake && config.acedata.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "AceData base URL cannot be empty".to_string(),
        ));
    }

    if config.acedata.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "AceData timeout cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志），不输出 token 内容
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Public Base URL: {}", config.server.public_base_url());
    if config.acedata.use_fake {
        tracing::info!("Upstream: fake generator (offline)");
    } else {
        tracing::info!("AceData URL: {}", config.acedata.base_url);
        tracing::info!("AceData Timeout: {}s", config.acedata.timeout_secs);
        tracing::info!("AceData Token Set: {}", !config.acedata.token.is_empty());
        if config.acedata.token.is_empty() {
            tracing::warn!("AceData token is empty, upstream calls will be rejected");
        }
    }
    tracing::info!(
        "Implementation Type: {}",
        config.app.implementation_type.as_deref().unwrap_or("<unset>")
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
