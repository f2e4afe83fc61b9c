//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 上游 AceData 配置
    #[serde(default)]
    pub acedata: AceDataConfig,

    /// 暴露给前端的配置
    #[serde(default)]
    pub app: RemoteAppConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 公开访问的 Base URL（供上游回调使用）
    /// 如果未设置，则使用 http://{host}:{port}
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: None,
        }
    }
}

impl ServerConfig {
    /// 获取公开的 Base URL
    pub fn public_base_url(&self) -> String {
        match self.base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ => {
                let host = if self.host == "0.0.0.0" {
                    "localhost"
                } else {
                    &self.host
                };
                format!("http://{}:{}", host, self.port)
            }
        }
    }
}

/// AceData 上游配置
#[derive(Debug, Clone, Deserialize)]
pub struct AceDataConfig {
    /// 上游基础 URL
    #[serde(default = "default_acedata_url")]
    pub base_url: String,

    /// Bearer token
    #[serde(default)]
    pub token: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_acedata_timeout")]
    pub timeout_secs: u64,

    /// 使用离线 Fake 生成器，不调用上游
    #[serde(default)]
    pub use_fake: bool,
}

fn default_acedata_url() -> String {
    "https://api.acedata.cloud/suno".to_string()
}

fn default_acedata_timeout() -> u64 {
    300
}

impl Default for AceDataConfig {
    fn default() -> Self {
        Self {
            base_url: default_acedata_url(),
            token: String::new(),
            timeout_secs: default_acedata_timeout(),
            use_fake: false,
        }
    }
}

/// 前端可见配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteAppConfig {
    /// 实现类型，由 get_remote_config 原样返回
    #[serde(default)]
    pub implementation_type: Option<String>,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.acedata.base_url, "https://api.acedata.cloud/suno");
        assert_eq!(config.acedata.timeout_secs, 300);
        assert!(config.app.implementation_type.is_none());
    }

    #[test]
    fn test_public_base_url_fallback() {
        let config = ServerConfig::default();
        assert_eq!(config.public_base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_public_base_url_trims_slash() {
        let config = ServerConfig {
            base_url: Some("https://relay.example.com/".to_string()),
            ..Default::default()
        };
        assert_eq!(config.public_base_url(), "https://relay.example.com");
    }
}
