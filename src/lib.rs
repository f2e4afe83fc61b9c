//! suno-relay - Suno 兼容歌曲生成服务的 HTTP 转发层
//!
//! 架构设计: Hexagonal Architecture + CQRS
//!
//! 领域层 (domain/):
//! - Song Context: AudioRecord / GenerationTask / LyricResult，歌词规范化
//!
//! 应用层 (application/):
//! - Ports: SongGeneratorPort
//! - Commands: 生成、续写、歌词
//! - Queries: 任务查询
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: AceData 客户端, Fake 生成器
//! - HTTP: JSON API

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
