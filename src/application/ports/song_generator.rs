//! Song Generator Port - 上游歌曲生成服务抽象
//!
//! 定义歌曲/歌词生成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{AudioRecord, GenerationTask, LyricResult, Model};

/// 上游服务错误
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// 上游返回非 200 状态码
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    /// 上游响应结构与约定不符
    #[error("Upstream contract violation: {0}")]
    ContractViolation(String),
}

impl UpstreamError {
    /// 根据状态码构造错误，消息使用标准状态文本
    pub fn from_status(status: u16) -> Self {
        let reason = http::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown Status");
        Self::Status {
            status,
            message: format!("Error response: {}", reason),
        }
    }

    /// 上游报告的 HTTP 状态码（如果有）
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// 普通生成请求（由上游根据描述自动作词）
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub prompt: String,
    pub make_instrumental: bool,
    pub model: Model,
}

/// 自定义生成请求（调用方提供歌词、风格与标题）
#[derive(Debug, Clone)]
pub struct CustomGenerateRequest {
    /// 歌词
    pub prompt: String,
    /// 风格
    pub tags: String,
    pub title: String,
    pub make_instrumental: bool,
    pub model: Model,
}

/// 续写已有歌曲
#[derive(Debug, Clone)]
pub struct ExtendAudioRequest {
    pub audio_id: String,
    pub prompt: String,
    /// 续写起点，如 `00:30`；`0` 表示从结尾续写
    pub continue_at: String,
    pub tags: String,
    pub title: String,
    pub model: Model,
}

/// Song Generator Port
///
/// 每个方法对应一次上游调用，不做重试
#[async_trait]
pub trait SongGeneratorPort: Send + Sync {
    /// 同步生成，等待上游返回全部歌曲
    async fn generate(&self, request: GenerateRequest) -> Result<Vec<AudioRecord>, UpstreamError>;

    async fn custom_generate(
        &self,
        request: CustomGenerateRequest,
    ) -> Result<Vec<AudioRecord>, UpstreamError>;

    /// 提交异步生成任务，只返回任务 ID
    async fn generate_task(&self, request: GenerateRequest) -> Result<String, UpstreamError>;

    async fn custom_generate_task(
        &self,
        request: CustomGenerateRequest,
    ) -> Result<String, UpstreamError>;

    /// 查询任务状态
    async fn get_task(&self, task_id: &str) -> Result<GenerationTask, UpstreamError>;

    async fn generate_lyrics(&self, prompt: &str) -> Result<LyricResult, UpstreamError>;

    async fn extend_audio(&self, request: ExtendAudioRequest) -> Result<AudioRecord, UpstreamError>;
}
