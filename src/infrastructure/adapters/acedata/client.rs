//! AceData Suno Client - 调用 AceData 的 Suno 兼容接口
//!
//! 实现 SongGeneratorPort trait，每个方法只发起一次 POST 请求
//!
//! 上游 API:
//! POST {base_url}/audios   生成/续写
//! POST {base_url}/tasks    查询任务
//! POST {base_url}/lyrics   生成歌词
//! Headers: accept / authorization: Bearer <token> / content-type 均为 JSON

use async_trait::async_trait;
use http::header::ACCEPT;
use http::StatusCode;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};

use super::wire::{
    AudioPayload, GenerationEnvelope, LyricsEnvelope, LyricsPayload, TaskEnvelope,
    TaskQueryPayload, TaskSubmitEnvelope,
};
use crate::application::ports::{
    CustomGenerateRequest, ExtendAudioRequest, GenerateRequest, SongGeneratorPort, UpstreamError,
};
use crate::domain::{AudioRecord, GenerationTask, LyricResult};

const AUDIOS_PATH: &str = "/audios";
const TASKS_PATH: &str = "/tasks";
const LYRICS_PATH: &str = "/lyrics";

/// AceData 客户端配置
#[derive(Debug, Clone)]
pub struct AceDataClientConfig {
    /// 上游基础 URL
    pub base_url: String,
    /// Bearer token
    pub token: String,
    /// 任务完成回调地址
    pub callback_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for AceDataClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.acedata.cloud/suno".to_string(),
            token: String::new(),
            callback_url: "http://localhost:3000/api/task_callback".to_string(),
            timeout_secs: 300,
        }
    }
}

impl AceDataClientConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            ..Default::default()
        }
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// AceData Suno 客户端
pub struct AceDataClient {
    client: Client,
    config: AceDataClientConfig,
}

impl AceDataClient {
    /// 创建新的客户端
    pub fn new(config: AceDataClientConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// 发送一次 POST 并按给定结构解析响应
    async fn post<P, R>(&self, path: &str, payload: &P) -> Result<R, UpstreamError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        let body = serde_json::to_string(payload).unwrap_or_default();

        tracing::info!(url = %url, payload = %body, "Sending upstream request");

        let started = Instant::now();
        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .bearer_auth(&self.config.token)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                let elapsed_ms = started.elapsed().as_millis() as u64;
                tracing::error!(url = %url, elapsed_ms, error = %e, "Upstream request failed");
                if e.is_timeout() {
                    UpstreamError::Timeout
                } else if e.is_connect() {
                    UpstreamError::Network(format!("Cannot connect to upstream: {}", e))
                } else {
                    UpstreamError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::Network(format!("Failed to read response: {}", e)))?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        if status != StatusCode::OK {
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                elapsed_ms,
                body = %text,
                "Upstream returned error status"
            );
            return Err(UpstreamError::from_status(status.as_u16()));
        }

        tracing::info!(url = %url, status = status.as_u16(), elapsed_ms, "Upstream request completed");
        tracing::debug!(body = %text, "Upstream response body");

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(url = %url, error = %e, "Upstream response does not match contract");
            UpstreamError::ContractViolation(format!("{}: {}", path, e))
        })
    }

    async fn submit_task(&self, payload: AudioPayload) -> Result<String, UpstreamError> {
        let payload = payload.with_callback(self.config.callback_url.clone());
        tracing::info!(action = payload.action.as_str(), custom = payload.custom, "Submitting generation task");
        let envelope: TaskSubmitEnvelope = self.post(AUDIOS_PATH, &payload).await?;
        Ok(envelope.task_id)
    }

    async fn generate_audios(&self, payload: AudioPayload) -> Result<Vec<AudioRecord>, UpstreamError> {
        tracing::info!(action = payload.action.as_str(), custom = payload.custom, "Generating audios");
        let envelope: GenerationEnvelope = self.post(AUDIOS_PATH, &payload).await?;
        let records = envelope.into_records();
        tracing::info!(count = records.len(), "Generate response mapped");
        Ok(records)
    }
}

#[async_trait]
impl SongGeneratorPort for AceDataClient {
    async fn generate(&self, request: GenerateRequest) -> Result<Vec<AudioRecord>, UpstreamError> {
        self.generate_audios(AudioPayload::generate(&request)).await
    }

    async fn custom_generate(
        &self,
        request: CustomGenerateRequest,
    ) -> Result<Vec<AudioRecord>, UpstreamError> {
        self.generate_audios(AudioPayload::custom(&request)).await
    }

    async fn generate_task(&self, request: GenerateRequest) -> Result<String, UpstreamError> {
        self.submit_task(AudioPayload::generate(&request)).await
    }

    async fn custom_generate_task(
        &self,
        request: CustomGenerateRequest,
    ) -> Result<String, UpstreamError> {
        self.submit_task(AudioPayload::custom(&request)).await
    }

    async fn get_task(&self, task_id: &str) -> Result<GenerationTask, UpstreamError> {
        let envelope: TaskEnvelope = self
            .post(TASKS_PATH, &TaskQueryPayload::retrieve(task_id))
            .await?;
        let response = envelope.response;
        let task_id = response.task_id.unwrap_or_else(|| task_id.to_string());

        let audios = response
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|audio| audio.into_record(Some(&task_id)))
            .collect();

        Ok(GenerationTask {
            success: response.success.unwrap_or(false),
            task_id,
            audios,
        })
    }

    async fn generate_lyrics(&self, prompt: &str) -> Result<LyricResult, UpstreamError> {
        let payload = LyricsPayload {
            prompt: prompt.to_string(),
        };
        let envelope: LyricsEnvelope = self.post(LYRICS_PATH, &payload).await?;

        Ok(LyricResult {
            title: envelope.data.title,
            text: envelope.data.text,
        })
    }

    async fn extend_audio(&self, request: ExtendAudioRequest) -> Result<AudioRecord, UpstreamError> {
        // 上游续写沿用 /lyrics 路径
        let payload = AudioPayload::extend(&request);
        tracing::info!(action = payload.action.as_str(), audio_id = %request.audio_id, "Extending audio");
        let envelope: GenerationEnvelope = self.post(LYRICS_PATH, &payload).await?;

        envelope.into_records().into_iter().next().ok_or_else(|| {
            UpstreamError::ContractViolation("extend response contains no audio".to_string())
        })
    }
}
