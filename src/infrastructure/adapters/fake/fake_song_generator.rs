//! Fake Song Generator - 不调用上游的生成器
//!
//! 立即返回构造好的记录，并记录每次调用，供测试与离线前端开发使用

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use crate::application::ports::{
    CustomGenerateRequest, ExtendAudioRequest, GenerateRequest, SongGeneratorPort, UpstreamError,
};
use crate::domain::{parse_lyrics, AudioRecord, GenerationTask, LyricResult, Model};

/// 每次生成返回的歌曲数（与上游一致，一次两首）
const CLIPS_PER_GENERATION: usize = 2;

/// 已记录的调用
#[derive(Debug, Clone)]
pub enum FakeCall {
    Generate(GenerateRequest),
    CustomGenerate(CustomGenerateRequest),
    GenerateTask(GenerateRequest),
    CustomGenerateTask(CustomGenerateRequest),
    GetTask(String),
    GenerateLyrics(String),
    ExtendAudio(ExtendAudioRequest),
}

#[derive(Debug, Clone, Copy)]
enum Failure {
    Status(u16),
    Network,
}

/// Fake Song Generator
#[derive(Default)]
pub struct FakeSongGenerator {
    failure: Option<Failure>,
    calls: Mutex<Vec<FakeCall>>,
}

impl FakeSongGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 所有调用都返回给定状态码的上游错误
    pub fn failing_with_status(mut self, status: u16) -> Self {
        self.failure = Some(Failure::Status(status));
        self
    }

    /// 所有调用都返回网络错误
    pub fn failing_with_network_error(mut self) -> Self {
        self.failure = Some(Failure::Network);
        self
    }

    /// 目前为止的调用记录
    pub fn calls(&self) -> Vec<FakeCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, call: FakeCall) -> Result<(), UpstreamError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);

        match self.failure {
            Some(Failure::Status(status)) => Err(UpstreamError::from_status(status)),
            Some(Failure::Network) => Err(UpstreamError::Network(
                "Cannot connect to upstream: fake connection refused".to_string(),
            )),
            None => Ok(()),
        }
    }

    fn clip(
        task_id: &str,
        model: Model,
        prompt: &str,
        lyric: Option<&str>,
        title: Option<&str>,
        tags: Option<&str>,
    ) -> AudioRecord {
        let id = Uuid::new_v4().to_string();
        AudioRecord {
            title: title.map(str::to_string),
            image_url: Some(format!("https://cdn.fake.local/{}.png", id)),
            lyric: lyric.map(parse_lyrics),
            audio_url: Some(format!("https://cdn.fake.local/{}.mp3", id)),
            video_url: None,
            created_at: Utc::now().to_rfc3339(),
            model_name: model.as_str().to_string(),
            prompt: Some(prompt.to_string()),
            status: "complete".to_string(),
            tags: tags.map(str::to_string),
            negative_tags: None,
            duration: Some(120.0),
            error_message: None,
            task_id: Some(task_id.to_string()),
            id,
        }
    }

    fn new_task_id() -> String {
        format!("fake-{}", Uuid::new_v4())
    }
}

#[async_trait]
impl SongGeneratorPort for FakeSongGenerator {
    async fn generate(&self, request: GenerateRequest) -> Result<Vec<AudioRecord>, UpstreamError> {
        self.record(FakeCall::Generate(request.clone()))?;
        let task_id = Self::new_task_id();

        Ok((0..CLIPS_PER_GENERATION)
            .map(|_| Self::clip(&task_id, request.model, &request.prompt, None, None, None))
            .collect())
    }

    async fn custom_generate(
        &self,
        request: CustomGenerateRequest,
    ) -> Result<Vec<AudioRecord>, UpstreamError> {
        self.record(FakeCall::CustomGenerate(request.clone()))?;
        let task_id = Self::new_task_id();

        Ok((0..CLIPS_PER_GENERATION)
            .map(|_| {
                Self::clip(
                    &task_id,
                    request.model,
                    &request.prompt,
                    Some(&request.prompt),
                    Some(&request.title),
                    Some(&request.tags),
                )
            })
            .collect())
    }

    async fn generate_task(&self, request: GenerateRequest) -> Result<String, UpstreamError> {
        self.record(FakeCall::GenerateTask(request))?;
        Ok(Self::new_task_id())
    }

    async fn custom_generate_task(
        &self,
        request: CustomGenerateRequest,
    ) -> Result<String, UpstreamError> {
        self.record(FakeCall::CustomGenerateTask(request))?;
        Ok(Self::new_task_id())
    }

    async fn get_task(&self, task_id: &str) -> Result<GenerationTask, UpstreamError> {
        self.record(FakeCall::GetTask(task_id.to_string()))?;

        Ok(GenerationTask {
            task_id: task_id.to_string(),
            success: true,
            audios: (0..CLIPS_PER_GENERATION)
                .map(|_| Self::clip(task_id, Model::default(), "", None, None, None))
                .collect(),
        })
    }

    async fn generate_lyrics(&self, prompt: &str) -> Result<LyricResult, UpstreamError> {
        self.record(FakeCall::GenerateLyrics(prompt.to_string()))?;

        Ok(LyricResult {
            title: "Untitled".to_string(),
            text: format!("[Verse]\n{}\n[Chorus]\n{}", prompt, prompt),
        })
    }

    async fn extend_audio(&self, request: ExtendAudioRequest) -> Result<AudioRecord, UpstreamError> {
        self.record(FakeCall::ExtendAudio(request.clone()))?;

        Ok(Self::clip(
            &Self::new_task_id(),
            request.model,
            &request.prompt,
            None,
            Some(&request.title),
            Some(&request.tags),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let fake = FakeSongGenerator::new();
        fake.generate_lyrics("a").await.unwrap();
        fake.get_task("t").await.unwrap();

        let calls = fake.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(&calls[0], FakeCall::GenerateLyrics(p) if p == "a"));
        assert!(matches!(&calls[1], FakeCall::GetTask(id) if id == "t"));
    }

    #[tokio::test]
    async fn test_failure_modes() {
        let fake = FakeSongGenerator::new().failing_with_status(500);
        let err = fake.generate_lyrics("a").await.unwrap_err();
        assert_eq!(err.status(), Some(500));

        let fake = FakeSongGenerator::new().failing_with_network_error();
        let err = fake.get_task("t").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Network(_)));
    }
}
