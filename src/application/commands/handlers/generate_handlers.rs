//! Generate Command Handlers

use std::sync::Arc;

use crate::application::commands::{
    CustomGenerateSong, ExtendAudio, GenerateSong, SubmitCustomGenerateTask, SubmitGenerateTask,
    SubmitTaskResponse,
};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    CustomGenerateRequest, ExtendAudioRequest, GenerateRequest, SongGeneratorPort,
};
use crate::domain::AudioRecord;

/// 续写默认起点：从歌曲结尾开始
const DEFAULT_CONTINUE_AT: &str = "0";

fn require_prompt(prompt: &str) -> Result<(), ApplicationError> {
    if prompt.trim().is_empty() {
        return Err(ApplicationError::validation("prompt cannot be empty"));
    }
    Ok(())
}

// ============================================================================
// GenerateSong
// ============================================================================

/// GenerateSong Handler
pub struct GenerateSongHandler {
    generator: Arc<dyn SongGeneratorPort>,
}

impl GenerateSongHandler {
    pub fn new(generator: Arc<dyn SongGeneratorPort>) -> Self {
        Self { generator }
    }

    pub async fn handle(&self, command: GenerateSong) -> Result<Vec<AudioRecord>, ApplicationError> {
        require_prompt(&command.prompt)?;

        let request = GenerateRequest {
            prompt: command.prompt,
            make_instrumental: command.make_instrumental,
            model: command.model.unwrap_or_default(),
        };

        Ok(self.generator.generate(request).await?)
    }
}

// ============================================================================
// CustomGenerateSong
// ============================================================================

/// CustomGenerateSong Handler
///
/// 纯音乐场景下歌词可以为空，因此不校验 prompt
pub struct CustomGenerateSongHandler {
    generator: Arc<dyn SongGeneratorPort>,
}

impl CustomGenerateSongHandler {
    pub fn new(generator: Arc<dyn SongGeneratorPort>) -> Self {
        Self { generator }
    }

    pub async fn handle(
        &self,
        command: CustomGenerateSong,
    ) -> Result<Vec<AudioRecord>, ApplicationError> {
        let request = CustomGenerateRequest {
            prompt: command.prompt,
            tags: command.tags,
            title: command.title,
            make_instrumental: command.make_instrumental,
            model: command.model.unwrap_or_default(),
        };

        Ok(self.generator.custom_generate(request).await?)
    }
}

// ============================================================================
// SubmitGenerateTask
// ============================================================================

/// SubmitGenerateTask Handler
pub struct SubmitGenerateTaskHandler {
    generator: Arc<dyn SongGeneratorPort>,
}

impl SubmitGenerateTaskHandler {
    pub fn new(generator: Arc<dyn SongGeneratorPort>) -> Self {
        Self { generator }
    }

    pub async fn handle(
        &self,
        command: SubmitGenerateTask,
    ) -> Result<SubmitTaskResponse, ApplicationError> {
        require_prompt(&command.prompt)?;

        let request = GenerateRequest {
            prompt: command.prompt,
            make_instrumental: command.make_instrumental,
            model: command.model.unwrap_or_default(),
        };

        let task_id = self.generator.generate_task(request).await?;
        tracing::info!(task_id = %task_id, "Generate task submitted");

        Ok(SubmitTaskResponse { task_id })
    }
}

// ============================================================================
// SubmitCustomGenerateTask
// ============================================================================

/// SubmitCustomGenerateTask Handler
pub struct SubmitCustomGenerateTaskHandler {
    generator: Arc<dyn SongGeneratorPort>,
}

impl SubmitCustomGenerateTaskHandler {
    pub fn new(generator: Arc<dyn SongGeneratorPort>) -> Self {
        Self { generator }
    }

    pub async fn handle(
        &self,
        command: SubmitCustomGenerateTask,
    ) -> Result<SubmitTaskResponse, ApplicationError> {
        let request = CustomGenerateRequest {
            prompt: command.prompt,
            tags: command.tags,
            title: command.title,
            make_instrumental: command.make_instrumental,
            model: command.model.unwrap_or_default(),
        };

        let task_id = self.generator.custom_generate_task(request).await?;
        tracing::info!(task_id = %task_id, "Custom generate task submitted");

        Ok(SubmitTaskResponse { task_id })
    }
}

// ============================================================================
// ExtendAudio
// ============================================================================

/// ExtendAudio Handler
pub struct ExtendAudioHandler {
    generator: Arc<dyn SongGeneratorPort>,
}

impl ExtendAudioHandler {
    pub fn new(generator: Arc<dyn SongGeneratorPort>) -> Self {
        Self { generator }
    }

    pub async fn handle(&self, command: ExtendAudio) -> Result<AudioRecord, ApplicationError> {
        if command.audio_id.trim().is_empty() {
            return Err(ApplicationError::validation("audio_id cannot be empty"));
        }

        let request = ExtendAudioRequest {
            audio_id: command.audio_id,
            prompt: command.prompt.unwrap_or_default(),
            continue_at: command
                .continue_at
                .unwrap_or_else(|| DEFAULT_CONTINUE_AT.to_string()),
            tags: command.tags.unwrap_or_default(),
            title: command.title.unwrap_or_default(),
            model: command.model.unwrap_or_default(),
        };

        Ok(self.generator.extend_audio(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Model;
    use crate::infrastructure::adapters::{FakeCall, FakeSongGenerator};

    #[tokio::test]
    async fn test_generate_rejects_blank_prompt_without_calling_upstream() {
        let fake = Arc::new(FakeSongGenerator::new());
        let handler = GenerateSongHandler::new(fake.clone());

        let result = handler
            .handle(GenerateSong {
                prompt: "   ".to_string(),
                make_instrumental: false,
                model: None,
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_generate_applies_default_model() {
        let fake = Arc::new(FakeSongGenerator::new());
        let handler = GenerateSongHandler::new(fake.clone());

        let records = handler
            .handle(GenerateSong {
                prompt: "sad ballad about rain".to_string(),
                make_instrumental: true,
                model: None,
            })
            .await
            .unwrap();

        assert!(!records.is_empty());
        match &fake.calls()[0] {
            FakeCall::Generate(req) => {
                assert_eq!(req.model, Model::V3_5);
                assert!(req.make_instrumental);
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_custom_generate_allows_empty_lyrics() {
        let fake = Arc::new(FakeSongGenerator::new());
        let handler = CustomGenerateSongHandler::new(fake.clone());

        let records = handler
            .handle(CustomGenerateSong {
                prompt: String::new(),
                tags: "lofi, chill".to_string(),
                title: "Night Drive".to_string(),
                make_instrumental: true,
                model: Some(Model::V4),
            })
            .await
            .unwrap();

        assert!(records.iter().all(|r| r.tags.as_deref() == Some("lofi, chill")));
    }

    #[tokio::test]
    async fn test_submit_task_returns_task_id() {
        let fake = Arc::new(FakeSongGenerator::new());
        let handler = SubmitGenerateTaskHandler::new(fake.clone());

        let response = handler
            .handle(SubmitGenerateTask {
                prompt: "upbeat summer pop".to_string(),
                make_instrumental: false,
                model: None,
            })
            .await
            .unwrap();

        assert!(!response.task_id.is_empty());
    }

    #[tokio::test]
    async fn test_extend_fills_defaults() {
        let fake = Arc::new(FakeSongGenerator::new());
        let handler = ExtendAudioHandler::new(fake.clone());

        handler
            .handle(ExtendAudio {
                audio_id: "clip-1".to_string(),
                prompt: None,
                continue_at: None,
                tags: None,
                title: None,
                model: None,
            })
            .await
            .unwrap();

        match &fake.calls()[0] {
            FakeCall::ExtendAudio(req) => {
                assert_eq!(req.audio_id, "clip-1");
                assert_eq!(req.continue_at, "0");
                assert_eq!(req.prompt, "");
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_extend_requires_audio_id() {
        let fake = Arc::new(FakeSongGenerator::new());
        let handler = ExtendAudioHandler::new(fake.clone());

        let result = handler
            .handle(ExtendAudio {
                audio_id: String::new(),
                prompt: None,
                continue_at: None,
                tags: None,
                title: None,
                model: None,
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_propagates() {
        let fake = Arc::new(FakeSongGenerator::new().failing_with_status(402));
        let handler = CustomGenerateSongHandler::new(fake);

        let err = handler
            .handle(CustomGenerateSong {
                prompt: "la".to_string(),
                tags: String::new(),
                title: String::new(),
                make_instrumental: false,
                model: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.upstream_status(), Some(402));
    }
}
