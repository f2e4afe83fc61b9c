//! Lyrics Command Handlers

use std::sync::Arc;

use crate::application::commands::GenerateLyrics;
use crate::application::error::ApplicationError;
use crate::application::ports::SongGeneratorPort;
use crate::domain::LyricResult;

/// GenerateLyrics Handler
pub struct GenerateLyricsHandler {
    generator: Arc<dyn SongGeneratorPort>,
}

impl GenerateLyricsHandler {
    pub fn new(generator: Arc<dyn SongGeneratorPort>) -> Self {
        Self { generator }
    }

    pub async fn handle(&self, command: GenerateLyrics) -> Result<LyricResult, ApplicationError> {
        if command.prompt.trim().is_empty() {
            return Err(ApplicationError::validation("prompt cannot be empty"));
        }

        Ok(self.generator.generate_lyrics(&command.prompt).await?)
    }
}
