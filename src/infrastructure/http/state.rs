//! Application State
//!
//! 启动时显式构造，包含所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CustomGenerateSongHandler, ExtendAudioHandler, GenerateLyricsHandler, GenerateSongHandler,
    SubmitCustomGenerateTaskHandler, SubmitGenerateTaskHandler,
    // Query handlers
    GetTaskHandler,
    // Ports
    SongGeneratorPort,
};

/// 应用状态
///
/// 只读，所有请求共享
pub struct AppState {
    /// 原样暴露给前端的实现类型
    pub implementation_type: Option<String>,

    // ========== Command Handlers ==========
    pub generate_handler: GenerateSongHandler,
    pub custom_generate_handler: CustomGenerateSongHandler,
    pub generate_task_handler: SubmitGenerateTaskHandler,
    pub custom_generate_task_handler: SubmitCustomGenerateTaskHandler,
    pub generate_lyrics_handler: GenerateLyricsHandler,
    pub extend_audio_handler: ExtendAudioHandler,

    // ========== Query Handlers ==========
    pub get_task_handler: GetTaskHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(generator: Arc<dyn SongGeneratorPort>, implementation_type: Option<String>) -> Self {
        Self {
            implementation_type,

            // Command handlers
            generate_handler: GenerateSongHandler::new(generator.clone()),
            custom_generate_handler: CustomGenerateSongHandler::new(generator.clone()),
            generate_task_handler: SubmitGenerateTaskHandler::new(generator.clone()),
            custom_generate_task_handler: SubmitCustomGenerateTaskHandler::new(generator.clone()),
            generate_lyrics_handler: GenerateLyricsHandler::new(generator.clone()),
            extend_audio_handler: ExtendAudioHandler::new(generator.clone()),

            // Query handlers
            get_task_handler: GetTaskHandler::new(generator),
        }
    }
}
