//! Generate Commands - 歌曲生成相关命令

use crate::domain::Model;

/// 普通生成（等待完成）
#[derive(Debug, Clone)]
pub struct GenerateSong {
    pub prompt: String,
    pub make_instrumental: bool,
    /// 为空时使用默认模型
    pub model: Option<Model>,
}

/// 自定义生成（等待完成）
#[derive(Debug, Clone)]
pub struct CustomGenerateSong {
    /// 歌词
    pub prompt: String,
    pub tags: String,
    pub title: String,
    pub make_instrumental: bool,
    pub model: Option<Model>,
}

/// 提交普通生成任务（不等待完成）
#[derive(Debug, Clone)]
pub struct SubmitGenerateTask {
    pub prompt: String,
    pub make_instrumental: bool,
    pub model: Option<Model>,
}

/// 提交自定义生成任务（不等待完成）
#[derive(Debug, Clone)]
pub struct SubmitCustomGenerateTask {
    pub prompt: String,
    pub tags: String,
    pub title: String,
    pub make_instrumental: bool,
    pub model: Option<Model>,
}

/// 续写歌曲
#[derive(Debug, Clone)]
pub struct ExtendAudio {
    pub audio_id: String,
    pub prompt: Option<String>,
    pub continue_at: Option<String>,
    pub tags: Option<String>,
    pub title: Option<String>,
    pub model: Option<Model>,
}

/// 任务提交响应
#[derive(Debug, Clone)]
pub struct SubmitTaskResponse {
    pub task_id: String,
}
