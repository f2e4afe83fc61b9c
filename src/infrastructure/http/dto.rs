//! Data Transfer Objects
//!
//! 前端契约：请求字段名与原有前端保持一致，响应直接输出记录本身（无外层包裹）

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::Model;

/// 空字符串或 null 视为未指定模型
fn optional_model<'de, D>(deserializer: D) -> Result<Option<Model>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => name.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// null 与缺失字段一样取默认值
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Generate DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub prompt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub make_instrumental: bool,
    #[serde(default, deserialize_with = "optional_model")]
    pub model: Option<Model>,
}

#[derive(Debug, Deserialize)]
pub struct CustomGenerateRequest {
    /// 歌词
    #[serde(default, deserialize_with = "null_as_default")]
    pub prompt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub make_instrumental: bool,
    #[serde(default, deserialize_with = "optional_model")]
    pub model: Option<Model>,
}

#[derive(Debug, Deserialize)]
pub struct ExtendAudioRequest {
    pub audio_id: String,
    pub prompt: Option<String>,
    pub continue_at: Option<String>,
    pub tags: Option<String>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "optional_model")]
    pub model: Option<Model>,
}

#[derive(Debug, Serialize)]
pub struct TaskIdResponse {
    pub task_id: String,
}

// ============================================================================
// Lyrics DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateLyricsRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub prompt: String,
}

// ============================================================================
// Task DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GetTaskParams {
    pub id: Option<String>,
}

// ============================================================================
// Config DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct RemoteConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}
