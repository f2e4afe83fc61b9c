//! AceData 线协议
//!
//! 字段名称与结构由上游决定，这里只做显式建模：
//! - 生成: `{task_id, data: [audio...]}`
//! - 任务查询: `{response: {task_id, success, data}}`
//! - 歌词: `{data: {title, text}}`

use serde::{Deserialize, Deserializer, Serialize};

use crate::application::ports::{CustomGenerateRequest, ExtendAudioRequest, GenerateRequest};
use crate::domain::{parse_lyrics, Action, AudioRecord, Model};

// ============================================================================
// 请求体
// ============================================================================

/// `/audios` 与续写请求体
///
/// `action` 必填且唯一，`custom` 总是显式给出
#[derive(Debug, Clone, Serialize)]
pub struct AudioPayload {
    pub action: Action,
    pub custom: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lyric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrumental: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl AudioPayload {
    fn empty(action: Action, custom: bool) -> Self {
        Self {
            action,
            custom,
            prompt: None,
            lyric: None,
            model: None,
            instrumental: None,
            title: None,
            style: None,
            audio_id: None,
            continue_at: None,
            callback_url: None,
        }
    }

    /// 描述生成：上游自动作词
    pub fn generate(request: &GenerateRequest) -> Self {
        Self {
            prompt: Some(request.prompt.clone()),
            instrumental: Some(request.make_instrumental),
            model: Some(request.model),
            ..Self::empty(Action::Generate, false)
        }
    }

    /// 自定义生成：prompt 作为歌词，tags 作为风格
    pub fn custom(request: &CustomGenerateRequest) -> Self {
        Self {
            lyric: Some(request.prompt.clone()),
            style: Some(request.tags.clone()),
            title: Some(request.title.clone()),
            instrumental: Some(request.make_instrumental),
            model: Some(request.model),
            ..Self::empty(Action::Generate, true)
        }
    }

    pub fn extend(request: &ExtendAudioRequest) -> Self {
        Self {
            audio_id: Some(request.audio_id.clone()),
            style: Some(request.tags.clone()),
            title: Some(request.title.clone()),
            prompt: Some(request.prompt.clone()),
            model: Some(request.model),
            continue_at: Some(request.continue_at.clone()),
            ..Self::empty(Action::Extend, true)
        }
    }

    pub fn with_callback(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }
}

/// `/tasks` 请求体
#[derive(Debug, Clone, Serialize)]
pub struct TaskQueryPayload {
    pub id: String,
    pub action: &'static str,
}

impl TaskQueryPayload {
    pub fn retrieve(task_id: impl Into<String>) -> Self {
        Self {
            id: task_id.into(),
            action: "retrieve",
        }
    }
}

/// `/lyrics` 请求体
#[derive(Debug, Clone, Serialize)]
pub struct LyricsPayload {
    pub prompt: String,
}

// ============================================================================
// 响应体
// ============================================================================

/// 时长可能是数字，也可能是数字字符串；无法解析的字符串视为缺失
fn lenient_duration<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDuration {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<RawDuration>::deserialize(deserializer)? {
        Some(RawDuration::Number(secs)) => Some(secs),
        Some(RawDuration::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

/// 上游单首歌曲
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamAudio {
    pub id: String,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub lyric: Option<String>,
    pub audio_url: Option<String>,
    pub video_url: Option<String>,
    pub created_at: Option<String>,
    pub model: Option<String>,
    pub prompt: Option<String>,
    pub style: Option<String>,
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_duration")]
    pub duration: Option<f64>,
}

impl UpstreamAudio {
    /// 映射为本地记录，并附加批次 task_id
    pub fn into_record(self, task_id: Option<&str>) -> AudioRecord {
        AudioRecord {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            lyric: self.lyric.as_deref().map(parse_lyrics),
            audio_url: self.audio_url,
            video_url: self.video_url,
            created_at: self.created_at.unwrap_or_default(),
            model_name: self.model.unwrap_or_default(),
            prompt: self.prompt,
            status: self.state.unwrap_or_default(),
            tags: self.style,
            negative_tags: None,
            duration: self.duration,
            error_message: None,
            task_id: task_id.map(str::to_string),
        }
    }
}

/// 同步生成响应
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationEnvelope {
    pub task_id: Option<String>,
    pub data: Vec<UpstreamAudio>,
}

impl GenerationEnvelope {
    pub fn into_records(self) -> Vec<AudioRecord> {
        let task_id = self.task_id;
        self.data
            .into_iter()
            .map(|audio| audio.into_record(task_id.as_deref()))
            .collect()
    }
}

/// 任务提交响应（带 callback_url 时上游立即返回）
#[derive(Debug, Clone, Deserialize)]
pub struct TaskSubmitEnvelope {
    pub task_id: String,
}

/// 任务查询响应
#[derive(Debug, Clone, Deserialize)]
pub struct TaskEnvelope {
    pub response: TaskResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskResponse {
    pub task_id: Option<String>,
    pub success: Option<bool>,
    pub data: Option<Vec<UpstreamAudio>>,
}

/// 歌词响应
#[derive(Debug, Clone, Deserialize)]
pub struct LyricsEnvelope {
    pub data: LyricsData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LyricsData {
    #[serde(default)]
    pub title: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_generate_payload_shape() {
        let payload = AudioPayload::generate(&GenerateRequest {
            prompt: "sad ballad about rain".to_string(),
            make_instrumental: false,
            model: Model::V3_5,
        });

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "action": "generate",
                "custom": false,
                "prompt": "sad ballad about rain",
                "instrumental": false,
                "model": "chirp-v3-5"
            })
        );
    }

    #[test]
    fn test_custom_payload_maps_prompt_to_lyric() {
        let payload = AudioPayload::custom(&CustomGenerateRequest {
            prompt: "[Verse]\nhello".to_string(),
            tags: "jazz".to_string(),
            title: "Hello".to_string(),
            make_instrumental: false,
            model: Model::V4,
        })
        .with_callback("http://localhost:3000/api/task_callback");

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["custom"], true);
        assert_eq!(value["lyric"], "[Verse]\nhello");
        assert_eq!(value["style"], "jazz");
        assert_eq!(value["callback_url"], "http://localhost:3000/api/task_callback");
        assert!(value.get("prompt").is_none());
    }

    #[test]
    fn test_extend_payload_shape() {
        let payload = AudioPayload::extend(&ExtendAudioRequest {
            audio_id: "clip-1".to_string(),
            prompt: String::new(),
            continue_at: "00:30".to_string(),
            tags: String::new(),
            title: String::new(),
            model: Model::V3_5,
        });

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["action"], "extend");
        assert_eq!(value["custom"], true);
        assert_eq!(value["audio_id"], "clip-1");
        assert_eq!(value["continue_at"], "00:30");
    }

    #[test]
    fn test_envelope_maps_fields() {
        let envelope: GenerationEnvelope = serde_json::from_value(json!({
            "success": true,
            "task_id": "t-1",
            "data": [{
                "id": "a-1",
                "title": "Rain",
                "lyric": "line one\n\n\nline two",
                "model": "chirp-v3-5",
                "style": "sad, piano",
                "state": "succeeded",
                "duration": 182.4,
                "created_at": "2024-06-01T00:00:00.000Z"
            }]
        }))
        .unwrap();

        let records = envelope.into_records();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.lyric.as_deref(), Some("line one\nline two"));
        assert_eq!(record.tags.as_deref(), Some("sad, piano"));
        assert_eq!(record.status, "succeeded");
        assert_eq!(record.model_name, "chirp-v3-5");
        assert_eq!(record.task_id.as_deref(), Some("t-1"));
        assert_eq!(record.duration, Some(182.4));
    }

    #[test]
    fn test_duration_accepts_numeric_string() {
        let audio = |duration: Value| -> UpstreamAudio {
            serde_json::from_value(json!({"id": "a", "duration": duration})).unwrap()
        };

        assert_eq!(audio(json!("120.5")).duration, Some(120.5));
        assert_eq!(audio(json!(" 61 ")).duration, Some(61.0));
        assert_eq!(audio(json!(95)).duration, Some(95.0));
        assert_eq!(audio(json!("")).duration, None);
        assert_eq!(audio(json!("n/a")).duration, None);
        assert_eq!(audio(Value::Null).duration, None);

        let missing: UpstreamAudio = serde_json::from_value(json!({"id": "a"})).unwrap();
        assert_eq!(missing.duration, None);
    }

    #[test]
    fn test_envelope_requires_data() {
        let result: Result<GenerationEnvelope, _> =
            serde_json::from_value(json!({"task_id": "t-1"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_audio_requires_id() {
        let result: Result<UpstreamAudio, _> = serde_json::from_value(json!({"title": "x"}));
        assert!(result.is_err());
    }
}
