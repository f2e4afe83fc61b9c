//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Song Context: 歌曲生成结果

pub mod song;

// 歌词规范化
mod lyrics;

pub use lyrics::parse_lyrics;
pub use song::{Action, AudioRecord, GenerationTask, LyricResult, Model};
