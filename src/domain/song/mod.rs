//! Song Context - 歌曲生成限界上下文
//!
//! 职责:
//! - 生成结果的标准化记录
//! - 模型与动作枚举

mod records;
mod value_objects;

pub use records::{AudioRecord, GenerationTask, LyricResult};
pub use value_objects::{Action, Model};
