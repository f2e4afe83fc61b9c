//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：所有会在上游触发生成的操作

mod generate_commands;
mod lyrics_commands;

pub mod handlers;

pub use generate_commands::*;
pub use lyrics_commands::*;
