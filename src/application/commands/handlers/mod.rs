//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod generate_handlers;
mod lyrics_handlers;

pub use generate_handlers::*;
pub use lyrics_handlers::*;
