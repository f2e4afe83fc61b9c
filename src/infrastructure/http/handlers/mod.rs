//! HTTP Handlers

mod generate;
mod lyrics;
mod ping;
mod remote_config;
mod task;

pub use generate::*;
pub use lyrics::*;
pub use ping::*;
pub use remote_config::*;
pub use task::*;
