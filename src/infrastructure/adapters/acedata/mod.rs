//! AceData Adapter - Suno 兼容的上游生成服务

mod client;
mod wire;

pub use client::{AceDataClient, AceDataClientConfig};
