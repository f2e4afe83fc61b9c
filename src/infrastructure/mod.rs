//! Infrastructure Layer - 基础设施层
//!
//! - adapters: 上游 AceData 客户端与离线 Fake 生成器
//! - http: 面向前端的 JSON API

pub mod adapters;
pub mod http;
