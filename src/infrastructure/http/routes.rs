//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                  GET   健康检查
//! - /api/generate              POST  描述生成（等待完成）
//! - /api/custom_generate       POST  自定义生成（等待完成）
//! - /api/generate_task         POST  提交描述生成任务
//! - /api/custom_generate_task  POST  提交自定义生成任务
//! - /api/extend_audio          POST  续写歌曲
//! - /api/generate_lyrics       POST  生成歌词
//! - /api/get_task              GET   查询任务 (?id=)
//! - /api/task_callback         POST  上游任务完成回调
//! - /api/get_remote_config     GET   获取实现类型
//!
//! 每个路由只接受一种方法，其余方法返回 405 并带 Allow 头；
//! OPTIONS 预检由 CORS 层统一响应

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 任务完成回调路径（相对于公开 Base URL）
pub const TASK_CALLBACK_PATH: &str = "/api/task_callback";

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/generate", post(handlers::generate))
        .route("/custom_generate", post(handlers::custom_generate))
        .route("/generate_task", post(handlers::generate_task))
        .route("/custom_generate_task", post(handlers::custom_generate_task))
        .route("/extend_audio", post(handlers::extend_audio))
        .route("/generate_lyrics", post(handlers::generate_lyrics))
        .route("/get_task", get(handlers::get_task))
        .route("/task_callback", post(handlers::task_callback))
        .route("/get_remote_config", get(handlers::get_remote_config))
}
