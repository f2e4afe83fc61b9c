//! Task Handlers - 任务查询与上游回调

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::application::GetTask;
use crate::domain::GenerationTask;
use crate::infrastructure::http::dto::{Empty, GetTaskParams};
use crate::infrastructure::http::error::{ApiError, UpstreamMapping};
use crate::infrastructure::http::state::AppState;

// ============================================================================
// Get Task
// ============================================================================

pub async fn get_task(
    State(state): State<Arc<AppState>>,
    params: Result<Query<GetTaskParams>, QueryRejection>,
) -> Result<Json<GenerationTask>, ApiError> {
    let Query(params) = params?;
    let task_id = params
        .id
        .ok_or_else(|| ApiError::BadRequest("Missing parameter id".to_string()))?;

    let task = state
        .get_task_handler
        .handle(GetTask { task_id })
        .await
        .map_err(|e| ApiError::upstream(e, UpstreamMapping::InternalPrefixed))?;

    Ok(Json(task))
}

// ============================================================================
// Task Callback
// ============================================================================

/// 上游任务完成回调
///
/// 只记录日志，状态仍以上游为准，前端通过 get_task 轮询
pub async fn task_callback(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Empty>, ApiError> {
    let Json(body) = payload?;
    let object = body
        .as_object()
        .ok_or_else(|| ApiError::BadRequest("callback body must be a JSON object".to_string()))?;

    let task_id = object.get("task_id").and_then(Value::as_str).unwrap_or("unknown");
    let success = object.get("success").and_then(Value::as_bool);
    let audio_count = object
        .get("data")
        .and_then(Value::as_array)
        .map(|data| data.len());

    tracing::info!(
        task_id = %task_id,
        success = ?success,
        audio_count = ?audio_count,
        "Task callback received"
    );

    Ok(Json(Empty {}))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::infrastructure::adapters::{FakeCall, FakeSongGenerator};
    use crate::infrastructure::http::test_support::{fake_app, send_json};

    #[tokio::test]
    async fn test_get_task_missing_id_is_400_without_upstream_call() {
        let (app, fake) = fake_app(FakeSongGenerator::new());

        let (status, body) = send_json(app, "GET", "/api/get_task", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing parameter id");
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_get_task_returns_task() {
        let (app, fake) = fake_app(FakeSongGenerator::new());

        let (status, body) = send_json(app, "GET", "/api/get_task?id=task-9", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["task_id"], "task-9");
        assert_eq!(body["success"], true);
        assert!(body["audios"].is_array());
        assert!(matches!(&fake.calls()[0], FakeCall::GetTask(id) if id == "task-9"));
    }

    #[tokio::test]
    async fn test_get_task_upstream_failure_is_500() {
        let (app, _) = fake_app(FakeSongGenerator::new().failing_with_status(404));

        let (status, body) = send_json(app, "GET", "/api/get_task?id=gone", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error: Error response: Not Found");
    }

    #[tokio::test]
    async fn test_task_callback_accepts_object() {
        let (app, fake) = fake_app(FakeSongGenerator::new());

        let (status, body) = send_json(
            app,
            "POST",
            "/api/task_callback",
            Some(json!({"task_id": "t-1", "success": true, "data": [{"id": "a"}]})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_task_callback_rejects_non_object() {
        let (app, _) = fake_app(FakeSongGenerator::new());

        let (status, _) =
            send_json(app, "POST", "/api/task_callback", Some(json!(["not", "object"]))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
