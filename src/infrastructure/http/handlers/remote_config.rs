//! Remote Config Handler
//!
//! 不经过上游，直接返回服务端配置的实现类型

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::RemoteConfigResponse;
use crate::infrastructure::http::state::AppState;

pub async fn get_remote_config(State(state): State<Arc<AppState>>) -> Json<RemoteConfigResponse> {
    Json(RemoteConfigResponse {
        implementation: state.implementation_type.clone(),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use std::sync::Arc;

    use crate::infrastructure::adapters::FakeSongGenerator;
    use crate::infrastructure::http::server::build_router;
    use crate::infrastructure::http::state::AppState;
    use crate::infrastructure::http::test_support::send_json;

    #[tokio::test]
    async fn test_echoes_implementation_type() {
        let state = AppState::new(
            Arc::new(FakeSongGenerator::new()),
            Some("acedata".to_string()),
        );
        let app = build_router(Arc::new(state));

        let (status, body) = send_json(app, "GET", "/api/get_remote_config", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"implementation": "acedata"}));
    }

    #[tokio::test]
    async fn test_unset_implementation_is_omitted() {
        let state = AppState::new(Arc::new(FakeSongGenerator::new()), None);
        let app = build_router(Arc::new(state));

        let (status, body) = send_json(app, "GET", "/api/get_remote_config", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));
    }
}
