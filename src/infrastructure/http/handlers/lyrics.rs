//! Lyrics Handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::GenerateLyrics;
use crate::domain::LyricResult;
use crate::infrastructure::http::dto::GenerateLyricsRequest;
use crate::infrastructure::http::error::{ApiError, UpstreamMapping};
use crate::infrastructure::http::state::AppState;

pub async fn generate_lyrics(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateLyricsRequest>, JsonRejection>,
) -> Result<Json<LyricResult>, ApiError> {
    let Json(req) = payload?;

    let lyrics = state
        .generate_lyrics_handler
        .handle(GenerateLyrics { prompt: req.prompt })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Error generating lyrics");
            ApiError::upstream(e, UpstreamMapping::PassPaymentRequiredPrefixed)
        })?;

    Ok(Json(lyrics))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::infrastructure::adapters::FakeSongGenerator;
    use crate::infrastructure::http::test_support::{fake_app, send_json};

    #[tokio::test]
    async fn test_generate_lyrics_ok() {
        let (app, _) = fake_app(FakeSongGenerator::new());

        let (status, body) = send_json(
            app,
            "POST",
            "/api/generate_lyrics",
            Some(json!({"prompt": "rain"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["title"].is_string());
        assert!(body["text"].as_str().unwrap().contains("rain"));
    }

    #[tokio::test]
    async fn test_generate_lyrics_402() {
        let (app, _) = fake_app(FakeSongGenerator::new().failing_with_status(402));

        let (status, body) = send_json(
            app,
            "POST",
            "/api/generate_lyrics",
            Some(json!({"prompt": "rain"})),
        )
        .await;

        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(body["error"], "Error response: Payment Required");
    }

    #[tokio::test]
    async fn test_generate_lyrics_500_is_prefixed() {
        let (app, _) = fake_app(FakeSongGenerator::new().failing_with_status(502));

        let (status, body) = send_json(
            app,
            "POST",
            "/api/generate_lyrics",
            Some(json!({"prompt": "rain"})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Internal server error: Error response: Bad Gateway"
        );
    }
}
