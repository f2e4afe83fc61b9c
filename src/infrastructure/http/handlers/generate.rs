//! Generate Handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::{
    CustomGenerateSong, ExtendAudio, GenerateSong, SubmitCustomGenerateTask, SubmitGenerateTask,
};
use crate::domain::AudioRecord;
use crate::infrastructure::http::dto::{
    CustomGenerateRequest, ExtendAudioRequest, GenerateRequest, TaskIdResponse,
};
use crate::infrastructure::http::error::{ApiError, UpstreamMapping};
use crate::infrastructure::http::state::AppState;

// ============================================================================
// Synchronous generation
// ============================================================================

pub async fn generate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Vec<AudioRecord>>, ApiError> {
    let Json(req) = payload?;

    let cmd = GenerateSong {
        prompt: req.prompt,
        make_instrumental: req.make_instrumental,
        model: req.model,
    };

    let records = state
        .generate_handler
        .handle(cmd)
        .await
        .map_err(|e| ApiError::upstream(e, UpstreamMapping::PassPaymentRequired))?;

    Ok(Json(records))
}

pub async fn custom_generate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CustomGenerateRequest>, JsonRejection>,
) -> Result<Json<Vec<AudioRecord>>, ApiError> {
    let Json(req) = payload?;

    let cmd = CustomGenerateSong {
        prompt: req.prompt,
        tags: req.tags,
        title: req.title,
        make_instrumental: req.make_instrumental,
        model: req.model,
    };

    let records = state
        .custom_generate_handler
        .handle(cmd)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Error generating custom audio");
            ApiError::upstream(e, UpstreamMapping::PassPaymentRequired)
        })?;

    Ok(Json(records))
}

// ============================================================================
// Task submission
// ============================================================================

pub async fn generate_task(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<TaskIdResponse>, ApiError> {
    let Json(req) = payload?;

    let cmd = SubmitGenerateTask {
        prompt: req.prompt,
        make_instrumental: req.make_instrumental,
        model: req.model,
    };

    let result = state
        .generate_task_handler
        .handle(cmd)
        .await
        .map_err(|e| ApiError::upstream(e, UpstreamMapping::InternalPrefixed))?;

    Ok(Json(TaskIdResponse {
        task_id: result.task_id,
    }))
}

pub async fn custom_generate_task(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CustomGenerateRequest>, JsonRejection>,
) -> Result<Json<TaskIdResponse>, ApiError> {
    let Json(req) = payload?;

    let cmd = SubmitCustomGenerateTask {
        prompt: req.prompt,
        tags: req.tags,
        title: req.title,
        make_instrumental: req.make_instrumental,
        model: req.model,
    };

    let result = state
        .custom_generate_task_handler
        .handle(cmd)
        .await
        .map_err(|e| ApiError::upstream(e, UpstreamMapping::AlwaysPaymentRequired))?;

    Ok(Json(TaskIdResponse {
        task_id: result.task_id,
    }))
}

// ============================================================================
// Extend
// ============================================================================

pub async fn extend_audio(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ExtendAudioRequest>, JsonRejection>,
) -> Result<Json<AudioRecord>, ApiError> {
    let Json(req) = payload?;

    let cmd = ExtendAudio {
        audio_id: req.audio_id,
        prompt: req.prompt,
        continue_at: req.continue_at,
        tags: req.tags,
        title: req.title,
        model: req.model,
    };

    let record = state
        .extend_audio_handler
        .handle(cmd)
        .await
        .map_err(|e| ApiError::upstream(e, UpstreamMapping::PassPaymentRequired))?;

    Ok(Json(record))
}
