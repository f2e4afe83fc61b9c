//! HTTP Error Handling
//!
//! 错误响应体统一为 `{"error": "<message>"}`，状态码直接使用 HTTP 状态码

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// 上游失败到 HTTP 状态的映射方式
///
/// 各路由沿用前端已依赖的状态码与消息格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamMapping {
    /// 上游 402 透传，其余为 500，消息原样返回
    PassPaymentRequired,
    /// 上游 402 透传，其余为 500 且消息带 `Internal server error: ` 前缀
    PassPaymentRequiredPrefixed,
    /// 任何上游失败都返回 402
    AlwaysPaymentRequired,
    /// 任何上游失败都返回带前缀的 500
    InternalPrefixed,
}

const INTERNAL_PREFIX: &str = "Internal server error: ";

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    PaymentRequired(String),
    Internal(String),
}

impl ApiError {
    /// 按路由的映射方式转换应用层错误
    pub fn upstream(err: ApplicationError, mapping: UpstreamMapping) -> Self {
        let status = err.upstream_status();
        let message = match err {
            ApplicationError::ValidationError(msg) => return ApiError::BadRequest(msg),
            ApplicationError::Upstream(e) => e.to_string(),
        };

        match mapping {
            UpstreamMapping::PassPaymentRequired if status == Some(402) => {
                ApiError::PaymentRequired(message)
            }
            UpstreamMapping::PassPaymentRequired => ApiError::Internal(message),
            UpstreamMapping::PassPaymentRequiredPrefixed if status == Some(402) => {
                ApiError::PaymentRequired(message)
            }
            UpstreamMapping::PassPaymentRequiredPrefixed | UpstreamMapping::InternalPrefixed => {
                ApiError::Internal(format!("{}{}", INTERNAL_PREFIX, message))
            }
            UpstreamMapping::AlwaysPaymentRequired => ApiError::PaymentRequired(message),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad request");
                msg
            }
            ApiError::PaymentRequired(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Upstream quota exhausted");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Internal server error");
                msg
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
