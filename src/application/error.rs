//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::UpstreamError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 上游服务错误
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 上游报告的 HTTP 状态码
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream(e) => e.status(),
            Self::ValidationError(_) => None,
        }
    }
}
