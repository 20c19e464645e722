//! Normalized relay failures

use crate::llm::{LlmError, LlmErrorKind};
use axum::http::StatusCode;
use thiserror::Error;

/// Every way a relay call can fail. The `Display` text is exactly what the
/// client sees in the `error` field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid request body: messages array is required")]
    MissingMessages,
    #[error("Invalid message format in request body")]
    InvalidMessageFormat,
    /// The body could not be read at all, e.g. it exceeds the size limit.
    #[error("Invalid request body: {message}")]
    UnreadableBody { status: u16, message: String },
    #[error("Authentication failed. Please check your API key.")]
    UpstreamAuth,
    #[error("Rate limit exceeded. Please try again later.")]
    UpstreamRateLimited,
    #[error("API Error: {message}")]
    UpstreamGeneric { status: Option<u16>, message: String },
    #[error("An unexpected error occurred")]
    UpstreamEmptyResponse,
    #[error("An unexpected error occurred")]
    UnknownFailure,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingMessages | Self::InvalidMessageFormat => StatusCode::BAD_REQUEST,
            Self::UnreadableBody { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(StatusCode::is_client_error)
                .unwrap_or(StatusCode::BAD_REQUEST),
            Self::UpstreamAuth => StatusCode::UNAUTHORIZED,
            Self::UpstreamRateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::UpstreamGeneric { status, .. } => status
                .and_then(|code| StatusCode::from_u16(code).ok())
                .filter(|code| code.is_client_error() || code.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::UpstreamEmptyResponse | Self::UnknownFailure => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn is_malformed_request(&self) -> bool {
        matches!(
            self,
            Self::MissingMessages | Self::InvalidMessageFormat | Self::UnreadableBody { .. }
        )
    }
}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        match err.kind {
            LlmErrorKind::Auth => Self::UpstreamAuth,
            LlmErrorKind::RateLimit => Self::UpstreamRateLimited,
            LlmErrorKind::Api => Self::UpstreamGeneric {
                status: err.status,
                message: err.message,
            },
            LlmErrorKind::Unknown => Self::UnknownFailure,
        }
    }
}
