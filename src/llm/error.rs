//! LLM error types

use thiserror::Error;

/// LLM error with classification
#[derive(Debug, Error)]
#[error("{message}")]
pub struct LlmError {
    pub kind: LlmErrorKind,
    pub message: String,
    /// HTTP status reported by the API, when there was a response at all
    pub status: Option<u16>,
}

impl LlmError {
    pub fn new(kind: LlmErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Auth, message).with_status(401)
    }

    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::RateLimit, message).with_status(429)
    }

    /// API error with a status code from the upstream response
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Api, message).with_status(status)
    }

    /// API error without a response (connection refused, timeout, ...)
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Api, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Unknown, message)
    }
}

/// Error classification reported by the inference API client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmErrorKind {
    /// Authentication failed (401)
    Auth,
    /// Rate limited (429)
    RateLimit,
    /// Any other error reported by the API, with its own status if it had one
    Api,
    /// Anything we could not classify (unparseable body, client setup, ...)
    Unknown,
}

impl LlmErrorKind {
    /// Whether a caller could reasonably try again later. Informational only:
    /// nothing in this crate retries.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::RateLimit)
    }
}
