//! API request and response types

use serde::{Deserialize, Serialize};

/// Successful relay response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub content: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Which model the relay forwards to
#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub model: &'static str,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}
