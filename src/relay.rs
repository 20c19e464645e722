//! Relay endpoint core
//!
//! Validates a conversation, forwards it to the inference API in a single
//! attempt, and normalizes the outcome. Holds no per-call state, so one
//! `Relay` serves any number of concurrent, independent conversations.

mod error;
mod validate;

pub use error::ApiError;
pub use validate::parse_messages;

use crate::api::ApiResponse;
use crate::llm::{LlmRequest, LlmService};
use serde_json::Value;
use std::sync::Arc;

/// Model every conversation is forwarded to
pub const MODEL_ID: &str = "claude-3-5-sonnet-20241022";

/// Output token budget for every call
pub const MAX_OUTPUT_TOKENS: u32 = 1024;

pub struct Relay {
    llm: Arc<dyn LlmService>,
}

impl Relay {
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self { llm }
    }

    /// Handle one decoded request body.
    pub async fn handle(&self, body: &Value) -> Result<ApiResponse, ApiError> {
        let result = self.forward(body).await;
        if let Err(e) = &result {
            if e.is_malformed_request() {
                tracing::warn!(error = %e, "Rejected malformed relay request");
            } else {
                tracing::error!(
                    status = e.status().as_u16(),
                    error = ?e,
                    "Error calling Claude API"
                );
            }
        }
        result
    }

    async fn forward(&self, body: &Value) -> Result<ApiResponse, ApiError> {
        let messages = parse_messages(body)?;
        let request = LlmRequest::new(MODEL_ID, MAX_OUTPUT_TOKENS, messages);

        let response = self.llm.complete(&request).await?;

        let content = response
            .first_text()
            .ok_or(ApiError::UpstreamEmptyResponse)?;

        Ok(ApiResponse {
            content: content.to_string(),
        })
    }
}
