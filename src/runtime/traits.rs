//! Trait abstractions for runtime I/O
//!
//! These traits enable testing the session with mock implementations.

use crate::api::ApiResponse;
use crate::llm::Message;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Why a call to the relay endpoint did not produce an answer
#[derive(Debug, Error)]
pub enum RelayClientError {
    /// The relay answered with a non-2xx status
    #[error("API request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// The request never completed
    #[error("API request failed: {0}")]
    Transport(String),
    /// A 2xx response whose body was not an `ApiResponse`
    #[error("Invalid response from API: {0}")]
    Decode(String),
}

/// Client for the relay endpoint
#[async_trait]
pub trait RelayClient: Send + Sync {
    /// Send the full conversation and wait for the whole reply
    async fn send(&self, messages: &[Message]) -> Result<ApiResponse, RelayClientError>;
}

// ============================================================================
// Arc implementations for trait objects
// ============================================================================

#[async_trait]
impl<T: RelayClient + ?Sized> RelayClient for Arc<T> {
    async fn send(&self, messages: &[Message]) -> Result<ApiResponse, RelayClientError> {
        (**self).send(messages).await
    }
}
