//! Mock implementations for testing
//!
//! These mocks enable session testing without real I/O.

use super::traits::{RelayClient, RelayClientError};
use crate::api::ApiResponse;
use crate::llm::Message;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock relay client that returns queued replies
pub struct MockRelayClient {
    replies: Mutex<VecDeque<Result<ApiResponse, RelayClientError>>>,
    /// Record of every conversation sent
    pub requests: Mutex<Vec<Vec<Message>>>,
}

impl MockRelayClient {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful reply
    pub fn queue_reply(&self, content: &str) {
        self.replies.lock().unwrap().push_back(Ok(ApiResponse {
            content: content.to_string(),
        }));
    }

    /// Queue a failure
    pub fn queue_error(&self, error: RelayClientError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockRelayClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RelayClient for MockRelayClient {
    async fn send(&self, messages: &[Message]) -> Result<ApiResponse, RelayClientError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RelayClientError::Transport("No mock reply queued".to_string())))
    }
}
