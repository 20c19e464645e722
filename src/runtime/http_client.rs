//! reqwest-backed relay client

use super::traits::{RelayClient, RelayClientError};
use crate::api::{ApiResponse, ErrorResponse};
use crate::llm::Message;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Default address of a locally running relay
pub const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:3000";

/// Client-side configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin of the relay server
    pub relay_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_url: DEFAULT_RELAY_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            relay_url: std::env::var("CLAUDIUS_URL")
                .unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string()),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/claude", self.relay_url.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct RelayRequest<'a> {
    messages: &'a [Message],
}

/// Relay client over HTTP. Cheap to clone.
#[derive(Clone)]
pub struct HttpRelayClient {
    client: Client,
    endpoint: String,
}

impl HttpRelayClient {
    pub fn new(config: &ClientConfig) -> Result<Self, RelayClientError> {
        let client = Client::builder()
            .build()
            .map_err(|e| RelayClientError::Transport(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: config.endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn send(&self, messages: &[Message]) -> Result<ApiResponse, RelayClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RelayRequest { messages })
            .send()
            .await
            .map_err(|e| RelayClientError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RelayClientError::Transport(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(RelayClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| RelayClientError::Decode(e.to_string()))
    }
}
