//! Configuration for the inference API client

/// Default origin of the Anthropic API
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Configuration for the inference API, read once at startup
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    /// Missing keys are not an error here; the API reports them as an
    /// authentication failure on the first call.
    pub anthropic_api_key: Option<String>,
    /// Override for the API origin (gateways, local fakes)
    pub base_url: Option<String>,
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            base_url: std::env::var("ANTHROPIC_BASE_URL").ok(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.anthropic_api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Full URL of the messages endpoint
    pub fn messages_url(&self) -> String {
        let base = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        format!("{}/v1/messages", base.trim_end_matches('/'))
    }
}
