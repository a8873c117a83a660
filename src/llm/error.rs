// src/llm/error.rs
// Errors raised while calling the upstream generative-AI provider

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("provider API key is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Transport(reqwest::Error),

    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider error: {0}")]
    Api(String),

    #[error("failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

// Request URLs are dropped so nothing credential-bearing reaches the logs
impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        ProviderError::Transport(error.without_url())
    }
}

impl ProviderError {
    /// True when the failure is the provider refusing our credentials or quota
    pub fn is_auth_or_quota(&self) -> bool {
        matches!(self, ProviderError::Status { status: 401 | 403 | 429, .. })
            || matches!(self, ProviderError::MissingApiKey)
    }
}
