// src/config/mod.rs
// Relay and client settings. Values come from the CLI, which reads the
// environment (and a local .env) through clap's `env` bindings.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, warn};

// ── Defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 45;

/// Directory (under $HOME) holding the local session flag
pub const STATE_DIR_NAME: &str = ".mindspace";

/// Settings for the chat relay server
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    /// Provider key; never leaves the server
    pub api_key: String,
    pub model: String,
    pub upstream_timeout: Duration,
}

impl RelayConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Settings for the conversation client talking to a relay
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_CLIENT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of the relay's chat endpoint
    pub fn chat_endpoint(&self) -> String {
        format!("{}/api/chat", self.api_url.trim_end_matches('/'))
    }
}

/// Load `.env` from the working directory. A missing file is not an error.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }
}

/// Default location of the local state directory (`~/.mindspace`)
pub fn default_state_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(STATE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(STATE_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_defaults() {
        let config = RelayConfig::new("key");
        assert_eq!(config.port, 5000);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert_eq!(config.upstream_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_chat_endpoint_trims_trailing_slash() {
        assert_eq!(
            ClientConfig::new("http://example.test/").chat_endpoint(),
            "http://example.test/api/chat"
        );
        assert_eq!(
            ClientConfig::default().chat_endpoint(),
            "http://localhost:5000/api/chat"
        );
    }

    #[test]
    fn test_default_state_dir_ends_with_name() {
        assert!(default_state_dir().ends_with(STATE_DIR_NAME));
    }
}
