// src/conversation/client.rs
// Transport from the conversation client to the chat relay

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::api::http::chat::ChatResponse;
use crate::config::ClientConfig;
use crate::llm::Turn;

#[derive(Error, Debug)]
pub enum RelayClientError {
    #[error("could not reach relay: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("relay returned HTTP {0}")]
    Status(u16),
}

/// Sends one chat message to a relay and returns its reply text
#[async_trait]
pub trait RelayTransport: Send + Sync {
    async fn send(&self, message: &str, history: &[Turn]) -> Result<String, RelayClientError>;
}

#[derive(Serialize)]
struct OutgoingChat<'a> {
    message: &'a str,
    history: &'a [Turn],
}

/// HTTP client for `POST /api/chat`
pub struct RelayClient {
    http: Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(config: &ClientConfig) -> Result<Self, RelayClientError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            endpoint: config.chat_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayTransport for RelayClient {
    async fn send(&self, message: &str, history: &[Turn]) -> Result<String, RelayClientError> {
        debug!(endpoint = %self.endpoint, history_len = history.len(), "Sending chat to relay");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&OutgoingChat { message, history })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayClientError::Status(status.as_u16()));
        }

        let body: ChatResponse = response.json().await?;
        Ok(body.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::{Value, json};
    use std::time::Duration;

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client(base: &str) -> RelayClient {
        let config = ClientConfig {
            api_url: base.to_string(),
            timeout: Duration::from_secs(5),
        };
        RelayClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_send_posts_message_and_history() {
        let app = Router::new().route(
            "/api/chat",
            post(|Json(body): Json<Value>| async move {
                let turns = body["history"].as_array().map(|h| h.len()).unwrap_or(0);
                let message = body["message"].as_str().unwrap_or("");
                Json(json!({ "reply": format!("{} with {} turns", message, turns) }))
            }),
        );
        let base = spawn(app).await;

        let reply = client(&base)
            .send("hello", &[Turn::user("a"), Turn::model("b")])
            .await
            .unwrap();
        assert_eq!(reply, "hello with 2 turns");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let app = Router::new().route(
            "/api/chat",
            post(|| async { (StatusCode::BAD_GATEWAY, "down") }),
        );
        let base = spawn(app).await;

        let err = client(&base).send("hello", &[]).await.unwrap_err();
        assert!(matches!(err, RelayClientError::Status(502)));
    }

    #[tokio::test]
    async fn test_unreachable_relay() {
        let err = client("http://127.0.0.1:1").send("hello", &[]).await.unwrap_err();
        assert!(matches!(err, RelayClientError::Transport(_)));
    }
}
