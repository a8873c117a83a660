// src/api/mod.rs

pub mod error;
pub mod http;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::RelayConfig;
use crate::llm::GeminiClient;
use crate::relay::ChatRelay;

pub use http::router::create_router;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ChatRelay>,
}

impl AppState {
    pub fn new(relay: ChatRelay) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}

/// Build the Gemini-backed relay and serve it until Ctrl-C
pub async fn run(config: RelayConfig) -> Result<()> {
    let provider = GeminiClient::new(&config.api_key, &config.model, config.upstream_timeout)
        .context("Failed to create Gemini client")?;
    let state = AppState::new(ChatRelay::new(Arc::new(provider)));

    let app = create_router(state);
    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    info!("Model: {}", config.model);
    info!("Upstream timeout: {}s", config.upstream_timeout.as_secs());
    info!("Chat relay listening on http://{}/api/chat", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutdown signal received");
        })
        .await
        .context("Server error")?;

    Ok(())
}
