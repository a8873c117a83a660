// src/api/http/chat.rs
// POST /api/chat - relay one message (plus optional history) to the provider

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::AppState;
use crate::llm::Turn;
use crate::relay::UPSTREAM_FAILURE_REPLY;

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatRequest {
    pub message: String,
    /// Prior turns; absent means empty
    #[serde(default)]
    pub history: Vec<Turn>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Always answers 200 with a reply. Unreadable bodies and provider failures
/// both get the apology text; the cause is only logged.
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<ChatResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(
                status = rejection.status().as_u16(),
                "Unreadable chat request body: {}",
                rejection.body_text()
            );
            return Json(ChatResponse {
                reply: UPSTREAM_FAILURE_REPLY.to_string(),
            });
        }
    };

    debug!(
        message_len = request.message.len(),
        history_len = request.history.len(),
        "Chat request received"
    );

    let outcome = state
        .relay
        .handle_chat_request(request.message, request.history)
        .await;

    Json(ChatResponse {
        reply: outcome.into_reply(),
    })
}
