// src/api/http/handlers.rs

use axum::{
    Json,
    extract::State,
    http::{Method, Uri},
};
use serde_json::{Value, json};

use crate::api::AppState;
use crate::api::error::ApiError;

pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.relay.model(),
    }))
}

pub async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {} {}", method, uri.path()))
}
