// src/llm/gemini.rs
//! Google Gemini `generateContent` client (non-streaming, text only).
//!
//! Sends the persona as `systemInstruction`, the history plus new turn as
//! `contents`, and the sampling settings as `generationConfig`.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{ChatProvider, CompletionRequest, ProviderError, TextPart, Turn};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey);
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            model: model.into(),
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    /// Point the client at a different API root (used by tests and proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: &'a [Turn],
    #[serde(rename = "systemInstruction")]
    system_instruction: GeminiSystemInstruction,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Serialize)]
struct GeminiSystemInstruction {
    parts: Vec<TextPart>,
}

#[derive(Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "topP")]
    top_p: f32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiError>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContentResponse>,
}

#[derive(Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiError {
    message: String,
}

/// Text of the first candidate, or `None` if it carried no text at all
fn extract_text(response: GeminiResponse) -> Option<String> {
    let candidate = response.candidates?.into_iter().next()?;
    let text: String = candidate
        .content?
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.trim().is_empty() { None } else { Some(text) }
}

// ============================================================================
// Provider Implementation
// ============================================================================

#[async_trait]
impl ChatProvider for GeminiClient {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<Option<String>, ProviderError> {
        let start = Instant::now();

        let api_request = GeminiRequest {
            contents: &request.contents,
            system_instruction: GeminiSystemInstruction {
                parts: vec![TextPart {
                    text: request.system,
                }],
            },
            generation_config: GeminiGenerationConfig {
                temperature: request.settings.temperature,
                top_p: request.settings.top_p,
            },
        };

        debug!(
            model = %self.model,
            turns = request.contents.len(),
            "Sending Gemini generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&api_request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let api_response: GeminiResponse = serde_json::from_str(&body)?;

        if let Some(error) = api_response.error {
            return Err(ProviderError::Api(error.message));
        }

        let text = extract_text(api_response);

        info!(
            model = %self.model,
            duration_ms = start.elapsed().as_millis() as u64,
            has_text = text.is_some(),
            "Gemini request complete"
        );

        Ok(text)
    }
}
