// src/llm/mod.rs
// Provider abstraction for the chat relay

pub mod error;
pub mod gemini;
pub mod provider;
pub mod types;

pub use error::ProviderError;
pub use gemini::GeminiClient;
pub use provider::ChatProvider;
pub use types::{CompletionRequest, GenerationSettings, Role, TextPart, Turn};
