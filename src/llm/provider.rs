// src/llm/provider.rs
// Provider trait - the seam between the relay and a concrete AI backend

use async_trait::async_trait;

use super::{CompletionRequest, ProviderError};

#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Model identifier requests are pinned to
    fn model(&self) -> &str;

    /// Run one completion. `Ok(None)` means the provider answered without usable text.
    async fn complete(&self, request: CompletionRequest) -> Result<Option<String>, ProviderError>;
}
