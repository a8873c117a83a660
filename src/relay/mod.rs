// src/relay/mod.rs
//! Chat relay: turns a client message plus history into one provider call
//! and always produces a reply string.
//!
//! Upstream failures never reach the caller as errors. They become
//! [`RelayOutcome::Fallback`], which the HTTP layer still answers with 200.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::llm::{ChatProvider, CompletionRequest, GenerationSettings, Turn};
use crate::persona::Persona;

/// Reply used when the provider answers without any text
pub const EMPTY_REPLY_FALLBACK: &str =
    "I'm here with you. Can you tell me more about what's on your mind?";

/// Reply used when the provider call fails outright
pub const UPSTREAM_FAILURE_REPLY: &str =
    "I'm having a small technical issue, but I'm still here for you.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    EmptyResponse,
    UpstreamError,
}

/// Result of one relayed chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Reply(String),
    Fallback {
        reply: String,
        reason: FallbackReason,
    },
}

impl RelayOutcome {
    pub fn reply(&self) -> &str {
        match self {
            RelayOutcome::Reply(reply) | RelayOutcome::Fallback { reply, .. } => reply,
        }
    }

    pub fn into_reply(self) -> String {
        match self {
            RelayOutcome::Reply(reply) | RelayOutcome::Fallback { reply, .. } => reply,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RelayOutcome::Fallback { .. })
    }
}

/// Stateless relay. Cheap to share behind an `Arc`; holds no per-request state.
pub struct ChatRelay {
    provider: Arc<dyn ChatProvider>,
    persona: Persona,
    settings: GenerationSettings,
}

impl ChatRelay {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            provider,
            persona: Persona::default(),
            settings: GenerationSettings::default(),
        }
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// History followed by the new user turn, order preserved
    pub fn build_contents(message: String, history: Vec<Turn>) -> Vec<Turn> {
        let mut contents = history;
        contents.push(Turn::user(message));
        contents
    }

    pub async fn handle_chat_request(&self, message: String, history: Vec<Turn>) -> RelayOutcome {
        let request_id = Uuid::new_v4().to_string();
        let start = Instant::now();
        let history_len = history.len();

        let request = CompletionRequest {
            system: self.persona.prompt().to_string(),
            contents: Self::build_contents(message, history),
            settings: self.settings,
        };

        match self.provider.complete(request).await {
            Ok(Some(reply)) => {
                info!(
                    request_id = %request_id,
                    provider = self.provider.name(),
                    model = %self.provider.model(),
                    history_len,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Chat relayed"
                );
                RelayOutcome::Reply(reply)
            }
            Ok(None) => {
                warn!(
                    request_id = %request_id,
                    provider = self.provider.name(),
                    "Provider returned no text, using fallback reply"
                );
                RelayOutcome::Fallback {
                    reply: EMPTY_REPLY_FALLBACK.to_string(),
                    reason: FallbackReason::EmptyResponse,
                }
            }
            Err(e) => {
                error!(
                    request_id = %request_id,
                    provider = self.provider.name(),
                    model = %self.provider.model(),
                    auth_or_quota = e.is_auth_or_quota(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Provider call failed: {:?}",
                    e
                );
                RelayOutcome::Fallback {
                    reply: UPSTREAM_FAILURE_REPLY.to_string(),
                    reason: FallbackReason::UpstreamError,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ProviderError, Role};
    use async_trait::async_trait;
    use std::sync::Mutex;

    enum Script {
        Text(&'static str),
        Empty,
        Fail,
    }

    struct ScriptedProvider {
        script: Script,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedProvider {
        fn new(script: Script) -> Arc<Self> {
            Arc::new(Self {
                script,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ChatProvider for ScriptedProvider {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn model(&self) -> &str {
            "scripted-model"
        }

        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> Result<Option<String>, ProviderError> {
            self.seen.lock().unwrap().push(request);
            match self.script {
                Script::Text(t) => Ok(Some(t.to_string())),
                Script::Empty => Ok(None),
                Script::Fail => Err(ProviderError::Api("quota exceeded".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_reply_passes_through() {
        let provider = ScriptedProvider::new(Script::Text("hello friend"));
        let relay = ChatRelay::new(provider.clone());

        let outcome = relay
            .handle_chat_request("hi".to_string(), vec![Turn::user("earlier"), Turn::model("sure")])
            .await;

        assert_eq!(outcome, RelayOutcome::Reply("hello friend".to_string()));

        let seen = provider.seen.lock().unwrap();
        let request = &seen[0];
        assert_eq!(request.system, Persona::Companion.prompt());
        assert_eq!(request.settings, GenerationSettings { temperature: 0.7, top_p: 0.9 });
        let roles: Vec<Role> = request.contents.iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Model, Role::User]);
        assert_eq!(request.contents[2].text(), "hi");
    }

    #[tokio::test]
    async fn test_empty_text_uses_in_character_fallback() {
        let relay = ChatRelay::new(ScriptedProvider::new(Script::Empty));
        let outcome = relay.handle_chat_request("hi".to_string(), Vec::new()).await;

        assert!(outcome.is_fallback());
        assert_eq!(outcome.reply(), EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn test_upstream_failure_uses_apology() {
        let relay = ChatRelay::new(ScriptedProvider::new(Script::Fail));
        let outcome = relay.handle_chat_request("hi".to_string(), Vec::new()).await;

        assert_eq!(
            outcome,
            RelayOutcome::Fallback {
                reply: UPSTREAM_FAILURE_REPLY.to_string(),
                reason: FallbackReason::UpstreamError,
            }
        );
    }

    #[test]
    fn test_build_contents_with_empty_history() {
        let contents = ChatRelay::build_contents("alone".to_string(), Vec::new());
        assert_eq!(contents, vec![Turn::user("alone")]);
    }
}
