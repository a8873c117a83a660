// src/conversation/session.rs
//! One chat session: log, mood, and the `Idle -> Sending -> Idle` exchange.
//!
//! Sending is split into [`ChatSession::begin_send`] and
//! [`ChatSession::complete`] so a front end can keep rendering (and reject a
//! second send) while the relay call is in flight. [`ChatSession::send_and_await_reply`]
//! runs both halves around the transport.

use thiserror::Error;
use tracing::warn;

use super::{
    ConversationLog, KeywordMoodClassifier, Message, MoodClassifier, MoodTag, RelayClientError,
    RelayTransport,
};
use crate::llm::Turn;

/// Shown to the user when the relay itself cannot be reached
pub const RELAY_UNREACHABLE_NOTICE: &str =
    "We couldn't reach the sanctuary right now. Please check your connection and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExchangeState {
    #[default]
    Idle,
    Sending,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("message is blank")]
    Blank,

    #[error("a message is already being sent")]
    Busy,

    #[error(transparent)]
    Relay(#[from] RelayClientError),
}

/// Everything the transport needs for the exchange that was just started
#[derive(Debug, Clone)]
pub struct PendingExchange {
    pub message: String,
    /// Window taken before the new message was appended
    pub history: Vec<Turn>,
}

pub struct ChatSession<T> {
    log: ConversationLog,
    state: ExchangeState,
    mood: MoodTag,
    error: Option<String>,
    classifier: Box<dyn MoodClassifier>,
    transport: T,
}

impl<T: RelayTransport> ChatSession<T> {
    /// Session seeded with the companion greeting
    pub fn new(transport: T) -> Self {
        Self::with_log(transport, ConversationLog::with_greeting())
    }

    pub fn with_log(transport: T, log: ConversationLog) -> Self {
        Self {
            log,
            state: ExchangeState::Idle,
            mood: MoodTag::default(),
            error: None,
            classifier: Box::new(KeywordMoodClassifier::default()),
            transport,
        }
    }

    pub fn with_classifier(mut self, classifier: Box<dyn MoodClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn state(&self) -> ExchangeState {
        self.state
    }

    /// Input is disabled only while a send is in flight
    pub fn input_disabled(&self) -> bool {
        self.state == ExchangeState::Sending
    }

    pub fn mood(&self) -> MoodTag {
        self.mood
    }

    /// Manual override from the mood picker
    pub fn set_mood(&mut self, mood: MoodTag) {
        self.mood = mood;
    }

    /// Client-local error from the last exchange, if it failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start an exchange: snapshot the window, append the user message, retag mood.
    pub fn begin_send(&mut self, text: &str) -> Result<PendingExchange, SessionError> {
        if self.state == ExchangeState::Sending {
            return Err(SessionError::Busy);
        }

        let history = self.log.history_window().into_turns();
        let message = self
            .log
            .append_user_message(text)
            .map(|m| m.text().to_string())
            .ok_or(SessionError::Blank)?;

        self.mood = self.classifier.classify(&message);
        self.error = None;
        self.state = ExchangeState::Sending;

        Ok(PendingExchange { message, history })
    }

    /// Finish the in-flight exchange. On failure the log is left as it was.
    pub fn complete(
        &mut self,
        result: Result<String, RelayClientError>,
    ) -> Result<&Message, SessionError> {
        self.state = ExchangeState::Idle;

        match result {
            Ok(reply) => Ok(self.log.append_ai_message(reply)),
            Err(e) => {
                warn!("Relay exchange failed: {}", e);
                self.error = Some(RELAY_UNREACHABLE_NOTICE.to_string());
                Err(SessionError::Relay(e))
            }
        }
    }

    pub async fn send_and_await_reply(&mut self, text: &str) -> Result<&Message, SessionError> {
        let pending = self.begin_send(text)?;
        let result = self
            .transport
            .send(&pending.message, &pending.history)
            .await;
        self.complete(result)
    }
}
