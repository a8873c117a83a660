// src/conversation/mod.rs
//! Client side of a chat: the visible message log, the bounded history
//! window sent to the relay, cosmetic mood tagging, and the single
//! in-flight exchange.

pub mod client;
pub mod log;
pub mod message;
pub mod mood;
pub mod session;
pub mod window;

pub use client::{RelayClient, RelayClientError, RelayTransport};
pub use log::{ConversationLog, GREETING};
pub use message::{Message, Sender};
pub use mood::{KeywordMoodClassifier, MoodClassifier, MoodRule, MoodTag, classify_mood};
pub use session::{ChatSession, ExchangeState, PendingExchange, SessionError};
pub use window::{HISTORY_WINDOW_SIZE, HistoryWindow, build_history_window};
