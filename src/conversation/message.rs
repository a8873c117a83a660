// src/conversation/message.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::llm::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    /// Provider-facing role for this sender
    pub fn role(self) -> Role {
        match self {
            Sender::User => Role::User,
            Sender::Ai => Role::Model,
        }
    }
}

/// One entry in the conversation log. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: String,
    text: String,
    sender: Sender,
    /// Epoch milliseconds
    timestamp: i64,
}

impl Message {
    pub(crate) fn new(text: String, sender: Sender, timestamp: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            sender,
            timestamp,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}
