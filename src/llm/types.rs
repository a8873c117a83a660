// src/llm/types.rs
// Conversation turn shapes shared by the relay API, the provider and the client

use serde::{Deserialize, Serialize};

/// Author of a turn, as the provider names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPart {
    pub text: String,
}

/// One prior or new turn: `{ role, parts: [{ text }] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub parts: Vec<TextPart>,
}

impl Turn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![TextPart { text: text.into() }],
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, text)
    }

    /// Concatenated text of all parts
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Sampling parameters attached to every completion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

/// Everything a provider needs for one completion
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    /// History followed by the new user turn
    pub contents: Vec<Turn>,
    pub settings: GenerationSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_turn_wire_shape() {
        let turn = Turn::model("hello");
        assert_eq!(
            serde_json::to_value(&turn).unwrap(),
            json!({ "role": "model", "parts": [{ "text": "hello" }] })
        );
    }

    #[test]
    fn test_turn_text_joins_parts() {
        let turn: Turn = serde_json::from_value(json!({
            "role": "user",
            "parts": [{ "text": "a" }, { "text": "b" }]
        }))
        .unwrap();
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.text(), "ab");
    }

    #[test]
    fn test_unknown_role_rejected() {
        let result: Result<Turn, _> =
            serde_json::from_value(json!({ "role": "system", "parts": [] }));
        assert!(result.is_err());
    }
}
