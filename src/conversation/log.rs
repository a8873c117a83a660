// src/conversation/log.rs
// Append-only, in-memory message log. Insertion order is chronological order.

use chrono::Utc;

use super::{HistoryWindow, Message, Sender, build_history_window};

/// Opening line of a fresh chat
pub const GREETING: &str = "Neural Sanctuary engaged. I am your MindSpace companion. Zero traces, total empathy. How is your energy field today?";

#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
    last_timestamp: i64,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log seeded with the companion's greeting
    pub fn with_greeting() -> Self {
        let mut log = Self::new();
        log.append_ai_message(GREETING);
        log
    }

    /// Append a user message. Blank or whitespace-only input is ignored.
    pub fn append_user_message(&mut self, text: &str) -> Option<&Message> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(self.push(text.to_string(), Sender::User))
    }

    pub fn append_ai_message(&mut self, text: impl Into<String>) -> &Message {
        self.push(text.into(), Sender::Ai)
    }

    pub fn history_window(&self) -> HistoryWindow {
        build_history_window(&self.messages)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(&mut self, text: String, sender: Sender) -> &Message {
        let timestamp = self.next_timestamp();
        self.messages.push(Message::new(text, sender, timestamp));
        &self.messages[self.messages.len() - 1]
    }

    /// Wall clock, bumped so each entry is strictly later than the previous one
    fn next_timestamp(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let ts = if self.messages.is_empty() {
            now
        } else {
            now.max(self.last_timestamp + 1)
        };
        self.last_timestamp = ts;
        ts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_input_appends_one_user_message() {
        for input in ["hello", "  padded  ", "ünïcödé", "a"] {
            let mut log = ConversationLog::with_greeting();
            let before = log.len();
            let sender = log.append_user_message(input).map(|m| m.sender());
            assert_eq!(sender, Some(Sender::User));
            assert_eq!(log.len(), before + 1);
        }
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut log = ConversationLog::new();
        assert!(log.append_user_message("").is_none());
        assert!(log.append_user_message(" \t\n ").is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn test_text_is_trimmed() {
        let mut log = ConversationLog::new();
        log.append_user_message("  exams  ");
        assert_eq!(log.last().unwrap().text(), "exams");
    }

    #[test]
    fn test_timestamps_strictly_increase() {
        let mut log = ConversationLog::new();
        for i in 0..50 {
            log.append_user_message(&format!("msg {i}"));
        }
        for pair in log.messages().windows(2) {
            assert!(pair[1].timestamp() > pair[0].timestamp());
        }
    }

    #[test]
    fn test_greeting_seed() {
        let log = ConversationLog::with_greeting();
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].sender(), Sender::Ai);
        assert_eq!(log.messages()[0].text(), GREETING);
    }
}
