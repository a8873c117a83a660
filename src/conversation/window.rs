// src/conversation/window.rs
// Trailing slice of the log, projected to provider turns for each request

use crate::conversation::Message;
use crate::llm::Turn;

/// Number of trailing messages sent as context
pub const HISTORY_WINDOW_SIZE: usize = 10;

/// Read-only projection of the last N messages. Recomputed per send, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryWindow {
    turns: Vec<Turn>,
}

impl HistoryWindow {
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn into_turns(self) -> Vec<Turn> {
        self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

pub fn build_history_window(messages: &[Message]) -> HistoryWindow {
    build_history_window_with(messages, HISTORY_WINDOW_SIZE)
}

pub fn build_history_window_with(messages: &[Message], size: usize) -> HistoryWindow {
    let start = messages.len().saturating_sub(size);
    let turns = messages[start..]
        .iter()
        .map(|m| Turn::new(m.sender().role(), m.text()))
        .collect();

    HistoryWindow { turns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Sender;
    use crate::llm::Role;

    fn log_of(n: usize) -> Vec<Message> {
        (0..n)
            .map(|i| {
                let sender = if i % 2 == 0 { Sender::User } else { Sender::Ai };
                Message::new(format!("m{i}"), sender, i as i64)
            })
            .collect()
    }

    #[test]
    fn test_short_log_is_sent_whole() {
        let window = build_history_window(&log_of(3));
        assert_eq!(window.len(), 3);
        assert_eq!(window.turns()[0].text(), "m0");
    }

    #[test]
    fn test_empty_log() {
        assert!(build_history_window(&[]).is_empty());
    }

    #[test]
    fn test_long_logs_keep_last_ten_in_order() {
        for n in [11, 12, 25] {
            let log = log_of(n);
            let window = build_history_window(&log);
            assert_eq!(window.len(), HISTORY_WINDOW_SIZE);

            for (turn, msg) in window.turns().iter().zip(&log[n - HISTORY_WINDOW_SIZE..]) {
                assert_eq!(turn.text(), msg.text());
                let expected = match msg.sender() {
                    Sender::User => Role::User,
                    Sender::Ai => Role::Model,
                };
                assert_eq!(turn.role, expected);
            }
        }
    }

    #[test]
    fn test_custom_size() {
        let window = build_history_window_with(&log_of(5), 2);
        let texts: Vec<String> = window.turns().iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["m3", "m4"]);
    }
}
