// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only message log for one conversation session.
//!
//! Consumers only ever observe additions: messages are never reordered,
//! mutated, or removed. Timestamps are clamped so `sent_at` is monotonically
//! non-decreasing even if the wall clock steps backwards.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use veranda_core::{ChatMessage, MessageId, Sender};

/// Ordered, append-only record of the dialogue.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a visitor message immediately.
    pub fn append_visitor(&mut self, text: &str) -> ChatMessage {
        self.append(Sender::Visitor, text)
    }

    /// Appends a bot message. Pacing happens upstream (in the pacer); by the
    /// time a line reaches the transcript it is visible.
    pub fn append_bot(&mut self, text: &str) -> ChatMessage {
        self.append(Sender::Bot, text)
    }

    fn append(&mut self, sender: Sender, text: &str) -> ChatMessage {
        let now = Utc::now();
        // Clamp: sent_at never decreases across the log.
        let sent_at = match self.messages.last() {
            Some(prev) if prev.sent_at > now => prev.sent_at,
            _ => now,
        };
        let message = ChatMessage {
            id: MessageId::generate(),
            sender,
            text: text.to_string(),
            sent_at,
        };
        self.messages.push(message.clone());
        message
    }

    /// Read-only ordered view of the dialogue so far.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Transcript shared between the session (visitor side) and the pacer task
/// (bot side). All mutation is short lock-append-unlock.
pub type SharedTranscript = Arc<Mutex<Transcript>>;

/// Creates an empty shared transcript.
pub fn shared() -> SharedTranscript {
    Arc::new(Mutex::new(Transcript::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_preserve_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.append_bot("welcome");
        transcript.append_visitor("Maria");
        transcript.append_bot("nice to meet you");

        let texts: Vec<&str> = transcript.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["welcome", "Maria", "nice to meet you"]);
        assert_eq!(transcript.messages()[0].sender, Sender::Bot);
        assert_eq!(transcript.messages()[1].sender, Sender::Visitor);
    }

    #[test]
    fn timestamps_are_monotonically_non_decreasing() {
        let mut transcript = Transcript::new();
        for i in 0..20 {
            transcript.append_visitor(&format!("line {i}"));
        }
        let messages = transcript.messages();
        for pair in messages.windows(2) {
            assert!(pair[0].sent_at <= pair[1].sent_at);
        }
    }

    #[test]
    fn message_ids_are_unique() {
        let mut transcript = Transcript::new();
        transcript.append_visitor("a");
        transcript.append_visitor("a");
        let messages = transcript.messages();
        assert_ne!(messages[0].id, messages[1].id);
    }
}
