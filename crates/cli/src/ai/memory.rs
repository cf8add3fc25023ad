//! In-process conversation memory
//!
//! Holds the most recent user/assistant turns so a chat session can refer
//! back to earlier questions. Nothing is persisted.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One chat message as sent to a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Bounded history of completed turns, oldest dropped first
#[derive(Debug, Clone)]
pub struct ConversationMemory {
    turns: VecDeque<(String, String)>,
    max_turns: usize,
}

impl ConversationMemory {
    /// `max_turns == 0` keeps nothing
    pub fn new(max_turns: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(max_turns),
            max_turns,
        }
    }

    /// Remember a completed exchange
    pub fn record(&mut self, prompt: &str, reply: &str) {
        if self.max_turns == 0 {
            return;
        }
        while self.turns.len() >= self.max_turns {
            self.turns.pop_front();
        }
        self.turns.push_back((prompt.to_string(), reply.to_string()));
    }

    /// History as alternating user/assistant messages
    pub fn messages(&self) -> Vec<Message> {
        self.turns
            .iter()
            .flat_map(|(prompt, reply)| [Message::user(prompt), Message::assistant(reply)])
            .collect()
    }

    /// Number of remembered turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}
