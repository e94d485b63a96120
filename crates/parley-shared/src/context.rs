//! Rolling conversation history.
//!
//! Holds at most `HISTORY_CAP` turns; pushing past the cap evicts the
//! oldest turn first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Maximum number of turns kept in history
pub const HISTORY_CAP: usize = 20;

/// Who said it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Bot,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Bot => write!(f, "bot"),
        }
    }
}

/// One message in the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            at: Utc::now(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
            at: Utc::now(),
        }
    }
}

/// Bounded history of turns for one chat session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationContext {
    session_id: Uuid,
    turns: VecDeque<Turn>,
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationContext {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            turns: VecDeque::with_capacity(HISTORY_CAP + 1),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Append a turn, evicting the oldest ones beyond the cap
    pub(crate) fn push(&mut self, turn: Turn) {
        self.turns.push_back(turn);
        while self.turns.len() > HISTORY_CAP {
            self.turns.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Turns oldest first
    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    /// Last `n` turns, oldest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Turn> {
        self.turns.iter().skip(self.turns.len().saturating_sub(n))
    }

    /// User turns among the last `n`
    pub fn recent_user_turns(&self, n: usize) -> usize {
        self.recent(n).filter(|t| t.role == Role::User).count()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.back()
    }

    /// Pretty JSON transcript
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
