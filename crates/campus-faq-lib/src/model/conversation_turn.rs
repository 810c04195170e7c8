// Timestamp as seconds since UNIX epoch (u64) to avoid external chrono crate.
// Serde derives enable JSON persistence of chat transcripts.
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Who produced a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single turn in a chat session.
///
/// Turns are presentation-only state: the shell appends them to an ordered,
/// append-only history it owns, and the core never reads them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
    pub timestamp: u64,
}

impl ConversationTurn {
    /// Create a turn stamped with the current wall-clock time.
    pub fn now(role: Role, content: impl Into<String>) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            role,
            content: content.into(),
            timestamp,
        }
    }
}
