use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Visitor,
    Bot,
}

/// One conversation entry. Immutable once constructed; ordering is
/// arrival order in the log that owns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn visitor(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Visitor,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}
