use serde::{Deserialize, Serialize};
use std::fmt;

/// Short hex id correlating the log lines of one send/receive cycle.
pub fn new_exchange_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExchangeId(String);

impl ExchangeId {
    pub fn new() -> Self {
        Self(new_exchange_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ExchangeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
