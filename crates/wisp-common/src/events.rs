use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::message::Sender;

/// Widget lifecycle milestones, published for host-side observers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    PanelOpened,
    PanelClosed,
    ContextLoaded { bytes: usize },
    MessageAppended { sender: Sender },
    ReplyRevealed { exchange: String },
    ExchangeFailed { exchange: String, reason: String },
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
