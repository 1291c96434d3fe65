//! Conversation pipeline for the Wisp chat widget.
//!
//! The core owns everything with real sequencing behavior:
//! - Typewriter reveal (cursor state machine + cadence-driven driver)
//! - Per-message render queue (blocks and follow-ups never interleave)
//! - Send/receive orchestration against a question-answering backend
//!
//! Rendering and timing are injected through the [`RenderSurface`],
//! [`WidgetChrome`] and [`Cadence`] traits, so the same pipeline drives a
//! real host surface or a test recorder stepped without delays.

pub mod cadence;
pub mod log;
pub mod orchestrator;
pub mod panel;
pub mod renderer;
pub mod reveal;
pub mod surface;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_support;

pub use cadence::{Cadence, Immediate, Interval};
pub use log::ConversationLog;
pub use orchestrator::{clean_reply, ConversationContext, ResponseOrchestrator, COMPARISON_MARKER};
pub use panel::PanelToggle;
pub use renderer::{MessageRenderer, COMPOSING_INDICATOR};
pub use reveal::{reveal, RevealCursor};
pub use surface::{RenderSurface, UnitId, UnitKind, WidgetChrome};
pub use widget::ChatWidget;
