//! The widget facade the host constructs with injected dependencies.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::info;
use wisp_backend::QaBackend;
use wisp_common::{Event, EventBus};

use crate::cadence::Cadence;
use crate::log::ConversationLog;
use crate::orchestrator::ResponseOrchestrator;
use crate::panel::PanelToggle;
use crate::renderer::MessageRenderer;
use crate::surface::{RenderSurface, WidgetChrome};

/// One chat widget instance: surface, panel state and the conversation
/// pipeline. The host supplies the surface, the backend client and the
/// reveal cadence; everything else is owned here.
pub struct ChatWidget<S: RenderSurface + WidgetChrome> {
    surface: S,
    panel: PanelToggle,
    orchestrator: ResponseOrchestrator,
    bus: Arc<EventBus>,
}

impl<S: RenderSurface + WidgetChrome> ChatWidget<S> {
    pub fn new(surface: S, backend: Box<dyn QaBackend>, cadence: Box<dyn Cadence>) -> Self {
        let bus = Arc::new(EventBus::new(32));
        let orchestrator = ResponseOrchestrator::new(
            backend,
            MessageRenderer::new(cadence),
            Arc::clone(&bus),
        );
        Self {
            surface,
            panel: PanelToggle::new(),
            orchestrator,
            bus,
        }
    }

    /// Fetch the page context. Call once before the first send.
    pub async fn init(&mut self) {
        info!("widget initializing");
        self.orchestrator.load_context().await;
    }

    /// Flip panel visibility and push the new state to the chrome.
    pub fn toggle_panel(&mut self) {
        let open = self.panel.toggle();
        self.surface.set_panel_open(open);
        self.bus.publish(if open {
            Event::PanelOpened
        } else {
            Event::PanelClosed
        });
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    /// Run one send/receive cycle with the visitor's raw input.
    pub async fn send(&mut self, raw_input: &str) {
        self.orchestrator
            .handle_send(&mut self.surface, raw_input)
            .await;
    }

    pub fn log(&self) -> &ConversationLog {
        self.orchestrator.log()
    }

    pub fn transcript(&self) -> String {
        self.orchestrator.log().transcript()
    }

    /// Subscribe to widget lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
