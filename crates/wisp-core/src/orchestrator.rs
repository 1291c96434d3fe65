//! Send/receive orchestration: one full exchange with the backend.

use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};
use wisp_backend::QaBackend;
use wisp_common::{Event, EventBus, ExchangeId, Message, Sender};

use crate::log::ConversationLog;
use crate::renderer::MessageRenderer;
use crate::surface::{RenderSurface, WidgetChrome};

/// Answers containing this substring get the comparison side render.
pub const COMPARISON_MARKER: &str = "comparison between";

static EMPHASIS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Strip `**emphasis**` markers (keeping the inner text) and trim.
pub fn clean_reply(text: &str) -> String {
    EMPHASIS_RE.replace_all(text, "$1").trim().to_string()
}

/// Page context scraped once at startup and sent with every query.
#[derive(Debug, Clone, Default)]
pub struct ConversationContext {
    website_text: String,
}

impl ConversationContext {
    pub fn new(website_text: impl Into<String>) -> Self {
        Self {
            website_text: website_text.into(),
        }
    }

    pub fn website_text(&self) -> &str {
        &self.website_text
    }

    pub fn is_empty(&self) -> bool {
        self.website_text.is_empty()
    }
}

/// Coordinates one send/receive cycle: validate, render the visitor turn,
/// hold a composing placeholder, call the backend, reveal the answer, then
/// the follow-ups strictly in order, then the optional comparison artifact.
///
/// `handle_send` takes `&mut self`, so one orchestrator instance serializes
/// its cycles; a placeholder from one cycle can never interleave with
/// another's reveal on the same surface.
pub struct ResponseOrchestrator {
    backend: Box<dyn QaBackend>,
    renderer: MessageRenderer,
    log: ConversationLog,
    context: ConversationContext,
    bus: Arc<EventBus>,
}

impl ResponseOrchestrator {
    pub fn new(
        backend: Box<dyn QaBackend>,
        renderer: MessageRenderer,
        bus: Arc<EventBus>,
    ) -> Self {
        Self {
            backend,
            renderer,
            log: ConversationLog::new(),
            context: ConversationContext::default(),
            bus,
        }
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    /// Fetch the page context once. A failure leaves the context empty and
    /// is logged, not surfaced to the visitor.
    pub async fn load_context(&mut self) {
        match self.backend.scrape_website().await {
            Ok(reply) => {
                debug!(bytes = reply.website_text.len(), "context loaded");
                self.bus.publish(Event::ContextLoaded {
                    bytes: reply.website_text.len(),
                });
                self.context = ConversationContext::new(reply.website_text);
            }
            Err(err) => {
                warn!(error = %err, "context fetch failed, continuing without");
            }
        }
    }

    /// Run one full exchange. Empty (after trimming) input is a silent
    /// no-op. A backend failure resets the placeholder and input and ends
    /// the cycle; it is never rendered into the conversation.
    pub async fn handle_send<S>(&mut self, surface: &mut S, raw_input: &str)
    where
        S: RenderSurface + WidgetChrome + ?Sized,
    {
        let text = raw_input.trim();
        if text.is_empty() {
            debug!("ignoring empty input");
            return;
        }

        let exchange = ExchangeId::new();
        debug!(%exchange, chars = text.len(), "exchange started");

        let visitor = Message::visitor(text);
        self.log.append(visitor.clone());
        self.bus.publish(Event::MessageAppended {
            sender: Sender::Visitor,
        });
        self.renderer.render(surface, &visitor).await;

        let placeholder = self.renderer.create_placeholder(surface);

        match self.backend.predict(text, self.context.website_text()).await {
            Ok(reply) => {
                surface.clear_unit(placeholder);

                let answer = clean_reply(&reply.answer);
                self.renderer
                    .reveal_into(surface, placeholder, &answer)
                    .await;
                surface.scroll_to_latest();
                self.bus.publish(Event::ReplyRevealed {
                    exchange: exchange.to_string(),
                });

                for question in &reply.follow_up_questions {
                    let follow_up = Message::bot(question.clone());
                    self.log.append(follow_up.clone());
                    self.bus.publish(Event::MessageAppended {
                        sender: Sender::Bot,
                    });
                    self.renderer.render(surface, &follow_up).await;
                }

                if answer.contains(COMPARISON_MARKER) {
                    surface.show_comparison(&answer);
                }

                surface.clear_input();
                debug!(%exchange, follow_ups = reply.follow_up_questions.len(), "exchange complete");
            }
            Err(err) => {
                warn!(%exchange, error = %err, "predict failed, resetting");
                surface.clear_unit(placeholder);
                surface.clear_input();
                self.bus.publish(Event::ExchangeFailed {
                    exchange: exchange.to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }
}
