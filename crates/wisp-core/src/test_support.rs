//! Shared test doubles: an op-recording surface and a scripted backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use wisp_backend::{BackendError, PredictReply, QaBackend, ScrapeReply};

use crate::surface::{RenderSurface, UnitId, UnitKind, WidgetChrome};

/// One recorded surface mutation, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Unit(UnitId, UnitKind),
    Text(UnitId, String),
    Line(UnitId),
    Char(UnitId, char),
    Break(UnitId),
    Clear(UnitId),
    Scroll,
    PanelOpen(bool),
    Comparison(String),
    ClearInput,
}

/// Surface that records every call so tests can assert exact ordering.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_unit: u32,
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Characters revealed into a unit since it was last cleared,
    /// ignoring line structure.
    pub fn unit_chars(&self, unit: UnitId) -> String {
        let mut text = String::new();
        for op in &self.ops {
            match op {
                SurfaceOp::Char(u, ch) if *u == unit => text.push(*ch),
                SurfaceOp::Text(u, t) if *u == unit => text = t.clone(),
                SurfaceOp::Clear(u) if *u == unit => text.clear(),
                _ => {}
            }
        }
        text
    }

    pub fn units(&self) -> Vec<UnitId> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Unit(u, _) => Some(*u),
                _ => None,
            })
            .collect()
    }

    pub fn comparisons(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Comparison(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn input_clear_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::ClearInput))
            .count()
    }

    /// Index of the first op that pushed `ch` into `unit`.
    pub fn char_pos(&self, unit: UnitId, ch: char) -> Option<usize> {
        self.ops
            .iter()
            .position(|op| matches!(op, SurfaceOp::Char(u, c) if *u == unit && *c == ch))
    }
}

impl RenderSurface for RecordingSurface {
    fn push_unit(&mut self, kind: UnitKind) -> UnitId {
        let unit = UnitId(self.next_unit);
        self.next_unit += 1;
        self.ops.push(SurfaceOp::Unit(unit, kind));
        unit
    }

    fn set_unit_text(&mut self, unit: UnitId, text: &str) {
        self.ops.push(SurfaceOp::Text(unit, text.to_string()));
    }

    fn begin_line(&mut self, unit: UnitId) {
        self.ops.push(SurfaceOp::Line(unit));
    }

    fn push_char(&mut self, unit: UnitId, ch: char) {
        self.ops.push(SurfaceOp::Char(unit, ch));
    }

    fn push_line_break(&mut self, unit: UnitId) {
        self.ops.push(SurfaceOp::Break(unit));
    }

    fn clear_unit(&mut self, unit: UnitId) {
        self.ops.push(SurfaceOp::Clear(unit));
    }

    fn scroll_to_latest(&mut self) {
        self.ops.push(SurfaceOp::Scroll);
    }
}

impl WidgetChrome for RecordingSurface {
    fn set_panel_open(&mut self, open: bool) {
        self.ops.push(SurfaceOp::PanelOpen(open));
    }

    fn show_comparison(&mut self, text: &str) {
        self.ops.push(SurfaceOp::Comparison(text.to_string()));
    }

    fn clear_input(&mut self) {
        self.ops.push(SurfaceOp::ClearInput);
    }
}

/// Backend double serving queued replies, failing once the queue is empty.
pub struct ScriptedBackend {
    scrape: Option<String>,
    replies: Mutex<Vec<PredictReply>>,
    fail_predicts: bool,
    predict_calls: Arc<AtomicUsize>,
}

impl ScriptedBackend {
    pub fn with_reply(reply: PredictReply) -> Self {
        Self::with_replies(vec![reply])
    }

    pub fn with_replies(replies: Vec<PredictReply>) -> Self {
        Self {
            scrape: Some("scripted page text".to_string()),
            replies: Mutex::new(replies),
            fail_predicts: false,
            predict_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Every predict call fails with a network error.
    pub fn failing() -> Self {
        Self {
            scrape: Some("scripted page text".to_string()),
            replies: Mutex::new(Vec::new()),
            fail_predicts: true,
            predict_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The scrape endpoint fails too.
    pub fn without_context(mut self) -> Self {
        self.scrape = None;
        self
    }

    /// Handle on the predict-call counter, valid after the backend is
    /// boxed and moved into an orchestrator.
    pub fn predict_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.predict_calls)
    }
}

#[async_trait]
impl QaBackend for ScriptedBackend {
    async fn scrape_website(&self) -> Result<ScrapeReply, BackendError> {
        match &self.scrape {
            Some(text) => Ok(ScrapeReply {
                website_text: text.clone(),
            }),
            None => Err(BackendError::Network("scripted scrape failure".into())),
        }
    }

    async fn predict(
        &self,
        _message: &str,
        _website_text: &str,
    ) -> Result<PredictReply, BackendError> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_predicts {
            return Err(BackendError::Network("scripted predict failure".into()));
        }
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(BackendError::Network("no scripted reply left".into()));
        }
        Ok(replies.remove(0))
    }
}
