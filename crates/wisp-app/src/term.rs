//! Terminal implementation of the widget's surface and chrome.
//!
//! Each message unit becomes one labelled terminal line; revealed
//! characters stream onto the line as they arrive. Scrollback cannot be
//! edited, so `clear_unit` only erases the unit currently being written —
//! which is the only unit the core ever clears (the composing placeholder).

use std::io::Write;

use wisp_core::{RenderSurface, UnitId, UnitKind, WidgetChrome};

const VISITOR_PREFIX: &str = "you | ";
const BOT_PREFIX: &str = "bot | ";
const CONTINUATION: &str = "    | ";

pub struct TermSurface<W: Write> {
    out: W,
    next_unit: u32,
    current: Option<(UnitId, UnitKind)>,
    line_len: usize,
    at_line_start: bool,
}

impl TermSurface<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TermSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            next_unit: 0,
            current: None,
            line_len: 0,
            at_line_start: true,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, s: &str) {
        // A broken stdout leaves nothing sensible to do mid-reveal.
        let _ = self.out.write_all(s.as_bytes());
        let _ = self.out.flush();
        self.line_len += s.chars().count();
    }

    fn newline(&mut self) {
        let _ = self.out.write_all(b"\n");
        let _ = self.out.flush();
        self.line_len = 0;
        self.at_line_start = true;
    }

    fn prefix_for(kind: UnitKind) -> &'static str {
        match kind {
            UnitKind::Visitor => VISITOR_PREFIX,
            UnitKind::Bot => BOT_PREFIX,
        }
    }
}

impl<W: Write> RenderSurface for TermSurface<W> {
    fn push_unit(&mut self, kind: UnitKind) -> UnitId {
        let unit = UnitId(self.next_unit);
        self.next_unit += 1;
        if !self.at_line_start {
            self.newline();
        }
        self.emit(Self::prefix_for(kind));
        self.at_line_start = false;
        self.current = Some((unit, kind));
        unit
    }

    fn set_unit_text(&mut self, unit: UnitId, text: &str) {
        if self.current.map(|(u, _)| u) == Some(unit) {
            self.emit(text);
        }
    }

    fn begin_line(&mut self, _unit: UnitId) {
        // Line grouping has no terminal equivalent; breaks are explicit.
    }

    fn push_char(&mut self, unit: UnitId, ch: char) {
        if self.current.map(|(u, _)| u) == Some(unit) {
            self.emit(&ch.to_string());
        }
    }

    fn push_line_break(&mut self, unit: UnitId) {
        if self.current.map(|(u, _)| u) == Some(unit) {
            self.newline();
            self.emit(CONTINUATION);
            self.at_line_start = false;
        }
    }

    fn clear_unit(&mut self, unit: UnitId) {
        let Some((current, kind)) = self.current else {
            return;
        };
        if current != unit {
            return;
        }
        let erase = format!("\r{}\r", " ".repeat(self.line_len));
        let _ = self.out.write_all(erase.as_bytes());
        self.line_len = 0;
        self.emit(Self::prefix_for(kind));
    }

    fn scroll_to_latest(&mut self) {
        // The terminal scrolls as lines are written.
    }
}

impl<W: Write> WidgetChrome for TermSurface<W> {
    fn set_panel_open(&mut self, open: bool) {
        if !self.at_line_start {
            self.newline();
        }
        self.emit(if open {
            "[chat panel opened]"
        } else {
            "[chat panel closed]"
        });
        self.newline();
    }

    fn show_comparison(&mut self, text: &str) {
        if !self.at_line_start {
            self.newline();
        }
        self.emit("--- comparison ---");
        self.newline();
        self.emit(text);
        self.newline();
        self.emit("-------------------");
        self.newline();
    }

    fn clear_input(&mut self) {
        // Input comes a line at a time from stdin; there is no field to clear.
    }
}
