//! Typewriter reveal: cursor state machine plus the cadence-driven driver.

use tracing::trace;

use crate::cadence::Cadence;
use crate::surface::{RenderSurface, UnitId};

/// Transient per-reveal cursor over the prepared lines of one text block.
///
/// `line` and `ch` only ever advance; the reveal is complete when `line`
/// has moved past the last prepared line. Lines are prepared once at
/// construction: the text is split on `'\n'` and a leading `"* "` marker is
/// replaced with a bullet glyph before any character is revealed.
#[derive(Debug)]
pub struct RevealCursor {
    lines: Vec<Vec<char>>,
    line: usize,
    ch: usize,
}

impl RevealCursor {
    pub fn new(text: &str) -> Self {
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n').map(prepare_line).collect()
        };
        Self { lines, line: 0, ch: 0 }
    }

    pub fn is_done(&self) -> bool {
        self.line >= self.lines.len()
    }

    /// Advance by one cadence step.
    ///
    /// Either appends one character (opening a new line element first when
    /// at the start of a line, with a break before every line but the
    /// first), or consumes the step moving past an exhausted line.
    pub fn step<S: RenderSurface + ?Sized>(&mut self, surface: &mut S, unit: UnitId) {
        if self.is_done() {
            return;
        }

        if self.ch < self.lines[self.line].len() {
            if self.ch == 0 {
                if self.line > 0 {
                    surface.push_line_break(unit);
                }
                surface.begin_line(unit);
            }
            surface.push_char(unit, self.lines[self.line][self.ch]);
            self.ch += 1;
        } else {
            self.line += 1;
            self.ch = 0;
        }
    }
}

fn prepare_line(line: &str) -> Vec<char> {
    match line.strip_prefix("* ") {
        Some(rest) => format!("\u{2022} {rest}").chars().collect(),
        None => line.chars().collect(),
    }
}

/// Reveal `text` into `unit` one character per cadence tick. Returns once
/// every character has been appended. Callers must not start a second
/// reveal on the same unit before this one returns.
pub async fn reveal<S: RenderSurface + ?Sized>(
    surface: &mut S,
    unit: UnitId,
    text: &str,
    cadence: &dyn Cadence,
) {
    let mut cursor = RevealCursor::new(text);
    trace!(%unit, chars = text.len(), "reveal started");

    while !cursor.is_done() {
        cadence.tick().await;
        cursor.step(surface, unit);
    }

    trace!(%unit, "reveal complete");
}
