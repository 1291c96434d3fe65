//! Capability traits the host must provide.
//!
//! The original widget mutated DOM nodes directly. Here the surface is a
//! minimal capability interface: the core only ever appends units, appends
//! characters and line breaks inside a unit, clears a unit, and scrolls.
//! `WidgetChrome` covers the pieces of the widget that sit outside the
//! message list (panel, input field, comparison box).

use std::fmt;

/// Opaque handle to one visible message unit on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit-{}", self.0)
    }
}

/// Visual styling class of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Visitor,
    Bot,
}

/// The conversation render surface. Units are append-ordered and never
/// reordered; a `UnitId` stays valid for the life of the surface.
pub trait RenderSurface {
    /// Append a new empty unit and return its handle.
    fn push_unit(&mut self, kind: UnitKind) -> UnitId;

    /// Replace a unit's entire content with static text.
    fn set_unit_text(&mut self, unit: UnitId, text: &str);

    /// Start a new inline line element inside a unit.
    fn begin_line(&mut self, unit: UnitId);

    /// Append one character to the unit's current line element.
    fn push_char(&mut self, unit: UnitId, ch: char);

    /// Insert a visual line separation inside a unit.
    fn push_line_break(&mut self, unit: UnitId);

    /// Remove all content from a unit, leaving it empty in place.
    fn clear_unit(&mut self, unit: UnitId);

    /// Scroll so the newest content is visible.
    fn scroll_to_latest(&mut self);
}

/// Widget chrome outside the message list.
pub trait WidgetChrome {
    /// Show or hide the chat panel.
    fn set_panel_open(&mut self, open: bool);

    /// Render the verbatim comparison artifact in its side box.
    fn show_comparison(&mut self, text: &str);

    /// Empty the visitor input field.
    fn clear_input(&mut self);
}
