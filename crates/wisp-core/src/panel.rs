//! Open/closed state of the chat panel.

/// Trivial visibility toggle. Starts closed.
#[derive(Debug, Default)]
pub struct PanelToggle {
    open: bool,
}

impl PanelToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the state and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}
