//! Turns conversation entries into visible units.

use tracing::debug;
use wisp_common::{Message, Sender};

use crate::cadence::Cadence;
use crate::reveal::reveal;
use crate::surface::{RenderSurface, UnitId, UnitKind};

/// Static text shown in the placeholder while a reply is in flight.
pub const COMPOSING_INDICATOR: &str = "Bot is typing";

/// Renders messages onto a surface: visitor blocks synchronously, bot
/// blocks through the typewriter reveal. Blocks within one message render
/// strictly in order; a block's reveal finishes before the next begins.
pub struct MessageRenderer {
    cadence: Box<dyn Cadence>,
}

impl MessageRenderer {
    pub fn new(cadence: Box<dyn Cadence>) -> Self {
        Self { cadence }
    }

    /// Render one message, splitting multi-paragraph text into separate
    /// units. Returns once every unit is fully placed and revealed.
    pub async fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S, message: &Message) {
        for block in message.text.split("\n\n") {
            match message.sender {
                Sender::Visitor => {
                    let unit = surface.push_unit(UnitKind::Visitor);
                    surface.set_unit_text(unit, block);
                }
                Sender::Bot => {
                    let unit = surface.push_unit(UnitKind::Bot);
                    reveal(surface, unit, block, self.cadence.as_ref()).await;
                }
            }
            surface.scroll_to_latest();
        }
    }

    /// Append the "composing" placeholder unit. The caller clears its
    /// content before reusing it as a reveal target.
    pub fn create_placeholder<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> UnitId {
        let unit = surface.push_unit(UnitKind::Bot);
        surface.set_unit_text(unit, COMPOSING_INDICATOR);
        surface.scroll_to_latest();
        debug!(%unit, "placeholder created");
        unit
    }

    /// Reveal already-prepared text into an existing unit.
    pub async fn reveal_into<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        unit: UnitId,
        text: &str,
    ) {
        reveal(surface, unit, text, self.cadence.as_ref()).await;
    }
}
