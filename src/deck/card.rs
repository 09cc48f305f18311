//! A mounted card in the visible window.

use serde::Serialize;
use uuid::Uuid;

use crate::clamp::TextClampController;
use crate::color::{random_readable_colors, CardColors};
use crate::content::Item;

/// Deepest stacking position the fan effect distinguishes visually.
pub const MAX_FAN_DEPTH: usize = 4;

/// One item rendered into the stack. Created when pulled from the queue,
/// destroyed when committed off-stack; owned exclusively by the deck.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Uuid,
    pub item: Item,
    /// Position in the visible window, 0 = topmost.
    pub depth: usize,
    /// Only the topmost card accepts pointer input.
    pub interactive: bool,
    pub colors: CardColors,
    pub clamp: TextClampController,
    /// Translation applied while the card is mid-drag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drag_offset: Option<(f32, f32)>,
}

impl Card {
    pub fn new(item: Item) -> Self {
        Self {
            id: Uuid::new_v4(),
            item,
            depth: 0,
            interactive: false,
            colors: random_readable_colors(),
            clamp: TextClampController::new(),
            drag_offset: None,
        }
    }

    /// Displayed stacking depth, clamped for the fan effect.
    pub fn fan_depth(&self) -> usize {
        self.depth.min(MAX_FAN_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;

    #[test]
    fn test_new_card_defaults() {
        let card = Card::new(Item::new("Honey never spoils.", Category::History));
        assert_eq!(card.depth, 0);
        assert!(!card.interactive);
        assert!(card.drag_offset.is_none());
        assert!(!card.clamp.is_expanded());
    }

    #[test]
    fn test_fan_depth_clamps() {
        let mut card = Card::new(Item::new("x", Category::Tech));
        card.depth = 2;
        assert_eq!(card.fan_depth(), 2);
        card.depth = 9;
        assert_eq!(card.fan_depth(), MAX_FAN_DEPTH);
    }
}
