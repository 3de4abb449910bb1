//! Feature cards that fade in as they scroll into view.

use tracing::debug;

use crate::constants::{REVEAL_BOTTOM_MARGIN, REVEAL_STAGGER, REVEAL_THRESHOLD};
use crate::timer::OneShot;

/// Fraction of `[top, top + height)` inside the viewport, whose bottom edge
/// is pulled up by `REVEAL_BOTTOM_MARGIN`.
pub fn visible_ratio(top: f32, height: f32, scroll_y: f32, viewport_height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let view_top = scroll_y;
    let view_bottom = scroll_y + (viewport_height - REVEAL_BOTTOM_MARGIN).max(0.0);
    let overlap = (top + height).min(view_bottom) - top.max(view_top);
    (overlap / height).clamp(0.0, 1.0)
}

#[derive(Debug)]
struct Card {
    top: f32,
    height: f32,
    seen: bool,
    revealed: bool,
    delay: OneShot,
}

/// Card `k` is revealed `k * REVEAL_STAGGER` seconds after it first comes
/// into view, and stays revealed.
#[derive(Debug, Default)]
pub struct FeatureReveal {
    cards: Vec<Card>,
}

impl FeatureReveal {
    /// Each entry is a card's page offset and height.
    pub fn new(cards: impl IntoIterator<Item = (f32, f32)>) -> Self {
        let cards = cards
            .into_iter()
            .map(|(top, height)| Card { top, height, seen: false, revealed: false, delay: OneShot::new() })
            .collect();
        Self { cards }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.cards.get(index).is_some_and(|card| card.revealed)
    }

    /// Checks every card against the viewport; the first sighting arms its delay.
    pub fn observe(&mut self, scroll_y: f32, viewport_height: f32) {
        for (index, card) in self.cards.iter_mut().enumerate() {
            if card.seen {
                continue;
            }
            if visible_ratio(card.top, card.height, scroll_y, viewport_height) >= REVEAL_THRESHOLD {
                card.seen = true;
                card.delay.arm(index as f32 * REVEAL_STAGGER);
                debug!(index, "feature card in view");
            }
        }
    }

    pub fn advance(&mut self, dt: f32) {
        for card in self.cards.iter_mut() {
            if card.delay.advance(dt).is_some() {
                card.revealed = true;
            }
        }
    }
}
