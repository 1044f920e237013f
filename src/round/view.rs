//! Render-facing snapshots of round state.
//!
//! The rendering layer never touches the machine's internals; it asks for
//! these plain records and draws them. `Serialize` is derived so a host
//! can ship snapshots across a UI bridge.

use serde::Serialize;

use crate::core::Symbol;

use super::{Round, RoundResult};

/// What the renderer needs to draw one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub symbol: Symbol,
    /// Face up, either opened or already matched.
    pub is_open: bool,
    /// Committed as matched; drawn faded and inert.
    pub is_matched: bool,
    /// Wearing the success glow while the match settle is pending.
    pub is_success: bool,
}

/// The terminal overlay, shown when a round ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OverlayView {
    pub visible: bool,
    pub title: String,
    pub message: String,
    pub is_success: bool,
}

impl OverlayView {
    fn hidden() -> Self {
        Self {
            visible: false,
            title: String::new(),
            message: String::new(),
            is_success: false,
        }
    }

    fn for_result(result: RoundResult) -> Self {
        match result {
            RoundResult::Won => Self {
                visible: true,
                title: "SUCCESS!".to_string(),
                message: "You remembered every position perfectly.".to_string(),
                is_success: true,
            },
            RoundResult::Lost { views } => Self {
                visible: true,
                title: "GAME OVER".to_string(),
                message: format!("That card was flipped {views} times and still never matched."),
                is_success: false,
            },
        }
    }
}

impl Round {
    /// Snapshot of a single card.
    #[must_use]
    pub fn card_view(&self, index: usize) -> CardView {
        let is_matched = self.is_matched(index);
        let is_open = is_matched || self.opened().contains(&index);
        let is_success = self
            .success_pair()
            .is_some_and(|(a, b)| index == a || index == b);
        CardView {
            symbol: self.deck().symbol(index),
            is_open,
            is_matched,
            is_success,
        }
    }

    /// Snapshot of the whole board, in deal order.
    #[must_use]
    pub fn board_view(&self) -> Vec<CardView> {
        (0..self.card_count()).map(|i| self.card_view(i)).collect()
    }

    /// Snapshot of the terminal overlay.
    #[must_use]
    pub fn overlay(&self) -> OverlayView {
        match self.result() {
            Some(result) => OverlayView::for_result(result),
            None => OverlayView::hidden(),
        }
    }
}
