//! Responsive board geometry.
//!
//! Derives a grid (rows, columns, card size) from the card count and the
//! viewport. Pure and cheap, so callers recompute on every viewport or
//! settings change instead of caching.

use serde::Serialize;

/// Horizontal padding reserved around the board, in logical pixels.
const H_MARGIN: f32 = 40.0;

/// Vertical space reserved for the HUD and controls.
const V_MARGIN: f32 = 150.0;

/// Spacing between cards.
const GAP: f32 = 10.0;

/// Intrinsic card shape, width over height.
const GOLDEN_RATIO: f32 = 1.618;

/// Near-square aspect forced on portrait viewports, where the user's
/// aspect tuning would make the board unusable.
const PORTRAIT_ASPECT: f32 = 1.0 / 1.1;

/// A viewport in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a viewport.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Taller than wide?
    #[must_use]
    pub fn is_portrait(self) -> bool {
        self.height > self.width
    }
}

/// Computed grid geometry for one board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoardLayout {
    pub rows: usize,
    pub cols: usize,
    pub card_w: f32,
    pub card_h: f32,
    /// Total grid width, used to center the board.
    pub board_w: f32,
}

impl BoardLayout {
    /// Compute the layout for `card_count` cards in `viewport`.
    ///
    /// `scale` is the user's overall board scale; `aspect` the user's
    /// aspect tuning, overridden on portrait viewports.
    #[must_use]
    pub fn compute(card_count: usize, viewport: Viewport, scale: f32, aspect: f32) -> Self {
        let (rows, cols) = grid_for(card_count);

        let aspect = if viewport.is_portrait() {
            PORTRAIT_ASPECT
        } else {
            aspect
        };

        let usable_w = (viewport.width - H_MARGIN) * scale;
        let usable_h = (viewport.height - V_MARGIN) * scale;

        // The tighter axis binds: the grid must fit both ways.
        let card_w = (usable_w / cols as f32 - GAP).min((usable_h / rows as f32 - GAP) * aspect);
        let card_h = card_w / GOLDEN_RATIO;
        let board_w = (card_w + GAP) * cols as f32;

        Self {
            rows,
            cols,
            card_w,
            card_h,
            board_w,
        }
    }
}

/// Factor `count` into the near-squarest `(rows, cols)` grid.
///
/// Starts at `floor(sqrt(count))` and walks down to the first divisor,
/// then puts the larger factor on the horizontal axis: 12 gives (3, 4),
/// 16 gives (4, 4), 20 gives (4, 5), 24 gives (4, 6).
#[must_use]
pub fn grid_for(count: usize) -> (usize, usize) {
    assert!(count > 0, "card count must be positive");

    let mut rows = (count as f64).sqrt().floor() as usize;
    while count % rows != 0 {
        rows -= 1;
    }
    let cols = count / rows;

    (rows.min(cols), rows.max(cols))
}
