//! # pairflip
//!
//! Core logic for a casual memory card-matching game.
//!
//! The crate owns everything with algorithmic substance and nothing else:
//! rendering, animation, settings storage, and platform chrome stay in the
//! embedding UI and talk to this crate through plain data.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Deals come from a seedable ChaCha8 RNG, so a round
//!    can be replayed exactly from its seed.
//!
//! 2. **Explicit state**: The flip machine has no side-channel flags. Every
//!    transition happens inside [`Round::flip`] or [`Round::poll`], and the
//!    single pending settle timer is enforced by construction.
//!
//! 3. **Pure geometry**: Board layout is a cheap pure function of card count,
//!    viewport, and two user scalars. It is recomputed, never cached.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG and the fixed symbol pool
//! - `deck`: difficulty, cards, and dealing
//! - `round`: the match-resolution state machine
//! - `layout`: responsive board geometry
//! - `settings`: the persisted settings record

pub mod core;
pub mod deck;
pub mod layout;
pub mod round;
pub mod settings;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Symbol, SYMBOL_POOL};

pub use crate::deck::{Card, Deck, Difficulty};

pub use crate::round::{
    CardView, FlipOutcome, OverlayView, Phase, Round, RoundResult, SettleEvent, SettleKind,
    MATCH_SETTLE_DELAY, MISMATCH_SETTLE_DELAY,
};

pub use crate::layout::{grid_for, BoardLayout, Viewport};

pub use crate::settings::{Orientation, Settings};
