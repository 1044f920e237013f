//! Foundational types: deterministic RNG and the symbol pool.
//!
//! Everything here is game-agnostic plumbing. The deal and the state
//! machine build on these without adding any randomness of their own.

pub mod rng;
pub mod symbols;

pub use rng::{GameRng, GameRngState};
pub use symbols::{Symbol, SYMBOL_POOL};
