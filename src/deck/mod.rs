//! Difficulty, cards, and deck dealing.
//!
//! ## Key Types
//!
//! - `Difficulty`: validated round size (one of 12, 16, 20, 24 cards)
//! - `Card`: deck position plus face symbol, immutable once dealt
//! - `Deck`: the ordered card sequence for one round
//!
//! A deal picks `difficulty / 2` distinct symbols at random from the pool,
//! duplicates each, and shuffles the multiset. Invariant: every symbol in
//! a dealt deck appears exactly twice.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Symbol, SYMBOL_POOL};

/// Round sizes selectable in the settings panel.
const ALLOWED_COUNTS: [usize; 4] = [12, 16, 20, 24];

/// Total card count for a round. Always even, always from the allowed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Difficulty(usize);

impl Difficulty {
    /// Create a difficulty from a card count.
    ///
    /// Panics if the count is not one of the allowed sizes; use
    /// [`Difficulty::from_count`] when the input is untrusted.
    #[must_use]
    pub fn new(count: usize) -> Self {
        assert!(
            ALLOWED_COUNTS.contains(&count),
            "difficulty must be one of {ALLOWED_COUNTS:?}"
        );
        Self(count)
    }

    /// Create a difficulty from a card count, if it is an allowed size.
    #[must_use]
    pub fn from_count(count: usize) -> Option<Self> {
        ALLOWED_COUNTS.contains(&count).then_some(Self(count))
    }

    /// All selectable difficulties, easiest first.
    #[must_use]
    pub fn all() -> [Self; 4] {
        ALLOWED_COUNTS.map(Self)
    }

    /// Total cards in the round.
    #[must_use]
    pub const fn card_count(self) -> usize {
        self.0
    }

    /// Distinct symbols in the round.
    #[must_use]
    pub const fn pairs(self) -> usize {
        self.0 / 2
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(12)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} cards", self.0)
    }
}

/// A dealt card: deck position plus face symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Position in the deck, assigned sequentially at deal time.
    pub id: usize,
    /// Face symbol. Two cards match when these are equal.
    pub symbol: Symbol,
}

/// The ordered card sequence for one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal a fresh deck for the given difficulty.
    #[must_use]
    pub fn deal(difficulty: Difficulty, rng: &mut GameRng) -> Self {
        Self::deal_pairs(difficulty.pairs(), rng)
    }

    /// Deal a deck of `pairs` distinct symbols, each appearing twice.
    ///
    /// The general form behind [`Deck::deal`]; tests and custom modes can
    /// deal sizes outside the standard difficulty set.
    #[must_use]
    pub fn deal_pairs(pairs: usize, rng: &mut GameRng) -> Self {
        assert!(pairs >= 1, "a deck needs at least one pair");
        assert!(
            pairs <= SYMBOL_POOL.len(),
            "not enough symbols in the pool for {pairs} pairs"
        );

        // Shuffle the pool and take a prefix: distinct symbols, chosen
        // uniformly without replacement.
        let mut pool: Vec<u8> = (0..SYMBOL_POOL.len() as u8).collect();
        rng.shuffle(&mut pool);

        let mut faces = Vec::with_capacity(pairs * 2);
        for &index in &pool[..pairs] {
            faces.push(Symbol::new(index));
            faces.push(Symbol::new(index));
        }
        rng.shuffle(&mut faces);

        let cards = faces
            .into_iter()
            .enumerate()
            .map(|(id, symbol)| Card { id, symbol })
            .collect();
        Self { cards }
    }

    /// Build a deck from explicit symbols, in order.
    ///
    /// Each symbol must appear exactly twice. Useful for replays and for
    /// driving the state machine through known positions in tests.
    #[must_use]
    pub fn from_symbols(symbols: &[Symbol]) -> Self {
        let mut counts = std::collections::HashMap::new();
        for &s in symbols {
            *counts.entry(s).or_insert(0u32) += 1;
        }
        assert!(
            counts.values().all(|&n| n == 2),
            "every symbol must appear exactly twice"
        );

        let cards = symbols
            .iter()
            .enumerate()
            .map(|(id, &symbol)| Card { id, symbol })
            .collect();
        Self { cards }
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// A deck is never empty once dealt; provided for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get a card by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// The symbol at an index. Panics if out of range.
    #[must_use]
    pub fn symbol(&self, index: usize) -> Symbol {
        self.cards[index].symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_validation() {
        assert_eq!(Difficulty::new(12).card_count(), 12);
        assert_eq!(Difficulty::new(24).pairs(), 12);
        assert_eq!(Difficulty::from_count(16), Some(Difficulty::new(16)));
        assert_eq!(Difficulty::from_count(14), None);
        assert_eq!(Difficulty::from_count(0), None);
        assert_eq!(Difficulty::default().card_count(), 12);
    }

    #[test]
    #[should_panic(expected = "difficulty must be one of")]
    fn test_difficulty_rejects_odd_count() {
        Difficulty::new(13);
    }

    #[test]
    fn test_deal_composition() {
        let mut rng = GameRng::new(7);
        let deck = Deck::deal(Difficulty::new(20), &mut rng);

        assert_eq!(deck.len(), 20);

        let mut counts = std::collections::HashMap::new();
        for card in deck.cards() {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 10);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_deal_assigns_sequential_ids() {
        let mut rng = GameRng::new(7);
        let deck = Deck::deal(Difficulty::new(12), &mut rng);

        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.id, i);
        }
    }

    #[test]
    fn test_deal_is_deterministic() {
        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);

        let deck1 = Deck::deal(Difficulty::new(16), &mut rng1);
        let deck2 = Deck::deal(Difficulty::new(16), &mut rng2);

        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_consecutive_deals_differ() {
        let mut rng = GameRng::new(3);
        let first = Deck::deal(Difficulty::new(24), &mut rng);
        let second = Deck::deal(Difficulty::new(24), &mut rng);

        assert_ne!(first, second);
    }

    #[test]
    fn test_from_symbols() {
        let a = Symbol::new(0);
        let b = Symbol::new(1);
        let deck = Deck::from_symbols(&[a, b, a, b]);

        assert_eq!(deck.len(), 4);
        assert_eq!(deck.symbol(0), a);
        assert_eq!(deck.symbol(1), b);
        assert_eq!(deck.get(4), None);
    }

    #[test]
    #[should_panic(expected = "exactly twice")]
    fn test_from_symbols_rejects_unpaired() {
        let a = Symbol::new(0);
        let b = Symbol::new(1);
        Deck::from_symbols(&[a, a, a, b]);
    }
}
