//! The match-resolution state machine for a single round.
//!
//! ## Key Types
//!
//! - `Round`: owns the deck, flip sequencing, and the pending settle
//! - `FlipOutcome`: what a call to [`Round::flip`] did
//! - `SettleEvent`: what a due settle did when [`Round::poll`] fired it
//! - `Phase`: coarse machine state for the UI
//!
//! ## Event loop contract
//!
//! The embedding UI calls [`Round::flip`] on taps and [`Round::poll`] on
//! its tick (or at [`Round::next_settle_due`]). Both take the current
//! `Instant` so pacing is testable without sleeping. At most one settle
//! is ever pending; any flip or restart that invalidates it cancels it
//! synchronously before doing anything else.

pub mod settle;
pub mod view;

pub use settle::SettleKind;
pub use view::{CardView, OverlayView};

use std::time::{Duration, Instant};

use smallvec::SmallVec;

use crate::core::GameRng;
use crate::deck::{Deck, Difficulty};

use self::settle::SettleTimer;

/// Pacing delay between a match being revealed and its commit.
pub const MATCH_SETTLE_DELAY: Duration = Duration::from_millis(800);

/// Pacing delay between a mismatch being revealed and the flip-back.
pub const MISMATCH_SETTLE_DELAY: Duration = Duration::from_millis(1200);

/// Most times a card may be viewed before it has matched.
const VIEW_CAP: u8 = 2;

/// Coarse machine state, derived from the open-card count and the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No cards open.
    Idle,
    /// One card open, waiting on a partner.
    OneOpen,
    /// Two cards open, settle pending.
    Resolving,
    /// Round finished; overlay showing.
    Over,
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundResult {
    /// Every pair matched.
    Won,
    /// A card ran past the view cap; carries the offending view count.
    Lost { views: u8 },
}

/// What a call to [`Round::flip`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Precondition failed (matched, already open, or round over);
    /// nothing changed.
    Ignored,
    /// The card is face up, waiting on a partner.
    Opened,
    /// A pair completed and matched; the commit settle is pending.
    MatchFound,
    /// A pair completed without matching; the flip-back settle is pending.
    Mismatch,
    /// The flip ended the round. See [`Round::result`].
    RoundOver,
}

/// A fired settle, reported from [`Round::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleEvent {
    /// A matched pair was committed. `won` is set when it was the last.
    MatchCommitted { won: bool },
    /// A mismatched pair turned face down again.
    FlippedBack,
}

/// One round of the matching game.
///
/// Created fresh by [`Round::new`]; [`Round::restart`] replaces the deck
/// and every counter wholesale, so nothing leaks between rounds.
#[derive(Clone, Debug)]
pub struct Round {
    deck: Deck,
    rng: GameRng,
    /// Face-up, unmatched indices, in flip order. Never more than 2.
    opened: SmallVec<[usize; 2]>,
    matched: Vec<bool>,
    matched_count: usize,
    /// Per-card view counts for the failure rule.
    views: Vec<u8>,
    /// Completed two-card comparisons.
    moves: u32,
    /// Pair currently wearing the success glow.
    success_pair: Option<(usize, usize)>,
    settle: SettleTimer,
    result: Option<RoundResult>,
}

impl Round {
    /// Deal a new round at the given difficulty from a seed.
    #[must_use]
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, GameRng::new(seed))
    }

    /// Deal a new round seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, GameRng::from_entropy())
    }

    /// Deal a new round using the given RNG.
    #[must_use]
    pub fn with_rng(difficulty: Difficulty, mut rng: GameRng) -> Self {
        let deck = Deck::deal(difficulty, &mut rng);
        Self::from_parts(deck, rng)
    }

    /// Start a round on an explicit deck.
    ///
    /// For replays and tests. [`Round::restart`] on such a round deals
    /// a fresh random deck of the same size.
    #[must_use]
    pub fn with_deck(deck: Deck, rng: GameRng) -> Self {
        Self::from_parts(deck, rng)
    }

    fn from_parts(deck: Deck, rng: GameRng) -> Self {
        let len = deck.len();
        Self {
            deck,
            rng,
            opened: SmallVec::new(),
            matched: vec![false; len],
            matched_count: 0,
            views: vec![0; len],
            moves: 0,
            success_pair: None,
            settle: SettleTimer::default(),
            result: None,
        }
    }

    /// Abandon the current round and deal a fresh one of the same size.
    ///
    /// Cancels the pending settle and zeroes every counter, so view
    /// counts never leak across rounds.
    pub fn restart(&mut self) {
        self.settle.cancel();
        self.deck = Deck::deal_pairs(self.deck.len() / 2, &mut self.rng);
        self.opened.clear();
        self.matched.iter_mut().for_each(|m| *m = false);
        self.matched_count = 0;
        self.views.iter_mut().for_each(|v| *v = 0);
        self.moves = 0;
        self.success_pair = None;
        self.result = None;
    }

    /// Handle a tap on the card at `index`.
    ///
    /// Panics if `index` is out of range; the renderer only exposes
    /// dealt cards.
    pub fn flip(&mut self, index: usize, now: Instant) -> FlipOutcome {
        assert!(index < self.deck.len(), "card index out of range");

        if self.result.is_some() || self.matched[index] || self.opened.contains(&index) {
            return FlipOutcome::Ignored;
        }

        if self.opened.len() == 2 {
            // The tap raced the settle timer. Resolve the open pair now
            // so a correct match is never lost to the flip-back.
            self.settle.cancel();
            let (a, b) = (self.opened[0], self.opened[1]);
            self.opened.clear();
            self.success_pair = None;
            if self.deck.symbol(a) == self.deck.symbol(b) {
                self.commit_match(a, b);
                if self.result.is_some() {
                    return FlipOutcome::RoundOver;
                }
            }
        }

        // Normal flip path. The tapped card spends one of its views
        // whether or not it arrived through the override above.
        self.views[index] += 1;
        let views = self.views[index];
        if views > VIEW_CAP {
            return self.lose(views);
        }

        self.opened.push(index);
        if self.opened.len() < 2 {
            return FlipOutcome::Opened;
        }

        self.moves += 1;
        let (a, b) = (self.opened[0], self.opened[1]);
        if self.deck.symbol(a) == self.deck.symbol(b) {
            self.success_pair = Some((a, b));
            self.settle
                .schedule(SettleKind::CommitMatch, now + MATCH_SETTLE_DELAY);
            FlipOutcome::MatchFound
        } else if views >= VIEW_CAP {
            // The second card burned its last view on a miss.
            self.lose(self.views[a].max(self.views[b]))
        } else {
            self.settle
                .schedule(SettleKind::FlipBack, now + MISMATCH_SETTLE_DELAY);
            FlipOutcome::Mismatch
        }
    }

    /// Fire the pending settle if its deadline has passed.
    ///
    /// The UI calls this on its tick, or once at [`Round::next_settle_due`].
    pub fn poll(&mut self, now: Instant) -> Option<SettleEvent> {
        match self.settle.take_due(now)? {
            SettleKind::CommitMatch => {
                let (a, b) = (self.opened[0], self.opened[1]);
                self.opened.clear();
                self.success_pair = None;
                self.commit_match(a, b);
                Some(SettleEvent::MatchCommitted {
                    won: self.result.is_some(),
                })
            }
            SettleKind::FlipBack => {
                self.opened.clear();
                Some(SettleEvent::FlippedBack)
            }
        }
    }

    fn commit_match(&mut self, a: usize, b: usize) {
        self.matched[a] = true;
        self.matched[b] = true;
        self.matched_count += 2;
        if self.matched_count == self.deck.len() {
            self.result = Some(RoundResult::Won);
        }
    }

    fn lose(&mut self, views: u8) -> FlipOutcome {
        self.settle.cancel();
        self.result = Some(RoundResult::Lost { views });
        FlipOutcome::RoundOver
    }

    // === Queries ===

    /// The dealt deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Total cards in the round.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
    }

    /// Coarse machine state.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.result.is_some() {
            Phase::Over
        } else {
            match self.opened.len() {
                0 => Phase::Idle,
                1 => Phase::OneOpen,
                _ => Phase::Resolving,
            }
        }
    }

    /// Completed two-card comparisons so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Cards committed as matched so far.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched_count
    }

    /// Has this card been committed as matched?
    #[must_use]
    pub fn is_matched(&self, index: usize) -> bool {
        self.matched[index]
    }

    /// Face-up, unmatched indices, in flip order.
    #[must_use]
    pub fn opened(&self) -> &[usize] {
        &self.opened
    }

    /// Times this card has been viewed in the current round.
    #[must_use]
    pub fn view_count(&self, index: usize) -> u8 {
        self.views[index]
    }

    /// Is the round finished?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Terminal result, once the round is over.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Deadline of the pending settle, for scheduling the next poll.
    #[must_use]
    pub fn next_settle_due(&self) -> Option<Instant> {
        self.settle.due_at()
    }

    /// Is a settle outstanding?
    #[must_use]
    pub fn has_pending_settle(&self) -> bool {
        self.settle.is_pending()
    }

    pub(crate) fn success_pair(&self) -> Option<(usize, usize)> {
        self.success_pair
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;

    fn test_round() -> Round {
        // [A, B, A, B]
        let a = Symbol::new(0);
        let b = Symbol::new(1);
        Round::with_deck(Deck::from_symbols(&[a, b, a, b]), GameRng::new(1))
    }

    #[test]
    fn test_phase_progression() {
        let now = Instant::now();
        let mut round = test_round();

        assert_eq!(round.phase(), Phase::Idle);
        round.flip(0, now);
        assert_eq!(round.phase(), Phase::OneOpen);
        round.flip(2, now);
        assert_eq!(round.phase(), Phase::Resolving);
        round.poll(now + MATCH_SETTLE_DELAY);
        assert_eq!(round.phase(), Phase::Idle);
    }

    #[test]
    fn test_flip_same_card_twice_is_ignored() {
        let now = Instant::now();
        let mut round = test_round();

        assert_eq!(round.flip(0, now), FlipOutcome::Opened);
        assert_eq!(round.flip(0, now), FlipOutcome::Ignored);
        assert_eq!(round.view_count(0), 1);
    }

    #[test]
    fn test_mismatch_then_flip_back() {
        let now = Instant::now();
        let mut round = test_round();

        round.flip(0, now);
        assert_eq!(round.flip(1, now), FlipOutcome::Mismatch);
        assert_eq!(round.moves(), 1);

        // Not due yet
        assert_eq!(round.poll(now), None);
        assert_eq!(
            round.poll(now + MISMATCH_SETTLE_DELAY),
            Some(SettleEvent::FlippedBack)
        );
        assert_eq!(round.opened(), &[] as &[usize]);
    }

    #[test]
    fn test_match_commits_after_settle() {
        let now = Instant::now();
        let mut round = test_round();

        round.flip(0, now);
        assert_eq!(round.flip(2, now), FlipOutcome::MatchFound);
        assert!(round.has_pending_settle());
        assert!(!round.is_matched(0));

        assert_eq!(
            round.poll(now + MATCH_SETTLE_DELAY),
            Some(SettleEvent::MatchCommitted { won: false })
        );
        assert!(round.is_matched(0));
        assert!(round.is_matched(2));
        assert_eq!(round.matched_count(), 2);
    }

    #[test]
    fn test_restart_resets_everything() {
        let now = Instant::now();
        let mut round = test_round();

        round.flip(0, now);
        round.flip(1, now);
        round.restart();

        assert_eq!(round.moves(), 0);
        assert_eq!(round.matched_count(), 0);
        assert_eq!(round.opened(), &[] as &[usize]);
        assert!(!round.has_pending_settle());
        assert!(!round.is_over());
        for i in 0..round.card_count() {
            assert_eq!(round.view_count(i), 0);
        }
    }
}
