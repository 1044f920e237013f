//! The single-slot settle timer.
//!
//! A round has at most one deferred transition outstanding: either the
//! commit of a matched pair or the flip-back of a mismatched one. The
//! timer holds a single `Option`, so scheduling replaces whatever was
//! pending and a stale deadline can never outlive a newer action.

use std::time::Instant;

/// Which deferred transition is pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleKind {
    /// Commit the open pair into the matched set.
    CommitMatch,
    /// Turn the open pair face down again.
    FlipBack,
}

/// Replace-semantics holder for the pending settle.
#[derive(Clone, Debug, Default)]
pub(crate) struct SettleTimer {
    pending: Option<(SettleKind, Instant)>,
}

impl SettleTimer {
    /// Schedule a settle, replacing any pending one.
    pub(crate) fn schedule(&mut self, kind: SettleKind, due: Instant) {
        self.pending = Some((kind, due));
    }

    /// Drop the pending settle, if any. Cancellation is total: nothing
    /// of the old entry survives.
    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }

    /// Take the pending settle if its deadline has passed.
    pub(crate) fn take_due(&mut self, now: Instant) -> Option<SettleKind> {
        match self.pending {
            Some((kind, due)) if due <= now => {
                self.pending = None;
                Some(kind)
            }
            _ => None,
        }
    }

    /// Deadline of the pending settle, if any.
    pub(crate) fn due_at(&self) -> Option<Instant> {
        self.pending.map(|(_, due)| due)
    }

    /// Is a settle outstanding?
    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
