//! Per-page request sequencing.
//!
//! Nothing cancels an in-flight fetch, so when a page's URL parameter
//! changes twice in quick succession the first response can arrive after
//! the second. Each load takes a ticket from the page's sequence; only
//! the ticket from the newest load may commit, and stale responses are
//! dropped instead of overwriting newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonically increasing load counter for one page.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, invalidating every earlier ticket.
    pub fn begin(&self) -> RequestTicket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            seq,
            latest: Arc::clone(&self.latest),
        }
    }
}

/// Handle identifying one load against its page's sequence.
#[derive(Debug, Clone)]
pub struct RequestTicket {
    seq: u64,
    latest: Arc<AtomicU64>,
}

impl RequestTicket {
    /// Whether this load is still the newest one for the page.
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_ticket_is_current() {
        let sequence = RequestSequence::new();
        assert!(sequence.begin().is_current());
    }

    #[test]
    fn newer_load_invalidates_older_ticket() {
        let sequence = RequestSequence::new();
        let first = sequence.begin();
        let second = sequence.begin();

        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn tickets_stay_stale_forever() {
        let sequence = RequestSequence::new();
        let first = sequence.begin();
        let _second = sequence.begin();
        let _third = sequence.begin();

        assert!(!first.is_current());
    }
}
