//! Last-request-wins guard for views that refetch while a previous fetch is in flight

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Issues monotonically increasing tickets for one view.
///
/// Clones share the same counter, so a ticket taken by one closure is
/// invalidated by a ticket taken through any clone.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

/// Proof that a render was started; only the newest one may touch the DOM
#[derive(Clone, Debug)]
pub struct RequestTicket {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every ticket issued before it
    pub fn issue(&self) -> RequestTicket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            id,
            latest: self.latest.clone(),
        }
    }

    /// Supersede in-flight requests without starting a new one (view teardown)
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let seq = RequestSequence::new();
        let first = seq.issue();
        assert!(first.is_current());

        let second = seq.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_clones_share_counter() {
        let seq = RequestSequence::new();
        let other = seq.clone();
        let ticket = seq.issue();
        let _newer = other.issue();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_invalidate() {
        let seq = RequestSequence::new();
        let ticket = seq.issue();
        seq.invalidate();
        assert!(!ticket.is_current());
    }
}
