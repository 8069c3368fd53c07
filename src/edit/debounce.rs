//! Input debouncing
//!
//! Trailing-edge debounce for external calls triggered by rapid typing
//! (slug checks, generation-on-keystroke). The clock is passed in
//! explicitly so behavior stays deterministic under test.

use std::time::{Duration, Instant};

/// Poll-driven debouncer: arms on input, fires once after a quiet period.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending_since: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending_since: None,
        }
    }

    /// Record an input event; restarts the quiet period.
    pub fn note_input(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    /// Whether a call is armed but not yet fired.
    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Fire once the quiet period has elapsed. Returns `true` at most
    /// once per armed input burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending_since {
            Some(since) if now.duration_since(since) >= self.delay => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any armed call without firing.
    pub fn cancel(&mut self) {
        self.pending_since = None;
    }
}
