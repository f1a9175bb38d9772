//! Cancellable timer primitives - debounce and throttle.
//!
//! Deferred work is modeled as an `Instant` deadline owned by the caller and
//! inspected via `fire`/`poll` rather than a background timer thread. A later
//! `schedule` always cancels and replaces the prior deadline, so the most
//! recent call wins, exactly.

use std::time::{Duration, Instant};

/// A single pending deadline that can be rescheduled or cancelled.
///
/// This is the one timer handle every debounced behavior in the crate owns
/// (search auto-submit, editor auto-save, the generic [`Debounce`] combinator).
#[derive(Debug, Clone, Default)]
pub struct DebounceTimer {
    deadline: Option<Instant>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the timer to fire at `now + delay`, replacing any pending
    /// deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns true while a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once when the deadline has passed, clearing it.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Debounce combinator: collapses a burst of calls into one invocation
/// carrying the payload of the last call.
///
/// With `immediate` set, the invocation happens on the leading edge instead
/// (first call of a burst) and the trailing edge is suppressed.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    wait: Duration,
    immediate: bool,
    timer: DebounceTimer,
    pending: Option<T>,
}

impl<T> Debounce<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            immediate: false,
            timer: DebounceTimer::new(),
            pending: None,
        }
    }

    /// Fire on the leading edge of a burst instead of the trailing edge.
    pub fn immediate(wait: Duration) -> Self {
        Self {
            immediate: true,
            ..Self::new(wait)
        }
    }

    /// Record a call. Returns `Some(payload)` only when firing on the
    /// leading edge; otherwise the payload is held for [`Debounce::poll`].
    pub fn call(&mut self, payload: T, now: Instant) -> Option<T> {
        // A deadline that already elapsed is a finished burst, not a pending
        // one; expire it so this call can open a new burst.
        self.timer.fire(now);
        let leading = self.immediate && !self.timer.is_pending();
        self.timer.schedule(now, self.wait);
        if leading {
            Some(payload)
        } else if self.immediate {
            // Mid-burst call in leading-edge mode: extends the window only.
            None
        } else {
            self.pending = Some(payload);
            None
        }
    }

    /// Fire the trailing edge if the quiet period has elapsed, yielding the
    /// payload of the most recent call.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.timer.fire(now) {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }
}

/// Throttle combinator: at most one invocation per `limit` window, on the
/// leading edge. Calls inside a closed window are dropped, not queued.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    reopen_at: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            reopen_at: None,
        }
    }

    /// Returns true if a call at `now` may proceed, closing the window until
    /// `now + limit`.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.reopen_at {
            Some(reopen) if now < reopen => false,
            _ => {
                self.reopen_at = Some(now + self.limit);
                true
            }
        }
    }
}
