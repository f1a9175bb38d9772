//! Form submission guard and loading-state helper.
//!
//! Submitting disables the submit control and marks it loading; a fixed 5 s
//! timeout forcibly re-enables it whether or not a response ever arrived.
//! This is an anti-double-submit guard, not a response-aware state machine.

use crate::constants::SUBMIT_GUARD_TIMEOUT;
use std::time::Instant;

/// Visual loading state of a control (class toggle plus disabled flag).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingState {
    loading: bool,
}

impl LoadingState {
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// A loading control is also disabled.
    pub fn is_disabled(&self) -> bool {
        self.loading
    }
}

/// Anti-double-submit guard for one form's submit control.
#[derive(Debug, Default)]
pub struct SubmitGuard {
    control: LoadingState,
    release_at: Option<Instant>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form submission: mark the control loading and arm the release timer.
    /// Returns false if a submission is already in flight.
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.control.is_loading() {
            return false;
        }
        self.control.set_loading(true);
        self.release_at = Some(now + SUBMIT_GUARD_TIMEOUT);
        true
    }

    /// Re-enable the control once the timeout has elapsed. Returns true on
    /// the poll that released it.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.release_at {
            Some(release) if now >= release => {
                self.release_at = None;
                self.control.set_loading(false);
                true
            }
            _ => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.control.is_loading()
    }

    pub fn is_disabled(&self) -> bool {
        self.control.is_disabled()
    }
}
