//! Search-as-you-type auto-submission.
//!
//! Every keystroke reschedules a 500 ms debounce; when it fires, the form is
//! submitted only if the query is empty (cleared) or at least two characters,
//! avoiding a submit on a single leading character. The length rule is
//! evaluated at fire time, not at schedule time, so clearing the box via
//! Escape still lets the pending timer fire with the empty query.

use crate::constants::{MIN_SEARCH_QUERY_LEN, SEARCH_DEBOUNCE};
use crate::timing::DebounceTimer;

/// One free-text search input.
#[derive(Debug, Default)]
pub struct SearchBox {
    query: String,
    focused: bool,
    timer: DebounceTimer,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keystroke: replace the query and restart the quiet-period timer.
    pub fn input(&mut self, value: impl Into<String>, now: std::time::Instant) {
        self.query = value.into();
        self.timer.schedule(now, SEARCH_DEBOUNCE);
    }

    /// Returns true when the debounce fired and the query length permits an
    /// auto-submit of the enclosing form.
    pub fn poll(&mut self, now: std::time::Instant) -> bool {
        if !self.timer.fire(now) {
            return false;
        }
        let len = self.query.chars().count();
        len == 0 || len >= MIN_SEARCH_QUERY_LEN
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Escape while focused: clear the value and drop focus. Any pending
    /// debounce is left to fire with the cleared value.
    pub fn clear_and_blur(&mut self) {
        self.query.clear();
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}
