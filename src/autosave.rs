//! Editor auto-save with an unsaved-changes badge.
//!
//! Each editor region owns one controller: input shows the badge and
//! reschedules a 3 s debounce; when it fires, the content goes to the
//! [`SaveSink`] and on success the badge is hidden and a short success
//! notification is shown. The sink is the save-endpoint seam; the stub
//! implementation logs and succeeds, real persistence belongs to the server.

use crate::constants::{AUTO_SAVE_DEBOUNCE, AUTO_SAVE_TOAST_DURATION};
use crate::notifications::{NotificationCenter, Severity};
use crate::timing::DebounceTimer;
use std::time::Instant;

/// Save-endpoint seam: receives the current editor content.
pub trait SaveSink {
    fn save(&mut self, content: &str) -> anyhow::Result<()>;
}

/// Local no-op sink standing in for the server's save endpoint.
#[derive(Debug, Default)]
pub struct StubSaveSink;

impl SaveSink for StubSaveSink {
    fn save(&mut self, content: &str) -> anyhow::Result<()> {
        tracing::debug!("auto-saving {} bytes", content.len());
        Ok(())
    }
}

/// Auto-save state for one editor region.
#[derive(Debug, Default)]
pub struct AutoSaveController {
    content: String,
    unsaved: bool,
    timer: DebounceTimer,
}

impl AutoSaveController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor input: record the content, show the unsaved badge, and restart
    /// the quiet-period timer.
    pub fn input(&mut self, content: impl Into<String>, now: Instant) {
        self.content = content.into();
        self.unsaved = true;
        self.timer.schedule(now, AUTO_SAVE_DEBOUNCE);
    }

    /// Drive the pending save. Returns true when a save completed; on sink
    /// failure the badge stays up and a danger notification is shown instead.
    pub fn poll(
        &mut self,
        now: Instant,
        sink: &mut dyn SaveSink,
        notifications: &mut NotificationCenter,
    ) -> bool {
        if !self.timer.fire(now) {
            return false;
        }
        match sink.save(&self.content) {
            Ok(()) => {
                self.unsaved = false;
                notifications.show_with(
                    "Changes auto-saved",
                    Severity::Success,
                    AUTO_SAVE_TOAST_DURATION,
                    now,
                );
                true
            }
            Err(e) => {
                tracing::error!("auto-save failed: {e:#}");
                notifications.show("Auto-save failed", Severity::Danger);
                false
            }
        }
    }

    /// Whether the unsaved-changes badge is showing.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
