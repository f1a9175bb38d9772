//! Application lifecycle - initialization and the timer poll loop.

use super::UiRuntime;
use crate::autosave::{SaveSink, StubSaveSink};
use crate::clipboard::Clipboard;
use crate::notifications::NotificationCenter;
use crate::theme::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemeController};
use std::time::Instant;

/// What a [`UiRuntime::poll`] pass fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollOutcome {
    /// Search boxes whose debounce fired an auto-submit
    pub search_submits: usize,
    /// Editors whose pending save completed
    pub saves: usize,
    /// Submit guards released by the anti-double-submit timeout
    pub released_guards: usize,
    /// Notifications detached after their exit animation
    pub expired_notifications: usize,
}

impl UiRuntime {
    /// Build a runtime over explicit seams.
    pub fn new(store: Box<dyn PreferenceStore>, save_sink: Box<dyn SaveSink>) -> Self {
        Self {
            theme: ThemeController::default(),
            notifications: NotificationCenter::new(),
            store,
            save_sink,
            clipboard: Clipboard::default(),
            drop_zones: Vec::new(),
            editors: Vec::new(),
            search_boxes: Vec::new(),
            submit_guards: Vec::new(),
            image_previews: Vec::new(),
            chat: None,
            composer: None,
        }
    }

    /// Runtime with the platform-default seams: the JSON preference file
    /// under the config dir (falling back to in-memory when the platform has
    /// no config dir) and the stubbed save endpoint.
    pub fn with_defaults() -> Self {
        let store: Box<dyn PreferenceStore> = match JsonPreferenceStore::default_path() {
            Some(path) => Box::new(JsonPreferenceStore::load(path)),
            None => Box::new(MemoryPreferenceStore::new()),
        };
        Self::new(store, Box::new(StubSaveSink))
    }

    /// The one-shot startup sequence, mirroring page load: install logging,
    /// sync the theme icon from the server-rendered attribute, then
    /// reconcile with the stored preference. Reconciliation runs the full
    /// toggle path, so its notification fires on startup when the stored
    /// theme disagrees with the rendered one.
    pub fn initialize(&mut self, theme_attribute: Option<&str>) {
        crate::logging::init();

        self.theme = ThemeController::from_attribute(theme_attribute);
        self.theme.initialize();
        self.theme
            .reconcile(self.store.as_mut(), &mut self.notifications);

        tracing::info!("File Drive UI initialized");
    }

    /// Drive every pending timer: search debounces, editor auto-saves,
    /// submit-guard releases, and notification expiry.
    pub fn poll(&mut self, now: Instant) -> PollOutcome {
        let mut outcome = PollOutcome::default();

        for search in &mut self.search_boxes {
            if search.poll(now) {
                outcome.search_submits += 1;
            }
        }
        for editor in &mut self.editors {
            if editor.poll(now, self.save_sink.as_mut(), &mut self.notifications) {
                outcome.saves += 1;
            }
        }
        for guard in &mut self.submit_guards {
            if guard.poll(now) {
                outcome.released_guards += 1;
            }
        }
        outcome.expired_notifications = self.notifications.sweep(now);

        outcome
    }

    /// Toggle the theme through the persisted preference, announcing the new
    /// mode.
    pub fn toggle_theme(&mut self) {
        self.theme
            .toggle(self.store.as_mut(), &mut self.notifications);
    }

    /// Copy text to the clipboard, reporting the outcome via a notification.
    pub fn copy_to_clipboard(&mut self, text: &str) -> bool {
        self.clipboard.copy(text, &mut self.notifications)
    }
}
