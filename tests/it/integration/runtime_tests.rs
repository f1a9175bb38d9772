//! UiRuntime composition: the startup sequence and the poll loop.

use crate::helpers::{RecordingSaveSink, last_message, ms, t0};
use filedrive_ui::UiRuntime;
use filedrive_ui::autosave::AutoSaveController;
use filedrive_ui::clipboard::{Clipboard, MemoryClipboard};
use filedrive_ui::forms::SubmitGuard;
use filedrive_ui::search::SearchBox;
use filedrive_ui::theme::{MemoryPreferenceStore, PreferenceStore, Theme};

fn runtime_with_store(store: MemoryPreferenceStore) -> UiRuntime {
    UiRuntime::new(Box::new(store), Box::new(RecordingSaveSink::new()))
}

#[test]
fn test_startup_reconciles_toward_stored_theme() {
    let mut store = MemoryPreferenceStore::new();
    store.set("theme", "dark").unwrap();
    let mut runtime = runtime_with_store(store);

    runtime.initialize(Some("light"));

    assert_eq!(runtime.theme.theme(), Theme::Dark);
    assert_eq!(runtime.theme.icon(), "fa-sun");
    // The reconciliation toggle announces itself even on page load.
    assert_eq!(runtime.notifications.count(), 1);
    assert_eq!(
        last_message(&runtime.notifications),
        Some("Switched to dark mode")
    );
}

#[test]
fn test_startup_is_silent_when_store_agrees() {
    let mut store = MemoryPreferenceStore::new();
    store.set("theme", "light").unwrap();
    let mut runtime = runtime_with_store(store);

    runtime.initialize(Some("light"));

    assert_eq!(runtime.theme.theme(), Theme::Light);
    assert_eq!(runtime.notifications.count(), 0);
}

#[test]
fn test_toggle_theme_persists_preference() {
    let mut runtime = runtime_with_store(MemoryPreferenceStore::new());
    runtime.initialize(Some("light"));

    runtime.toggle_theme();
    assert_eq!(runtime.theme.theme(), Theme::Dark);
    assert_eq!(runtime.store.get("theme").as_deref(), Some("dark"));

    runtime.toggle_theme();
    assert_eq!(runtime.theme.theme(), Theme::Light);
    assert_eq!(runtime.store.get("theme").as_deref(), Some("light"));
}

#[test]
fn test_poll_drives_every_pending_timer() {
    let start = t0();
    let sink = RecordingSaveSink::new();
    let saves = sink.saves();
    let mut runtime = UiRuntime::new(Box::new(MemoryPreferenceStore::new()), Box::new(sink));
    runtime.initialize(Some("light"));

    runtime.search_boxes.push(SearchBox::new());
    runtime.editors.push(AutoSaveController::new());
    runtime.submit_guards.push(SubmitGuard::new());

    runtime.search_boxes[0].input("report", start);
    runtime.editors[0].input("draft", start);
    runtime.submit_guards[0].submit(start);

    let early = runtime.poll(start + ms(100));
    assert_eq!(early.search_submits, 0);
    assert_eq!(early.saves, 0);
    assert_eq!(early.released_guards, 0);

    let outcome = runtime.poll(start + ms(5000));
    assert_eq!(outcome.search_submits, 1);
    assert_eq!(outcome.saves, 1);
    assert_eq!(outcome.released_guards, 1);
    assert_eq!(saves.borrow().as_slice(), ["draft".to_string()]);
    assert!(!runtime.submit_guards[0].is_disabled());
}

#[test]
fn test_poll_sweeps_expired_notifications() {
    let start = t0();
    let mut runtime = runtime_with_store(MemoryPreferenceStore::new());
    runtime.initialize(Some("light"));

    runtime.notifications.show_with(
        "short lived",
        filedrive_ui::Severity::Info,
        ms(1000),
        start,
    );
    assert_eq!(runtime.poll(start + ms(500)).expired_notifications, 0);
    assert_eq!(runtime.poll(start + ms(1400)).expired_notifications, 1);
    assert_eq!(runtime.notifications.count(), 0);
}

#[test]
fn test_copy_to_clipboard_reports_via_notification() {
    let mut runtime = runtime_with_store(MemoryPreferenceStore::new());
    runtime.initialize(Some("light"));
    runtime.clipboard = Clipboard::new(None, Box::new(MemoryClipboard::new()));

    assert!(runtime.copy_to_clipboard("https://drive.example/file/42"));
    assert_eq!(
        last_message(&runtime.notifications),
        Some("Copied to clipboard")
    );
}
