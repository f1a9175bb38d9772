//! Unit tests for the theme controller and preference stores.

use crate::helpers::last_message;
use filedrive_ui::notifications::{NotificationCenter, Severity};
use filedrive_ui::theme::{
    JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore, Theme, ThemeController,
};

#[test]
fn test_theme_parse() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("solarized"), None);
}

#[test]
fn test_theme_icons() {
    assert_eq!(Theme::Light.icon(), "fa-moon");
    assert_eq!(Theme::Dark.icon(), "fa-sun");
}

#[test]
fn test_from_attribute_defaults_to_light() {
    assert_eq!(ThemeController::from_attribute(None).theme(), Theme::Light);
    assert_eq!(
        ThemeController::from_attribute(Some("garbage")).theme(),
        Theme::Light
    );
    assert_eq!(
        ThemeController::from_attribute(Some("dark")).theme(),
        Theme::Dark
    );
}

#[test]
fn test_toggle_updates_attribute_icon_store_and_notifies() {
    let mut controller = ThemeController::new(Theme::Light);
    let mut store = MemoryPreferenceStore::new();
    let mut center = NotificationCenter::new();

    let new_theme = controller.toggle(&mut store, &mut center);

    assert_eq!(new_theme, Theme::Dark);
    assert_eq!(controller.attribute(), "dark");
    assert_eq!(controller.icon(), "fa-sun");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(last_message(&center), Some("Switched to dark mode"));
    assert_eq!(center.notifications()[0].severity, Severity::Info);
}

#[test]
fn test_double_toggle_round_trips() {
    let mut controller = ThemeController::new(Theme::Light);
    let mut store = MemoryPreferenceStore::new();
    store.set("theme", "light").unwrap();
    let mut center = NotificationCenter::new();

    controller.toggle(&mut store, &mut center);
    controller.toggle(&mut store, &mut center);

    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.attribute(), "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn test_reconcile_toggles_toward_stored_value() {
    let mut controller = ThemeController::from_attribute(Some("light"));
    let mut store = MemoryPreferenceStore::new();
    store.set("theme", "dark").unwrap();
    let mut center = NotificationCenter::new();

    controller.reconcile(&mut store, &mut center);

    assert_eq!(controller.theme(), Theme::Dark);
    // The reconciliation runs the full toggle path, notification included.
    assert_eq!(center.count(), 1);
    assert_eq!(last_message(&center), Some("Switched to dark mode"));
}

#[test]
fn test_reconcile_is_silent_when_in_agreement() {
    let mut controller = ThemeController::from_attribute(Some("dark"));
    let mut store = MemoryPreferenceStore::new();
    store.set("theme", "dark").unwrap();
    let mut center = NotificationCenter::new();

    controller.reconcile(&mut store, &mut center);

    assert_eq!(controller.theme(), Theme::Dark);
    assert_eq!(center.count(), 0);
}

#[test]
fn test_reconcile_ignores_absent_or_garbage_preference() {
    let mut controller = ThemeController::new(Theme::Light);
    let mut store = MemoryPreferenceStore::new();
    let mut center = NotificationCenter::new();

    controller.reconcile(&mut store, &mut center);
    assert_eq!(controller.theme(), Theme::Light);

    store.set("theme", "solarized").unwrap();
    controller.reconcile(&mut store, &mut center);
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(center.count(), 0);
}

#[test]
fn test_json_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let mut store = JsonPreferenceStore::load(&path);
    assert_eq!(store.get("theme"), None);
    store.set("theme", "dark").unwrap();

    let reloaded = JsonPreferenceStore::load(&path);
    assert_eq!(reloaded.get("theme").as_deref(), Some("dark"));
}

#[test]
fn test_json_store_tolerates_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "{not json").unwrap();

    let store = JsonPreferenceStore::load(&path);
    assert_eq!(store.get("theme"), None);
}

#[test]
fn test_json_store_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deep").join("prefs.json");

    let mut store = JsonPreferenceStore::load(&path);
    store.set("theme", "light").unwrap();
    assert!(path.exists());
}
