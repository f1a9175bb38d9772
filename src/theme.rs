//! Theme toggling with a persisted preference.
//!
//! The controller owns the rendition of the page's `data-theme` attribute and
//! the header icon glyph. The preference store is the client-storage seam;
//! the JSON-backed implementation persists under the platform config
//! directory, and an in-memory implementation backs tests.
//!
//! A real deployment would also sync the preference to the server; that
//! endpoint belongs to an external collaborator and is not called here.

use crate::constants::THEME_STORAGE_KEY;
use crate::notifications::{NotificationCenter, Severity};
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The two-valued theme enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored or attribute value. Unknown values are rejected rather
    /// than defaulted so callers can distinguish "absent" from "garbage".
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn flipped(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Header icon glyph: light mode offers the moon, dark mode the sun.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }
}

/// Client-storage seam: a string key-value store for UI preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-file-backed store persisting a flat string map.
#[derive(Debug)]
pub struct JsonPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonPreferenceStore {
    /// Load the store from `path`. A missing file yields an empty store; a
    /// corrupt file is logged and treated as empty.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!("corrupt preference file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, values }
    }

    /// Default location under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("filedrive").join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// Owns the current theme and the header icon glyph.
#[derive(Debug)]
pub struct ThemeController {
    current: Theme,
    icon: &'static str,
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemeController {
    pub fn new(initial: Theme) -> Self {
        Self {
            current: initial,
            icon: initial.icon(),
        }
    }

    /// Build from the server-rendered root attribute; absent or unparseable
    /// values default to light.
    pub fn from_attribute(attribute: Option<&str>) -> Self {
        let initial = attribute.and_then(Theme::parse).unwrap_or_default();
        Self::new(initial)
    }

    /// Synchronize the icon glyph with the current theme.
    pub fn initialize(&mut self) {
        self.icon = self.current.icon();
    }

    /// Flip the theme, update the icon, persist the preference, and announce
    /// the new mode with an info notification.
    pub fn toggle(
        &mut self,
        store: &mut dyn PreferenceStore,
        notifications: &mut NotificationCenter,
    ) -> Theme {
        self.current = self.current.flipped();
        self.icon = self.current.icon();

        if let Err(e) = store.set(THEME_STORAGE_KEY, self.current.as_str()) {
            // Preference loss is cosmetic; the session keeps the new theme.
            tracing::warn!("failed to persist theme preference: {e:#}");
        }

        notifications.show(
            format!("Switched to {} mode", self.current.as_str()),
            Severity::Info,
        );
        self.current
    }

    /// Page-load reconciliation: if the stored preference disagrees with the
    /// server-rendered theme, run the full toggle path once. The toggle's
    /// notification fires during this silent reconciliation too; intent is
    /// ambiguous upstream, so the behavior is kept as shipped.
    pub fn reconcile(
        &mut self,
        store: &mut dyn PreferenceStore,
        notifications: &mut NotificationCenter,
    ) {
        let saved = store.get(THEME_STORAGE_KEY).and_then(|v| Theme::parse(&v));
        if let Some(saved) = saved {
            if saved != self.current {
                tracing::debug!(
                    "stored theme {} differs from rendered {}, reconciling",
                    saved.as_str(),
                    self.current.as_str()
                );
                self.toggle(store, notifications);
            }
        }
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    /// The `data-theme` attribute value this controller projects.
    pub fn attribute(&self) -> &'static str {
        self.current.as_str()
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }
}
