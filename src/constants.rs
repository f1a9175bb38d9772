//! Behavior-layer constants.
//!
//! Centralizes timing values and upload limits so the controllers and their
//! tests agree on a single source of truth.

use std::time::Duration;

// ============================================================================
// Timing
// ============================================================================

/// Quiet period before a search box auto-submits its form
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Quiet period before an editor auto-saves
pub const AUTO_SAVE_DEBOUNCE: Duration = Duration::from_millis(3000);

/// How long a submit control stays disabled after a submission
pub const SUBMIT_GUARD_TIMEOUT: Duration = Duration::from_millis(5000);

/// Default notification display duration
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

/// Grace period for the notification exit animation before detachment
pub const NOTIFICATION_EXIT: Duration = Duration::from_millis(300);

/// Display duration for the auto-save success notification
pub const AUTO_SAVE_TOAST_DURATION: Duration = Duration::from_millis(2000);

/// Default duration for fade/slide animations
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(300);

// ============================================================================
// Upload Policy
// ============================================================================

/// Maximum accepted upload size in bytes (16 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Minimum query length (other than empty) that triggers search auto-submit
pub const MIN_SEARCH_QUERY_LEN: usize = 2;

// ============================================================================
// Chat
// ============================================================================

/// Height cap for the auto-growing message composer, in pixels
pub const COMPOSER_MAX_HEIGHT: f32 = 120.0;

// ============================================================================
// Persistence
// ============================================================================

/// Preference-store key holding the theme name
pub const THEME_STORAGE_KEY: &str = "theme";
