//! Client-side UI behavior layer for the File Drive file manager.
//!
//! Each page behavior lives in its own module as an independently testable
//! controller struct with component-local state:
//!
//! - `theme`: light/dark toggle with persisted preference
//! - `notifications`: transient corner banners with auto-dismiss
//! - `upload`: file size/type validation against the upload policy
//! - `dropzone`: drag-and-drop file intake feeding the upload validator
//! - `search`: debounced search-as-you-type auto-submission
//! - `autosave`: debounced editor auto-save with an unsaved-changes badge
//! - `forms`: anti-double-submit guard for form controls
//! - `shortcuts`: global keyboard shortcut routing
//! - `chat`: message list auto-scroll and composer behavior
//! - `preview`: inline image preview cards
//! - `progress`: upload progress indicator state
//! - `clipboard`: copy-to-clipboard with fallback
//! - `timing`: cancellable debounce/throttle primitives
//! - `animations`: frame-driven fade/slide/scroll interpolation
//!
//! Controllers are composed by [`app::UiRuntime`], which owns the one-shot
//! initialization sequence and the timer poll loop. Deferred work is modeled
//! as `Instant` deadlines inspected by `poll(now)`, so every timer-driven
//! behavior is deterministic under test.

pub mod animations;
pub mod app;
pub mod autosave;
pub mod chat;
pub mod clipboard;
pub mod constants;
pub mod dropzone;
pub mod forms;
pub mod logging;
pub mod notifications;
pub mod preview;
pub mod progress;
pub mod search;
pub mod shortcuts;
pub mod theme;
pub mod timing;
pub mod upload;

pub use app::UiRuntime;
pub use notifications::{Notification, NotificationCenter, Severity};
pub use theme::{Theme, ThemeController};
pub use upload::FileMetadata;
