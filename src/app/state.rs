//! Application state - the UiRuntime struct definition.

use crate::autosave::{AutoSaveController, SaveSink};
use crate::chat::{ChatView, MessageComposer};
use crate::clipboard::Clipboard;
use crate::dropzone::DropZone;
use crate::forms::SubmitGuard;
use crate::notifications::NotificationCenter;
use crate::preview::ImagePreview;
use crate::search::SearchBox;
use crate::theme::{PreferenceStore, ThemeController};

/// Composition root for the page's behavior controllers.
///
/// This is the explicit replacement for the page-global function registry:
/// one named handle per responsibility, wired by [`UiRuntime::initialize`]
/// instead of load-order side effects. Repeated page elements (drop zones,
/// editors, forms) get one controller instance each; singletons are fields.
pub struct UiRuntime {
    /// Theme attribute, icon glyph, and persisted preference
    pub theme: ThemeController,
    /// Live corner banners
    pub notifications: NotificationCenter,
    /// Client-storage seam for preferences
    pub store: Box<dyn PreferenceStore>,
    /// Save-endpoint seam for editor auto-save
    pub save_sink: Box<dyn SaveSink>,
    /// Copy-to-clipboard with fallback
    pub clipboard: Clipboard,
    /// One per `.file-drop-zone` on the page
    pub drop_zones: Vec<DropZone>,
    /// One per `.code-editor` region
    pub editors: Vec<AutoSaveController>,
    /// One per search input
    pub search_boxes: Vec<SearchBox>,
    /// One per form's submit control
    pub submit_guards: Vec<SubmitGuard>,
    /// One per image-accepting file input
    pub image_previews: Vec<ImagePreview>,
    /// The chat message list, when the page has one
    pub chat: Option<ChatView>,
    /// The chat composer, when the page has one
    pub composer: Option<MessageComposer>,
}
