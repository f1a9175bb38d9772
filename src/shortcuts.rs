//! Global keyboard shortcut routing.
//!
//! Ctrl/Cmd+S submits the focused form (suppressing the browser save
//! dialog), Ctrl/Cmd+/ focuses the first search field, Escape clears a
//! focused search field. First match wins; no further conflict resolution.

/// A key as the router cares about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
}

/// A keydown with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    /// Ctrl+key, the common test shape.
    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            ctrl: true,
            meta: false,
        }
    }

    /// Cmd+key on macOS.
    pub fn meta(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: true,
        }
    }

    /// Either platform command modifier.
    pub fn is_command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// What the page around the router currently holds and focuses.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageFocus {
    /// Focus sits inside a form
    pub form_focused: bool,
    /// A search field exists on the page
    pub has_search: bool,
    /// The search field has focus
    pub search_focused: bool,
}

/// Action the page should perform in response to a shortcut. A routed action
/// implies the default browser handling is suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Submit the form containing focus
    SubmitFocusedForm,
    /// Focus the first search field
    FocusSearch,
    /// Clear and blur the focused search field
    ClearSearch,
}

/// Route a keydown to at most one action, first match wins.
pub fn route(event: &KeyEvent, focus: &PageFocus) -> Option<ShortcutAction> {
    if event.is_command() && event.key == Key::Char('s') && focus.form_focused {
        return Some(ShortcutAction::SubmitFocusedForm);
    }
    if event.is_command() && event.key == Key::Char('/') && focus.has_search {
        return Some(ShortcutAction::FocusSearch);
    }
    if event.key == Key::Escape && focus.search_focused {
        return Some(ShortcutAction::ClearSearch);
    }
    None
}
