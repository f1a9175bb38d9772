//! Chat view: message-list auto-scroll and the auto-growing composer.
//!
//! The list re-anchors to the bottom on load and on every append. There is
//! deliberately no "stick only if already at bottom" logic: a user scrolled
//! up to read history gets pulled back down on the next message. That fights
//! the reader, but upstream intent is ambiguous, so the behavior is kept.

use crate::constants::COMPOSER_MAX_HEIGHT;
use crate::shortcuts::{Key, KeyEvent};

/// Scroll geometry of one scrollable region.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollRegion {
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub viewport_height: f32,
}

impl ScrollRegion {
    pub fn new(scroll_height: f32, viewport_height: f32) -> Self {
        Self {
            scroll_top: 0.0,
            scroll_height,
            viewport_height,
        }
    }

    pub fn max_scroll_top(&self) -> f32 {
        (self.scroll_height - self.viewport_height).max(0.0)
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_top = self.max_scroll_top();
    }

    /// User scroll, clamped to the valid range.
    pub fn scroll_to(&mut self, top: f32) {
        self.scroll_top = top.clamp(0.0, self.max_scroll_top());
    }

    pub fn is_at_bottom(&self) -> bool {
        self.scroll_top >= self.max_scroll_top()
    }
}

/// The message list, anchored to its bottom.
#[derive(Debug, Default)]
pub struct ChatView {
    scroll: ScrollRegion,
    message_count: usize,
}

impl ChatView {
    /// Attach to a message list and anchor it to the bottom, as on page load.
    pub fn new(scroll: ScrollRegion) -> Self {
        let mut view = Self {
            scroll,
            message_count: 0,
        };
        view.scroll.scroll_to_bottom();
        view
    }

    /// A message was appended: grow the content and re-anchor to the bottom
    /// regardless of where the user had scrolled.
    pub fn append_message(&mut self, height: f32) {
        self.message_count += 1;
        self.scroll.scroll_height += height;
        self.scroll.scroll_to_bottom();
    }

    pub fn scroll_to(&mut self, top: f32) {
        self.scroll.scroll_to(top);
    }

    pub fn scroll(&self) -> &ScrollRegion {
        &self.scroll
    }

    pub fn message_count(&self) -> usize {
        self.message_count
    }
}

/// Action the composer requests from its enclosing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerAction {
    Submit,
}

/// The message textbox, growing with its content up to a fixed cap.
#[derive(Debug, Default)]
pub struct MessageComposer {
    content: String,
    height: f32,
}

impl MessageComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input: take the new content and the measured content height, growing
    /// the box up to the 120 px cap.
    pub fn input(&mut self, content: impl Into<String>, content_height: f32) {
        self.content = content.into();
        self.height = content_height.min(COMPOSER_MAX_HEIGHT);
    }

    /// Ctrl/Cmd+Enter submits the enclosing form.
    pub fn key(&self, event: &KeyEvent) -> Option<ComposerAction> {
        if event.is_command() && event.key == Key::Enter {
            Some(ComposerAction::Submit)
        } else {
            None
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}
