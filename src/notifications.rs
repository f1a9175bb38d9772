//! Transient corner notifications.
//!
//! A [`Notification`] lives through three phases: visible for its display
//! duration, then a fixed 300 ms exit animation, then eligible for removal.
//! [`NotificationCenter::sweep`] detaches expired and manually dismissed
//! banners; dismissal racing removal is harmless by construction (dismissing
//! an unknown id is a no-op).

use crate::constants::{NOTIFICATION_DURATION, NOTIFICATION_EXIT};
use std::time::{Duration, Instant};

/// Semantic category of a notification, controlling its color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Danger,
    Warning,
    #[default]
    Info,
    Primary,
}

impl Severity {
    /// Icon glyph name shown next to the message.
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Danger => "exclamation-triangle",
            Severity::Warning => "exclamation-circle",
            Severity::Info | Severity::Primary => "info-circle",
        }
    }

    /// Style class applied to the banner.
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Danger => "alert-danger",
            Severity::Warning => "alert-warning",
            Severity::Info => "alert-info",
            Severity::Primary => "alert-primary",
        }
    }
}

/// Where a notification is in its lifecycle at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Fully visible
    Active,
    /// Running the exit animation
    Leaving,
    /// Eligible for removal by the next sweep
    Expired,
}

/// A single banner fixed to the viewport corner.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Identifier assigned by the center on push
    pub id: u64,
    /// Message text
    pub message: String,
    /// Severity class
    pub severity: Severity,
    /// Display duration before the exit animation starts
    pub duration: Duration,
    /// When the banner was created
    pub created_at: Instant,
    /// Set when the user dismissed the banner manually
    pub dismissed: bool,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity, now: Instant) -> Self {
        Self {
            id: 0,
            message: message.into(),
            severity,
            duration: NOTIFICATION_DURATION,
            created_at: now,
            dismissed: false,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success, Instant::now())
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Danger, Instant::now())
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning, Instant::now())
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info, Instant::now())
    }

    /// Override the display duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Lifecycle phase at `now`. A dismissed banner is immediately expired.
    pub fn phase_at(&self, now: Instant) -> NotificationPhase {
        if self.dismissed {
            return NotificationPhase::Expired;
        }
        let elapsed = now.saturating_duration_since(self.created_at);
        if elapsed < self.duration {
            NotificationPhase::Active
        } else if elapsed < self.duration + NOTIFICATION_EXIT {
            NotificationPhase::Leaving
        } else {
            NotificationPhase::Expired
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.phase_at(now) == NotificationPhase::Expired
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Opacity during the exit animation: 1.0 while active, fading linearly
    /// to 0.0 across the exit window.
    pub fn opacity_at(&self, now: Instant) -> f32 {
        match self.phase_at(now) {
            NotificationPhase::Active => 1.0,
            NotificationPhase::Expired => 0.0,
            NotificationPhase::Leaving => {
                let elapsed = now.saturating_duration_since(self.created_at);
                let into_exit = elapsed - self.duration;
                1.0 - into_exit.as_secs_f32() / NOTIFICATION_EXIT.as_secs_f32()
            }
        }
    }
}

/// Owns the live banners and assigns their ids.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a banner, assigning its id.
    pub fn push(&mut self, mut notification: Notification) -> u64 {
        self.next_id += 1;
        notification.id = self.next_id;
        tracing::debug!(
            id = notification.id,
            severity = ?notification.severity,
            "showing notification: {}",
            notification.message
        );
        self.notifications.push(notification);
        self.next_id
    }

    /// Show a banner with the default duration.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.push(Notification::new(message, severity, Instant::now()))
    }

    /// Show a banner with an explicit duration and creation time.
    pub fn show_with(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
        now: Instant,
    ) -> u64 {
        self.push(Notification::new(message, severity, now).with_duration(duration))
    }

    /// Mark a banner as manually dismissed. Unknown ids are ignored so that
    /// dismissal racing auto-removal cannot fail.
    pub fn dismiss(&mut self, id: u64) {
        if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
            notification.dismissed = true;
        }
    }

    /// Remove expired banners, returning how many were detached.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let before = self.notifications.len();
        self.notifications.retain(|n| !n.is_expired_at(now));
        before - self.notifications.len()
    }

    pub fn count(&self) -> usize {
        self.notifications.len()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Banners currently visible (active or leaving) at `now`.
    pub fn visible_at(&self, now: Instant) -> impl Iterator<Item = &Notification> {
        self.notifications
            .iter()
            .filter(move |n| !n.is_expired_at(now))
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}
