//! Frame-driven animations: linear interpolation of a value over a fixed
//! duration, sampled once per frame until progress reaches 1.0.

use crate::constants::DEFAULT_ANIMATION_DURATION;
use std::time::{Duration, Instant};

/// Shared clock for an animation: a start instant and a duration.
#[derive(Debug, Clone, Copy)]
pub struct Timeline {
    start: Instant,
    duration: Duration,
}

impl Timeline {
    pub fn new(start: Instant, duration: Duration) -> Self {
        Self { start, duration }
    }

    pub fn starting_now(duration: Duration) -> Self {
        Self::new(Instant::now(), duration)
    }

    /// Progress in 0.0..=1.0 at `now`.
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// True once progress reached 1.0; the per-frame callback stops
    /// rescheduling at this point.
    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }
}

/// Fade an element in from transparent to opaque.
#[derive(Debug, Clone, Copy)]
pub struct FadeIn {
    timeline: Timeline,
}

impl FadeIn {
    pub fn new(start: Instant, duration: Duration) -> Self {
        Self {
            timeline: Timeline::new(start, duration),
        }
    }

    pub fn with_default_duration(start: Instant) -> Self {
        Self::new(start, DEFAULT_ANIMATION_DURATION)
    }

    pub fn opacity_at(&self, now: Instant) -> f32 {
        self.timeline.progress_at(now)
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.timeline.is_finished_at(now)
    }
}

/// Slide an element open from zero height to its natural height. On
/// completion the inline height is released back to automatic layout.
#[derive(Debug, Clone, Copy)]
pub struct SlideDown {
    timeline: Timeline,
    target_height: f32,
}

impl SlideDown {
    pub fn new(start: Instant, duration: Duration, target_height: f32) -> Self {
        Self {
            timeline: Timeline::new(start, duration),
            target_height,
        }
    }

    /// The pinned height at `now`, or `None` once the animation has finished
    /// and the element returns to natural layout.
    pub fn height_at(&self, now: Instant) -> Option<f32> {
        if self.timeline.is_finished_at(now) {
            None
        } else {
            Some(self.target_height * self.timeline.progress_at(now))
        }
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.timeline.is_finished_at(now)
    }
}

/// Smooth scroll of a region toward an anchor target, eased in and out so
/// the motion accelerates from rest and settles at the target.
#[derive(Debug, Clone, Copy)]
pub struct SmoothScroll {
    timeline: Timeline,
    from: f32,
    to: f32,
}

impl SmoothScroll {
    pub fn new(start: Instant, duration: Duration, from: f32, to: f32) -> Self {
        Self {
            timeline: Timeline::new(start, duration),
            from,
            to,
        }
    }

    /// Quadratic ease-in-out over 0.0..=1.0.
    fn ease(t: f32) -> f32 {
        if t < 0.5 {
            2.0 * t * t
        } else {
            1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
        }
    }

    pub fn position_at(&self, now: Instant) -> f32 {
        let t = Self::ease(self.timeline.progress_at(now));
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.timeline.is_finished_at(now)
    }
}
