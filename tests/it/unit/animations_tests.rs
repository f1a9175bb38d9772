//! Unit tests for frame-driven animations.

use crate::helpers::{ms, t0};
use filedrive_ui::animations::{FadeIn, SlideDown, SmoothScroll, Timeline};

#[test]
fn test_timeline_progress_is_clamped() {
    let start = t0();
    let timeline = Timeline::new(start, ms(300));

    assert_eq!(timeline.progress_at(start), 0.0);
    let mid = timeline.progress_at(start + ms(150));
    assert!((mid - 0.5).abs() < 0.01, "expected ~0.5, got {mid}");
    assert_eq!(timeline.progress_at(start + ms(300)), 1.0);
    assert_eq!(timeline.progress_at(start + ms(10_000)), 1.0);
}

#[test]
fn test_zero_duration_timeline_is_finished_immediately() {
    let start = t0();
    let timeline = Timeline::new(start, ms(0));
    assert!(timeline.is_finished_at(start));
    assert_eq!(timeline.progress_at(start), 1.0);
}

#[test]
fn test_fade_in_opacity_tracks_progress() {
    let start = t0();
    let fade = FadeIn::new(start, ms(300));

    assert_eq!(fade.opacity_at(start), 0.0);
    let mid = fade.opacity_at(start + ms(150));
    assert!(mid > 0.4 && mid < 0.6);
    assert_eq!(fade.opacity_at(start + ms(300)), 1.0);
    assert!(fade.is_finished_at(start + ms(300)));
}

#[test]
fn test_slide_down_interpolates_height_then_releases() {
    let start = t0();
    let slide = SlideDown::new(start, ms(300), 240.0);

    assert_eq!(slide.height_at(start), Some(0.0));
    let mid = slide.height_at(start + ms(150)).unwrap();
    assert!(mid > 110.0 && mid < 130.0, "expected ~120, got {mid}");
    // On completion the pinned height is released back to natural layout.
    assert_eq!(slide.height_at(start + ms(300)), None);
}

#[test]
fn test_smooth_scroll_interpolates_position() {
    let start = t0();
    let scroll = SmoothScroll::new(start, ms(300), 400.0, 0.0);

    assert_eq!(scroll.position_at(start), 400.0);
    let mid = scroll.position_at(start + ms(150));
    assert!(mid > 180.0 && mid < 220.0, "expected ~200, got {mid}");
    assert_eq!(scroll.position_at(start + ms(300)), 0.0);
    assert!(scroll.is_finished_at(start + ms(300)));
}

#[test]
fn test_smooth_scroll_eases_in_and_out() {
    let start = t0();
    let scroll = SmoothScroll::new(start, ms(300), 400.0, 0.0);

    // Quarter way in, eased progress is 0.125, well behind linear's 0.25.
    let early = scroll.position_at(start + ms(75));
    assert!((early - 350.0).abs() < 1.0, "expected ~350, got {early}");
    // Mirrored at three quarters.
    let late = scroll.position_at(start + ms(225));
    assert!((late - 50.0).abs() < 1.0, "expected ~50, got {late}");
}
