use std::time::{Duration, Instant};

use drilldown::animation::{lerp_i16, Slide};
use drilldown::{Easing, SlideConfig};

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in() {
    // EaseIn: t * t (quadratic)
    assert_eq!(Easing::EaseIn.apply(0.0), 0.0);
    assert_eq!(Easing::EaseIn.apply(1.0), 1.0);
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
}

#[test]
fn test_easing_ease_out() {
    // EaseOut: 1 - (1-t)^2 (quadratic, fast start)
    assert_eq!(Easing::EaseOut.apply(0.0), 0.0);
    assert_eq!(Easing::EaseOut.apply(1.0), 1.0);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
}

#[test]
fn test_easing_ease_in_out() {
    assert_eq!(Easing::EaseInOut.apply(0.0), 0.0);
    assert_eq!(Easing::EaseInOut.apply(1.0), 1.0);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    // First half is slower (ease in)
    assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    // Second half is faster (ease out)
    assert!(Easing::EaseInOut.apply(0.75) > 0.75);
}

#[test]
fn test_easing_boundaries() {
    // All easing functions should map 0->0 and 1->1
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        let mut prev = 0.0;
        for i in 1..=10 {
            let t = i as f32 / 10.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

// =============================================================================
// SlideConfig Tests
// =============================================================================

#[test]
fn test_slide_config_new() {
    let config = SlideConfig::new(Duration::from_millis(300), Easing::EaseOut);
    assert_eq!(config.duration, Duration::from_millis(300));
    assert_eq!(config.easing, Easing::EaseOut);
}

// =============================================================================
// Slide Tests
// =============================================================================

#[test]
fn test_slide_zero_duration_completes_instantly() {
    let slide = Slide::begin(40, 0, SlideConfig::new(Duration::ZERO, Easing::Linear));
    let now = Instant::now();

    assert!(slide.is_complete(now));
    assert_eq!(slide.offset(now), 0);
    assert_eq!(slide.target(), 0);
}

#[test]
fn test_slide_in_flight_stays_between_endpoints() {
    let slide = Slide::begin(
        40,
        -40,
        SlideConfig::new(Duration::from_secs(3600), Easing::Linear),
    );
    let now = Instant::now();

    assert!(!slide.is_complete(now));
    let offset = slide.offset(now);
    assert!(offset <= 40 && offset >= -40, "offset {offset} out of range");
    // Barely started: still near the origin
    assert!(offset > 30, "offset {offset} moved too far at t≈0");
}

#[test]
fn test_slide_progress_saturates_at_one() {
    let slide = Slide::begin(0, -40, SlideConfig::new(Duration::ZERO, Easing::EaseOut));
    let now = Instant::now();

    assert_eq!(slide.progress(now), 1.0);
    assert_eq!(slide.offset(now), slide.target());
}

// =============================================================================
// Interpolation Tests
// =============================================================================

#[test]
fn test_lerp_i16_endpoints() {
    assert_eq!(lerp_i16(-40, 40, 0.0), -40);
    assert_eq!(lerp_i16(-40, 40, 1.0), 40);
    assert_eq!(lerp_i16(-40, 40, 0.5), 0);
}

#[test]
fn test_lerp_i16_rounds() {
    assert_eq!(lerp_i16(0, 3, 0.5), 2); // 1.5 rounds away from zero
    assert_eq!(lerp_i16(0, -3, 0.5), -2);
}
