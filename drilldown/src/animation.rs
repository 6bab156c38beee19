//! The animated half of a page transition.
//!
//! A transition has three phases: begin (input disabled, `Slide`
//! constructed), animate (callers sample `offset` while rendering),
//! commit (the navigator applies the deferred state change once
//! `is_complete` reports true). The slide itself is pure data; it
//! never mutates navigator state.

use std::time::{Duration, Instant};

use crate::transitions::{Easing, SlideConfig};

/// One in-flight horizontal slide of the page strip.
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    from: i16,
    to: i16,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Slide {
    pub fn begin(from: i16, to: i16, config: SlideConfig) -> Self {
        Self {
            from,
            to,
            start: Instant::now(),
            duration: config.duration,
            easing: config.easing,
        }
    }

    /// Raw progress in 0.0..=1.0, before easing.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated strip offset at `now`.
    pub fn offset(&self, now: Instant) -> i16 {
        let eased = self.easing.apply(self.progress(now));
        lerp_i16(self.from, self.to, eased)
    }

    /// The offset this slide lands on when committed.
    pub fn target(&self) -> i16 {
        self.to
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        now.duration_since(self.start) >= self.duration
    }
}

/// Linear interpolation for i16 values.
pub fn lerp_i16(from: i16, to: i16, t: f32) -> i16 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as i16
}
