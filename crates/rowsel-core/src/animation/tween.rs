#![forbid(unsafe_code)]

//! Eased interpolation of a scroll offset.
//!
//! A [`ScrollTween`] moves a scalar from `from` to `from + delta` over a
//! fixed duration. It implements [`Animation`], where `value()` is the eased
//! progress and [`ScrollTween::position`] is the interpolated offset.
//!
//! # Failure Modes
//!
//! - Zero duration: the tween is complete immediately and sits at its target.
//! - Huge `dt`: progress is clamped, the tween simply completes.

use std::time::Duration;

use super::{Animation, EasingFn, swing};

/// Scroll offset interpolation.
#[derive(Debug, Clone, Copy)]
pub struct ScrollTween {
    from: f64,
    delta: f64,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFn,
}

impl ScrollTween {
    /// Animate from `from` by `delta` over `duration` using [`swing`].
    #[must_use]
    pub fn new(from: f64, delta: f64, duration: Duration) -> Self {
        Self {
            from,
            delta,
            duration,
            elapsed: Duration::ZERO,
            easing: swing,
        }
    }

    /// Replace the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Starting offset.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.from
    }

    /// Final offset once complete.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.from + self.delta
    }

    /// Interpolated offset at the current time.
    #[must_use]
    pub fn position(&self) -> f64 {
        if self.is_complete() {
            return self.target();
        }
        self.from + self.delta * f64::from(self.value())
    }

    fn linear_progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
    }
}

impl Animation for ScrollTween {
    fn tick(&mut self, dt: Duration) {
        if self.is_complete() {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.linear_progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::linear;

    const MS_150: Duration = Duration::from_millis(150);

    #[test]
    fn starts_at_from() {
        let tween = ScrollTween::new(100.0, 40.0, MS_150);
        assert_eq!(tween.position(), 100.0);
        assert!(!tween.is_complete());
    }

    #[test]
    fn reaches_target() {
        let mut tween = ScrollTween::new(100.0, 40.0, MS_150);
        for _ in 0..10 {
            tween.tick(Duration::from_millis(16));
        }
        assert!(tween.is_complete());
        assert_eq!(tween.position(), 140.0);
        assert_eq!(tween.target(), 140.0);
    }

    #[test]
    fn negative_delta_scrolls_up() {
        let mut tween = ScrollTween::new(100.0, -40.0, MS_150).easing(linear);
        tween.tick(Duration::from_millis(75));
        assert!((tween.position() - 80.0).abs() < 1e-3);
    }

    #[test]
    fn zero_duration_is_immediately_complete() {
        let tween = ScrollTween::new(0.0, 25.0, Duration::ZERO);
        assert!(tween.is_complete());
        assert_eq!(tween.position(), 25.0);
    }

    #[test]
    fn tick_after_completion_is_noop() {
        let mut tween = ScrollTween::new(0.0, 10.0, MS_150);
        tween.tick(Duration::from_secs(5));
        tween.tick(Duration::from_secs(5));
        assert_eq!(tween.position(), 10.0);
    }

    #[test]
    fn reset_rewinds() {
        let mut tween = ScrollTween::new(5.0, 10.0, MS_150);
        tween.tick(MS_150);
        tween.reset();
        assert_eq!(tween.position(), 5.0);
    }
}
