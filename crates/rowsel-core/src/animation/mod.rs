#![forbid(unsafe_code)]

//! Time-based animation primitives.
//!
//! The selection controller only ever animates one thing: the page scroll
//! offset when a newly focused row leaves the viewport. The primitives are
//! still kept generic so hosts can drive them from whatever frame clock they
//! have.
//!
//! # Invariants
//!
//! 1. `value()` is a normalized progress in [0.0, 1.0].
//! 2. `tick()` after completion is a no-op.
//! 3. `reset()` returns the animation to its initial state.

use std::time::Duration;

pub mod tween;

pub use tween::ScrollTween;

/// A value that evolves over time.
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Normalized progress in [0.0, 1.0], after easing.
    fn value(&self) -> f32;

    /// Restart from the beginning.
    fn reset(&mut self);
}

/// An easing curve mapping linear progress in [0, 1] to eased progress.
pub type EasingFn = fn(f32) -> f32;

/// No easing.
#[must_use]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in.
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Cosine ease-in-out, the classic page-scroll "swing" curve.
#[must_use]
pub fn swing(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    0.5 - (t * std::f32::consts::PI).cos() / 2.0
}
