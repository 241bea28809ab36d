#![forbid(unsafe_code)]

//! Tween-driven smooth scrolling.
//!
//! [`AnimatedScroll`] owns a scroll offset and animates it towards the
//! targets requested through [`SmoothScroll`]. The host advances it from its
//! frame clock with [`AnimatedScroll::tick`] and applies
//! [`AnimatedScroll::position`] to the real page.
//!
//! # Invariants
//!
//! 1. Requests accumulate: a new request retargets the running animation
//!    to its pending target plus the new delta, starting from the current
//!    interpolated position. No requested distance is lost.
//! 2. The offset stays within `0..=limit`.
//! 3. `tick` reports `true` exactly once per animation, on the tick that
//!    completes it.

use std::time::Duration;

use rowsel_core::animation::{Animation, ScrollTween};

use crate::viewport::SmoothScroll;

/// Scroll offset animated by [`ScrollTween`].
#[derive(Debug, Clone)]
pub struct AnimatedScroll {
    position: f64,
    limit: f64,
    tween: Option<ScrollTween>,
}

impl Default for AnimatedScroll {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl AnimatedScroll {
    /// Start at `position` with no upper limit.
    #[must_use]
    pub fn new(position: f64) -> Self {
        Self {
            position: position.max(0.0),
            limit: f64::INFINITY,
            tween: None,
        }
    }

    /// Cap the scroll offset (builder pattern).
    #[must_use]
    pub fn with_limit(mut self, limit: f64) -> Self {
        self.set_limit(limit);
        self
    }

    /// Change the scroll cap, e.g. after rows were added.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.position = self.clamp(self.position);
    }

    /// Current offset, interpolated when an animation is running.
    #[must_use]
    pub fn position(&self) -> f64 {
        match &self.tween {
            Some(tween) => self.clamp(tween.position()),
            None => self.position,
        }
    }

    /// Offset the page settles at once the running animation completes.
    #[must_use]
    pub fn target(&self) -> f64 {
        match &self.tween {
            Some(tween) => self.clamp(tween.target()),
            None => self.position,
        }
    }

    /// Whether an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Jump to `position` immediately, cancelling any animation.
    pub fn jump_to(&mut self, position: f64) {
        self.tween = None;
        self.position = self.clamp(position);
    }

    /// Advance the running animation by `dt`.
    ///
    /// Returns `true` on the tick that completes it.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        tween.tick(dt);
        if !tween.is_complete() {
            return false;
        }
        let settled = tween.target();
        self.tween = None;
        self.position = self.clamp(settled);
        true
    }

    fn clamp(&self, position: f64) -> f64 {
        position.clamp(0.0, self.limit)
    }
}

impl SmoothScroll for AnimatedScroll {
    fn scroll_by(&mut self, delta: f64, duration: Duration) {
        let from = self.position();
        let target = self.clamp(self.target() + delta);
        self.position = from;
        if duration.is_zero() {
            self.tween = None;
            self.position = target;
        } else {
            self.tween = Some(ScrollTween::new(from, target - from, duration));
        }
    }
}
