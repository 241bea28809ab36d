#![forbid(unsafe_code)]

//! Geometry and scrolling collaborators.
//!
//! The controller never measures or scrolls anything itself. It asks a
//! [`Geometry`] for row bounds and the current viewport, and hands scroll
//! requests to a [`SmoothScroll`]. Both are implemented by the host.

use std::time::Duration;

use rowsel_core::geometry::{Bounds, ViewportMetrics};

/// Read-only layout queries.
pub trait Geometry {
    /// Document-space bounds of the row at `index`, if it is laid out.
    fn row_bounds(&self, index: usize) -> Option<Bounds>;

    /// Current scroll top and visible height of the page.
    fn viewport(&self) -> ViewportMetrics;
}

/// Fire-and-forget animated scrolling.
pub trait SmoothScroll {
    /// Scroll the page by `delta` pixels (positive scrolls down) over
    /// `duration`.
    fn scroll_by(&mut self, delta: f64, duration: Duration);
}

impl<G: Geometry + ?Sized> Geometry for &G {
    fn row_bounds(&self, index: usize) -> Option<Bounds> {
        (**self).row_bounds(index)
    }

    fn viewport(&self) -> ViewportMetrics {
        (**self).viewport()
    }
}

impl<C: SmoothScroll + ?Sized> SmoothScroll for &mut C {
    fn scroll_by(&mut self, delta: f64, duration: Duration) {
        (**self).scroll_by(delta, duration);
    }
}

/// Rows of identical height stacked under a fixed offset.
///
/// Models a table whose body starts at `body_top` in the document, e.g.
/// below a page header and the table head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformRowGeometry {
    /// Document offset of the first row.
    pub body_top: f64,
    /// Outer height of every row.
    pub row_height: f64,
    /// Rows currently laid out.
    pub row_count: usize,
    /// Current viewport.
    pub viewport: ViewportMetrics,
}

impl UniformRowGeometry {
    /// Create a layout with the viewport scrolled to the top.
    #[must_use]
    pub const fn new(body_top: f64, row_height: f64, row_count: usize, viewport_height: f64) -> Self {
        Self {
            body_top,
            row_height,
            row_count,
            viewport: ViewportMetrics::new(0.0, viewport_height),
        }
    }

    /// Set the scroll offset (builder pattern).
    #[must_use]
    pub const fn with_scroll_top(mut self, scroll_top: f64) -> Self {
        self.viewport.scroll_top = scroll_top;
        self
    }

    /// Move the viewport.
    pub fn set_scroll_top(&mut self, scroll_top: f64) {
        self.viewport.scroll_top = scroll_top;
    }

    /// Track a row count change.
    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
    }

    /// Largest meaningful scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        let content = self.body_top + self.row_height * self.row_count as f64;
        (content - self.viewport.height).max(0.0)
    }
}

impl Geometry for UniformRowGeometry {
    fn row_bounds(&self, index: usize) -> Option<Bounds> {
        (index < self.row_count)
            .then(|| Bounds::new(self.body_top + self.row_height * index as f64, self.row_height))
    }

    fn viewport(&self) -> ViewportMetrics {
        self.viewport
    }
}

/// One recorded `scroll_by` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    /// Requested delta.
    pub delta: f64,
    /// Requested duration.
    pub duration: Duration,
}

/// A [`SmoothScroll`] that only records requests.
///
/// Useful for hosts that batch scrolling into their own frame loop, and in
/// tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollLog {
    requests: Vec<ScrollRequest>,
}

impl ScrollLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            requests: Vec::new(),
        }
    }

    /// Requests seen so far.
    #[must_use]
    pub fn requests(&self) -> &[ScrollRequest] {
        &self.requests
    }

    /// Sum of every requested delta.
    #[must_use]
    pub fn total_delta(&self) -> f64 {
        self.requests.iter().map(|r| r.delta).sum()
    }

    /// Drain the recorded requests.
    pub fn take(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl SmoothScroll for ScrollLog {
    fn scroll_by(&mut self, delta: f64, duration: Duration) {
        self.requests.push(ScrollRequest { delta, duration });
    }
}
