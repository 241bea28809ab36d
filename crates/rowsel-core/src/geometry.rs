#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Everything here is one-dimensional: rows stack vertically and the page
//! scrolls vertically. Units are CSS pixels in document coordinates, so
//! fractional values are allowed.

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Top edge (offset from the document top).
    pub top: f64,
    /// Rendered outer height.
    pub height: f64,
}

impl Bounds {
    /// Create new bounds.
    #[inline]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Tolerance-aware visibility test.
    ///
    /// The element counts as visible when more than `tolerance` pixels of it
    /// reach into the viewport from either side:
    /// `bottom - tolerance > viewport.top && top + tolerance < viewport.bottom`.
    #[must_use]
    pub fn is_in_viewport(&self, viewport: &ViewportMetrics, tolerance: f64) -> bool {
        self.bottom() - tolerance > viewport.scroll_top && self.top + tolerance < viewport.bottom()
    }

    /// Where these bounds sit relative to the viewport, ignoring tolerance.
    #[must_use]
    pub fn placement(&self, viewport: &ViewportMetrics) -> Placement {
        if self.bottom() <= viewport.scroll_top {
            Placement::Above
        } else if self.top >= viewport.bottom() {
            Placement::Below
        } else {
            Placement::Overlapping
        }
    }
}

/// Current scroll position and visible height of the page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    /// Scroll offset of the viewport top.
    pub scroll_top: f64,
    /// Visible height.
    pub height: f64,
}

impl ViewportMetrics {
    /// Create viewport metrics.
    #[inline]
    pub const fn new(scroll_top: f64, height: f64) -> Self {
        Self { scroll_top, height }
    }

    /// Bottom edge of the visible area.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.scroll_top + self.height
    }
}

/// Position of an element relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Entirely above the visible area.
    Above,
    /// At least partly inside the visible area.
    Overlapping,
    /// Entirely below the visible area.
    Below,
}
