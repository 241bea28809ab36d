#![forbid(unsafe_code)]

//! Selection and focus transitions.
//!
//! [`RowSelection`] implements every state transition of the row selection
//! controller as a method over a live [`RowSequence`]. Each method scans the
//! sequence it is given; nothing is cached between calls.
//!
//! # Invariants
//!
//! 1. After every operation each row's checkbox equals its `SELECTED` flag.
//! 2. At most one row carries `FOCUSED`.
//! 3. Right after [`RowSelection::range_select`] the selection is contiguous.
//! 4. Operations are total: an unmet precondition (no such row, no adjacent
//!    row, nothing focused) leaves the sequence untouched.
//!
//! # Failure Modes
//!
//! - Stale indices (rows removed since the event was produced) are treated as
//!   missing rows.
//! - Rows without layout (`Geometry::row_bounds` is `None`) are never
//!   scrolled to and never toggled by ctrl+Space.

use rowsel_core::geometry::{Bounds, Placement};

use crate::config::SelectionConfig;
use crate::row::{Direction, RowFlags, RowSequence};
use crate::viewport::{Geometry, SmoothScroll};

/// Result of one selection operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub struct Outcome {
    /// Whether any flag or checkbox was written.
    pub changed: bool,
    /// Row the operation moved keyboard navigation to, if any.
    pub reveal: Option<Reveal>,
}

impl Outcome {
    /// Nothing happened.
    pub const NONE: Self = Self {
        changed: false,
        reveal: None,
    };
}

/// A row that should be scrolled into view, and the direction it was
/// reached from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reveal {
    /// Row index.
    pub row: usize,
    /// Navigation direction.
    pub direction: Direction,
}

/// Selection operations parameterised by a [`SelectionConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RowSelection {
    config: SelectionConfig,
}

impl RowSelection {
    /// Create with the given configuration.
    ///
    /// Out-of-range values are repaired with [`SelectionConfig::validated`].
    #[must_use]
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            config: config.validated(),
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Replace the configuration, repairing out-of-range values.
    pub fn set_config(&mut self, config: SelectionConfig) {
        self.config = config.validated();
    }

    /// Select `row` alone.
    ///
    /// Every other row loses `SELECTED` and `FOCUSED`. The clicked row's own
    /// focus is left as it was. Idempotent.
    pub fn plain_select<S: RowSequence + ?Sized>(&self, rows: &mut S, row: usize) -> Outcome {
        if row >= rows.len() {
            return Outcome::NONE;
        }
        let mut w = self.writer(rows);
        w.select(row);
        for i in (0..w.len()).filter(|&i| i != row) {
            w.clear(i);
        }
        w.finish("plain_select", Some(row), None)
    }

    /// Replace the selection with the contiguous range implied by `row` and
    /// the current selection boundaries (see [`range_for_click`]).
    ///
    /// Rows inside the range keep their focus; rows outside lose both flags.
    pub fn range_select<S: RowSequence + ?Sized>(&self, rows: &mut S, row: usize) -> Outcome {
        if row >= rows.len() {
            return Outcome::NONE;
        }
        let (lo, hi) = range_for_click(rows.first_selected(), rows.last_selected(), row);
        let mut w = self.writer(rows);
        for i in 0..w.len() {
            if (lo..=hi).contains(&i) {
                w.select(i);
            } else {
                w.clear(i);
            }
        }
        w.finish("range_select", Some(row), None)
    }

    /// Flip `row`'s membership in the selection.
    ///
    /// A row that becomes selected also takes the focus. Other rows keep
    /// their selection.
    pub fn toggle_select<S: RowSequence + ?Sized>(&self, rows: &mut S, row: usize) -> Outcome {
        if row >= rows.len() {
            return Outcome::NONE;
        }
        let now_selected = !rows.is_selected(row);
        let mut w = self.writer(rows);
        w.set(row, RowFlags::SELECTED, now_selected);
        if now_selected {
            w.focus_only(row);
        }
        w.finish("toggle_select", Some(row), None)
    }

    /// Move a single-row selection one step.
    ///
    /// Starts from the focused row, or from the selection boundary in
    /// `direction` when nothing is focused. The adjacent row becomes the
    /// only selected and focused row.
    pub fn step_select<S: RowSequence + ?Sized>(
        &self,
        rows: &mut S,
        direction: Direction,
    ) -> Outcome {
        let Some(from) = rows.focused().or_else(|| boundary(&*rows, direction)) else {
            return Outcome::NONE;
        };
        let Some(to) = rows.neighbor(from, direction) else {
            return Outcome::NONE;
        };
        let mut w = self.writer(rows);
        for i in 0..w.len() {
            if i == to {
                w.set(i, RowFlags::SELECTED | RowFlags::FOCUSED, true);
            } else {
                w.clear(i);
            }
        }
        w.finish("step_select", Some(to), Some(direction))
    }

    /// Grow, shrink or shift the selection by one row.
    ///
    /// With the focus on the selection boundary in `direction` the selection
    /// grows past it. With the focus elsewhere the focused row is dropped
    /// from the selection. Either way the adjacent row becomes selected and
    /// focused. Without a focused row the selection grows from the boundary.
    pub fn step_extend_select<S: RowSequence + ?Sized>(
        &self,
        rows: &mut S,
        direction: Direction,
    ) -> Outcome {
        let edge = boundary(&*rows, direction);
        let (from, on_edge) = match rows.focused() {
            Some(focused) => (focused, Some(focused) == edge),
            None => match edge {
                Some(edge) => (edge, true),
                None => return Outcome::NONE,
            },
        };
        let Some(to) = rows.neighbor(from, direction) else {
            return Outcome::NONE;
        };
        let mut w = self.writer(rows);
        if on_edge {
            w.set(from, RowFlags::FOCUSED, false);
        } else {
            w.clear(from);
        }
        w.set(to, RowFlags::SELECTED | RowFlags::FOCUSED, true);
        w.finish("step_extend_select", Some(to), Some(direction))
    }

    /// Move the focus alone one step; selection is untouched.
    pub fn step_focus_only<S: RowSequence + ?Sized>(
        &self,
        rows: &mut S,
        direction: Direction,
    ) -> Outcome {
        let Some(from) = rows.focused().or_else(|| boundary(&*rows, direction)) else {
            return Outcome::NONE;
        };
        let Some(to) = rows.neighbor(from, direction) else {
            return Outcome::NONE;
        };
        let mut w = self.writer(rows);
        w.focus_only(to);
        w.finish("step_focus_only", Some(to), Some(direction))
    }

    /// Toggle the focused row's selection if it is visible within the
    /// toggle tolerance. Focus is untouched.
    pub fn toggle_focused_selection<S, G>(&self, rows: &mut S, geometry: &G) -> Outcome
    where
        S: RowSequence + ?Sized,
        G: Geometry + ?Sized,
    {
        let Some(focused) = rows.focused() else {
            return Outcome::NONE;
        };
        let visible = geometry
            .row_bounds(focused)
            .is_some_and(|b| b.is_in_viewport(&geometry.viewport(), self.config.toggle_tolerance));
        if !visible {
            return Outcome::NONE;
        }
        let now_selected = !rows.is_selected(focused);
        let mut w = self.writer(rows);
        w.set(focused, RowFlags::SELECTED, now_selected);
        w.finish("toggle_focused_selection", Some(focused), None)
    }

    /// Scroll one row height towards `row` if it is not visible within the
    /// step tolerance.
    ///
    /// Returns whether a scroll was requested.
    pub fn ensure_visible<G, C>(
        &self,
        row: usize,
        direction: Direction,
        geometry: &G,
        scroller: &mut C,
    ) -> bool
    where
        G: Geometry + ?Sized,
        C: SmoothScroll + ?Sized,
    {
        let Some(bounds) = geometry.row_bounds(row) else {
            return false;
        };
        if bounds.is_in_viewport(&geometry.viewport(), self.config.step_tolerance) {
            return false;
        }
        let delta = direction.sign() * bounds.height;
        scroller.scroll_by(delta, self.config.scroll_duration);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "row_select.scroll",
            row,
            delta,
            duration_ms = self.config.scroll_duration.as_millis() as u64
        );
        true
    }

    /// Select the first row when nothing is selected.
    pub fn select_default<S: RowSequence + ?Sized>(&self, rows: &mut S) -> Outcome {
        if rows.is_empty() || rows.first_selected().is_some() {
            return Outcome::NONE;
        }
        let mut w = self.writer(rows);
        w.select(0);
        w.finish("select_default", Some(0), None)
    }

    /// Re-run the visibility check for the focused row.
    ///
    /// Meant to be called once a scroll animation settles. The scroll
    /// direction follows where the row sits relative to the viewport.
    pub fn recheck_focused<S, G, C>(&self, rows: &S, geometry: &G, scroller: &mut C) -> bool
    where
        S: RowSequence + ?Sized,
        G: Geometry + ?Sized,
        C: SmoothScroll + ?Sized,
    {
        let Some(focused) = rows.focused() else {
            return false;
        };
        let Some(bounds) = geometry.row_bounds(focused) else {
            return false;
        };
        let direction = direction_towards(&bounds, geometry);
        self.ensure_visible(focused, direction, geometry, scroller)
    }

    fn writer<'a, S: RowSequence + ?Sized>(&self, rows: &'a mut S) -> Writer<'a, S> {
        Writer {
            rows,
            notify: self.config.notify_checkbox_changes,
            changed: false,
        }
    }
}

/// Range selected by a shift+click on `row`.
///
/// `first`/`last` are the current selection boundaries. With an empty
/// selection the range runs from the first row to `row`.
#[must_use]
pub fn range_for_click(first: Option<usize>, last: Option<usize>, row: usize) -> (usize, usize) {
    match (first, last) {
        (Some(first), Some(last)) => {
            if row < first {
                (row, first)
            } else if row == first || row == last {
                (first, last)
            } else if row < last {
                (row, last)
            } else {
                (first, row)
            }
        }
        _ => (0, row),
    }
}

fn boundary<S: RowSequence + ?Sized>(rows: &S, direction: Direction) -> Option<usize> {
    match direction {
        Direction::Next => rows.last_selected(),
        Direction::Previous => rows.first_selected(),
    }
}

fn direction_towards<G: Geometry + ?Sized>(bounds: &Bounds, geometry: &G) -> Direction {
    let viewport = geometry.viewport();
    match bounds.placement(&viewport) {
        Placement::Above => Direction::Previous,
        Placement::Below => Direction::Next,
        Placement::Overlapping => {
            let centre = viewport.scroll_top + viewport.height / 2.0;
            if bounds.top + bounds.height / 2.0 < centre {
                Direction::Previous
            } else {
                Direction::Next
            }
        }
    }
}

/// Flag writer that keeps checkboxes in step with `SELECTED`.
struct Writer<'a, S: RowSequence + ?Sized> {
    rows: &'a mut S,
    notify: bool,
    changed: bool,
}

impl<S: RowSequence + ?Sized> Writer<'_, S> {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn set(&mut self, index: usize, flags: RowFlags, on: bool) {
        let before = self.rows.flags(index);
        let mut after = before;
        after.set(flags, on);
        if after != before {
            self.rows.set_flags(index, after);
            self.changed = true;
        }
        self.sync_checkbox(index);
    }

    fn select(&mut self, index: usize) {
        self.set(index, RowFlags::SELECTED, true);
    }

    fn clear(&mut self, index: usize) {
        self.set(index, RowFlags::SELECTED | RowFlags::FOCUSED, false);
    }

    /// Focus `index` and drop the focus from every other row.
    fn focus_only(&mut self, index: usize) {
        for i in 0..self.len() {
            self.set(i, RowFlags::FOCUSED, i == index);
        }
    }

    fn sync_checkbox(&mut self, index: usize) {
        let selected = self.rows.is_selected(index);
        if self.rows.checkbox(index) != selected {
            self.rows.write_checkbox(index, selected, self.notify);
            self.changed = true;
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn finish(
        self,
        op: &'static str,
        row: Option<usize>,
        direction: Option<Direction>,
    ) -> Outcome {
        let reveal = match (row, direction) {
            (Some(row), Some(direction)) => Some(Reveal { row, direction }),
            _ => None,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "row_select.transition",
            op,
            row,
            changed = self.changed,
            selected_count = self.rows.selected_count(),
            focused = self.rows.focused()
        );
        Outcome {
            changed: self.changed,
            reveal,
        }
    }
}


#[cfg(all(test, feature = "tracing"))]
mod trace_tests {
    use super::*;
    use crate::table::RowTable;
    use std::sync::{Arc, Mutex};
    use tracing::Subscriber;
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};

    #[derive(Debug, Default)]
    struct TraceState {
        transitions: Vec<String>,
        scrolls: usize,
    }

    struct TraceCapture {
        state: Arc<Mutex<TraceState>>,
    }

    impl<S> Layer<S> for TraceCapture
    where
        S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            #[derive(Default)]
            struct Visitor {
                message: Option<String>,
                op: Option<String>,
            }
            impl tracing::field::Visit for Visitor {
                fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                    match field.name() {
                        "message" => self.message = Some(value.to_owned()),
                        "op" => self.op = Some(value.to_owned()),
                        _ => {}
                    }
                }

                fn record_debug(
                    &mut self,
                    field: &tracing::field::Field,
                    value: &dyn std::fmt::Debug,
                ) {
                    let text = format!("{value:?}").trim_matches('"').to_owned();
                    match field.name() {
                        "message" => self.message = Some(text),
                        "op" => self.op = Some(text),
                        _ => {}
                    }
                }
            }
            let mut visitor = Visitor::default();
            event.record(&mut visitor);
            let mut state = self.state.lock().expect("trace state lock");
            match visitor.message.as_deref() {
                Some("row_select.transition") => {
                    state.transitions.push(visitor.op.unwrap_or_default());
                }
                Some("row_select.scroll") => state.scrolls += 1,
                _ => {}
            }
        }
    }

    #[test]
    fn transitions_and_scrolls_are_logged() {
        let trace_state = Arc::new(Mutex::new(TraceState::default()));
        let subscriber = tracing_subscriber::registry().with(TraceCapture {
            state: Arc::clone(&trace_state),
        });
        let _guard = tracing::subscriber::set_default(subscriber);
        tracing::callsite::rebuild_interest_cache();

        let selection = RowSelection::default();
        let mut rows: RowTable<usize> = (0..30).collect();
        let geometry = crate::viewport::UniformRowGeometry::new(0.0, 30.0, 30, 300.0);
        let mut log = crate::viewport::ScrollLog::new();
        let _ = selection.plain_select(&mut rows, 8);
        let _ = selection.step_select(&mut rows, Direction::Next);
        assert!(selection.ensure_visible(9, Direction::Next, &geometry, &mut log));

        tracing::callsite::rebuild_interest_cache();
        let snapshot = trace_state.lock().expect("trace state lock");
        assert_eq!(snapshot.transitions, vec!["plain_select", "step_select"]);
        assert_eq!(snapshot.scrolls, 1);
    }
}
