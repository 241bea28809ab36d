#![forbid(unsafe_code)]

//! The row selection controller.
//!
//! [`RowSelectController`] owns the per-table state (configuration, bindings,
//! attachment status) and routes canonical [`Event`]s to the selection
//! operations. The rows, their layout and the page scroll stay with the
//! host and are lent to the controller for the duration of one event via
//! [`SelectionHost`].
//!
//! # Routing rules
//!
//! - Clicks are handled whenever they hit an existing row with the primary
//!   button.
//! - Keys are handled only while a table is attached, and only on press or
//!   auto-repeat.
//! - Insertion notices that carry a table mark the controller attached and
//!   select the first row if nothing is selected yet.
//! - After a keyboard step, the row that received focus is scrolled into
//!   view.

#[cfg(feature = "tracing")]
use web_time::Instant;

use rowsel_core::event::{ClickEvent, Event, KeyEvent, KeyEventKind, MouseButton, MutationEvent};

use crate::attach::AttachWatcher;
use crate::config::SelectionConfig;
use crate::dispatch::{Action, DispatchTable, InputKind};
use crate::row::RowSequence;
use crate::selection::{Outcome, RowSelection};
use crate::viewport::{Geometry, SmoothScroll};

/// Whether an event was handled.
///
/// Only [`EventResult::Suppressed`] asks the host to cancel its own default
/// handling; arrow keys stay free to scroll the page natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventResult {
    /// The event was handled.
    Consumed,
    /// The event was handled and the host should suppress its default action.
    Suppressed,
    /// The event does not concern the controller.
    Ignored,
}

impl EventResult {
    /// Whether the event was handled.
    #[must_use]
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed | Self::Suppressed)
    }

    /// Whether the host should cancel its default action for the event.
    #[must_use]
    pub const fn suppress_default(self) -> bool {
        matches!(self, Self::Suppressed)
    }
}

/// Host collaborators lent to the controller for one event.
pub struct SelectionHost<'a, S: ?Sized, G: ?Sized, C: ?Sized> {
    /// Live rows of the table body.
    pub rows: &'a mut S,
    /// Layout queries.
    pub geometry: &'a G,
    /// Page scrolling.
    pub scroller: &'a mut C,
}

impl<'a, S, G, C> SelectionHost<'a, S, G, C>
where
    S: RowSequence + ?Sized,
    G: Geometry + ?Sized,
    C: SmoothScroll + ?Sized,
{
    /// Bundle the collaborators.
    pub fn new(rows: &'a mut S, geometry: &'a G, scroller: &'a mut C) -> Self {
        Self {
            rows,
            geometry,
            scroller,
        }
    }
}

/// Event-driven row selection for one table.
#[derive(Debug, Clone, Default)]
pub struct RowSelectController {
    selection: RowSelection,
    dispatch: DispatchTable,
    watcher: AttachWatcher,
    attached: bool,
}

impl RowSelectController {
    /// Create a detached controller with the standard bindings.
    #[must_use]
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            selection: RowSelection::new(config),
            ..Self::default()
        }
    }

    /// Create with configuration from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(SelectionConfig::from_env())
    }

    /// Replace the bindings (builder pattern).
    #[must_use]
    pub fn with_dispatch(mut self, dispatch: DispatchTable) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SelectionConfig {
        self.selection.config()
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: SelectionConfig) {
        self.selection.set_config(config);
    }

    /// The selection operations with the active configuration.
    #[must_use]
    pub const fn selection(&self) -> &RowSelection {
        &self.selection
    }

    /// Current bindings.
    #[must_use]
    pub const fn dispatch(&self) -> &DispatchTable {
        &self.dispatch
    }

    /// Mutable bindings, for `bind`/`unbind`.
    pub fn dispatch_mut(&mut self) -> &mut DispatchTable {
        &mut self.dispatch
    }

    /// Attachment watcher state.
    #[must_use]
    pub const fn watcher(&self) -> &AttachWatcher {
        &self.watcher
    }

    /// Whether a table is attached (keyboard input is live).
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Mark the table attached and apply the default selection.
    ///
    /// For hosts that know the table is present without going through an
    /// insertion notice.
    pub fn attach<S: RowSequence + ?Sized>(&mut self, rows: &mut S) -> Outcome {
        self.attached = true;
        self.selection.select_default(rows)
    }

    /// Stop handling keyboard input.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Route one event.
    pub fn handle_event<S, G, C>(
        &mut self,
        event: &Event,
        host: &mut SelectionHost<'_, S, G, C>,
    ) -> EventResult
    where
        S: RowSequence + ?Sized,
        G: Geometry + ?Sized,
        C: SmoothScroll + ?Sized,
    {
        match event {
            Event::Key(key) => self.handle_key(key, host),
            Event::Click(click) => self.handle_click(click, host),
            Event::Mutation(mutation) => self.handle_mutation(mutation, &mut *host.rows),
        }
    }

    /// Route a key event.
    pub fn handle_key<S, G, C>(
        &mut self,
        key: &KeyEvent,
        host: &mut SelectionHost<'_, S, G, C>,
    ) -> EventResult
    where
        S: RowSequence + ?Sized,
        G: Geometry + ?Sized,
        C: SmoothScroll + ?Sized,
    {
        if !self.attached || key.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }
        let Some(action) = self.dispatch.resolve(InputKind::Key(key.code), key.modifiers) else {
            return EventResult::Ignored;
        };
        let row = if action.needs_row() {
            match host.rows.focused() {
                Some(row) => Some(row),
                None => return EventResult::Ignored,
            }
        } else {
            None
        };
        let _ = self.apply(action, row, host);
        if action == Action::Suppress {
            EventResult::Suppressed
        } else {
            EventResult::Consumed
        }
    }

    /// Route a click.
    pub fn handle_click<S, G, C>(
        &mut self,
        click: &ClickEvent,
        host: &mut SelectionHost<'_, S, G, C>,
    ) -> EventResult
    where
        S: RowSequence + ?Sized,
        G: Geometry + ?Sized,
        C: SmoothScroll + ?Sized,
    {
        if click.button != MouseButton::Left || click.row >= host.rows.len() {
            return EventResult::Ignored;
        }
        let Some(action) = self.dispatch.resolve(InputKind::Click, click.modifiers) else {
            return EventResult::Ignored;
        };
        let _ = self.apply(action, Some(click.row), host);
        EventResult::Consumed
    }

    /// Feed an insertion notice.
    pub fn handle_mutation<S: RowSequence + ?Sized>(
        &mut self,
        mutation: &MutationEvent,
        rows: &mut S,
    ) -> EventResult {
        let tables = self.watcher.observe(mutation);
        if tables == 0 {
            return EventResult::Ignored;
        }
        for _ in 0..tables {
            let _ = self.attach(&mut *rows);
        }
        EventResult::Consumed
    }

    /// Run one action directly.
    ///
    /// `row` is required by the row-targeting actions (see
    /// [`Action::needs_row`]); without it they do nothing. Keyboard steps
    /// scroll their target row into view.
    pub fn apply<S, G, C>(
        &self,
        action: Action,
        row: Option<usize>,
        host: &mut SelectionHost<'_, S, G, C>,
    ) -> Outcome
    where
        S: RowSequence + ?Sized,
        G: Geometry + ?Sized,
        C: SmoothScroll + ?Sized,
    {
        #[cfg(feature = "tracing")]
        let start = Instant::now();

        let selection = &self.selection;
        let rows = &mut *host.rows;
        let outcome = match (action, row) {
            (Action::PlainSelect, Some(row)) => selection.plain_select(rows, row),
            (Action::RangeSelect, Some(row)) => selection.range_select(rows, row),
            (Action::ToggleSelect, Some(row)) => selection.toggle_select(rows, row),
            (Action::PlainSelect | Action::RangeSelect | Action::ToggleSelect, None) => {
                Outcome::NONE
            }
            (Action::Step(direction), _) => selection.step_select(rows, direction),
            (Action::StepExtend(direction), _) => selection.step_extend_select(rows, direction),
            (Action::StepFocus(direction), _) => selection.step_focus_only(rows, direction),
            (Action::ToggleFocused, _) => selection.toggle_focused_selection(rows, host.geometry),
            (Action::Suppress, _) => Outcome::NONE,
        };

        if let Some(reveal) = outcome.reveal {
            selection.ensure_visible(
                reveal.row,
                reveal.direction,
                host.geometry,
                &mut *host.scroller,
            );
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "row_select.dispatch",
            action = action.name(),
            row,
            changed = outcome.changed,
            duration_us = start.elapsed().as_micros() as u64
        );

        outcome
    }

    /// Notify the controller that a smooth scroll finished.
    ///
    /// When `recheck_after_scroll` is enabled the focused row is checked
    /// again and scrolled one more row if it is still out of view. Returns
    /// whether a new scroll was started.
    pub fn on_scroll_settled<S, G, C>(&self, host: &mut SelectionHost<'_, S, G, C>) -> bool
    where
        S: RowSequence + ?Sized,
        G: Geometry + ?Sized,
        C: SmoothScroll + ?Sized,
    {
        self.selection.config().recheck_after_scroll
            && self
                .selection
                .recheck_focused(&*host.rows, host.geometry, &mut *host.scroller)
    }
}
