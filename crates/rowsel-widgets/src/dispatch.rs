#![forbid(unsafe_code)]

//! Input to action routing.
//!
//! A [`DispatchTable`] maps an input (a click or a key) together with the
//! held modifier class to an [`Action`]. Modifier keys are folded into three
//! classes before the lookup: shift wins over ctrl/cmd, ctrl and cmd are the
//! same class, and alt is ignored.
//!
//! The standard table:
//!
//! | Input | Plain | Shift | Ctrl/Cmd |
//! |-------|-------|-------|----------|
//! | click | plain select | range select | toggle select |
//! | Down | step next | extend next | focus next |
//! | Up | step previous | extend previous | focus previous |
//! | Space | - | suppressed | toggle focused |

use ahash::AHashMap;
use rowsel_core::event::{KeyCode, Modifiers};

use crate::row::Direction;

/// What a dispatched input does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Select the clicked row alone.
    PlainSelect,
    /// Select the range up to the clicked row.
    RangeSelect,
    /// Flip the clicked row.
    ToggleSelect,
    /// Move a single-row selection.
    Step(Direction),
    /// Grow, shrink or shift the selection.
    StepExtend(Direction),
    /// Move the focus alone.
    StepFocus(Direction),
    /// Flip the focused row if it is visible.
    ToggleFocused,
    /// Consume the input without changing anything.
    Suppress,
}

impl Action {
    /// Whether the action acts on a specific (clicked) row.
    #[must_use]
    pub const fn needs_row(self) -> bool {
        matches!(self, Self::PlainSelect | Self::RangeSelect | Self::ToggleSelect)
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PlainSelect => "plain_select",
            Self::RangeSelect => "range_select",
            Self::ToggleSelect => "toggle_select",
            Self::Step(_) => "step_select",
            Self::StepExtend(_) => "step_extend_select",
            Self::StepFocus(_) => "step_focus_only",
            Self::ToggleFocused => "toggle_focused_selection",
            Self::Suppress => "suppress",
        }
    }
}

/// The input half of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// A primary-button click on a row.
    Click,
    /// A key press.
    Key(KeyCode),
}

/// Modifier class of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierSet {
    /// No relevant modifier held.
    Plain,
    /// Shift held (with or without ctrl/cmd).
    Shift,
    /// Ctrl or cmd held, shift not held.
    Primary,
}

impl ModifierSet {
    /// Fold raw modifier flags into a class.
    #[must_use]
    pub const fn classify(modifiers: Modifiers) -> Self {
        if modifiers.contains(Modifiers::SHIFT) {
            Self::Shift
        } else if modifiers.has_primary() {
            Self::Primary
        } else {
            Self::Plain
        }
    }
}

impl From<Modifiers> for ModifierSet {
    fn from(modifiers: Modifiers) -> Self {
        Self::classify(modifiers)
    }
}

/// Binding map from `(input, modifier class)` to [`Action`].
#[derive(Debug, Clone)]
pub struct DispatchTable {
    bindings: AHashMap<(InputKind, ModifierSet), Action>,
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl DispatchTable {
    /// A table with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: AHashMap::new(),
        }
    }

    /// The standard row-selection bindings.
    #[must_use]
    pub fn standard() -> Self {
        use Action::*;
        use Direction::{Next, Previous};
        use ModifierSet::{Plain, Primary, Shift};

        let space = InputKind::Key(KeyCode::Char(' '));
        let down = InputKind::Key(KeyCode::Down);
        let up = InputKind::Key(KeyCode::Up);

        let mut table = Self::empty();
        table.bind(InputKind::Click, Plain, PlainSelect);
        table.bind(InputKind::Click, Shift, RangeSelect);
        table.bind(InputKind::Click, Primary, ToggleSelect);
        table.bind(down, Plain, Step(Next));
        table.bind(down, Shift, StepExtend(Next));
        table.bind(down, Primary, StepFocus(Next));
        table.bind(up, Plain, Step(Previous));
        table.bind(up, Shift, StepExtend(Previous));
        table.bind(up, Primary, StepFocus(Previous));
        table.bind(space, Primary, ToggleFocused);
        table.bind(space, Shift, Suppress);
        table
    }

    /// Bind an input, returning the action it replaces.
    pub fn bind(&mut self, input: InputKind, modifiers: ModifierSet, action: Action) -> Option<Action> {
        self.bindings.insert((input, modifiers), action)
    }

    /// Remove a binding, returning the action it had.
    pub fn unbind(&mut self, input: InputKind, modifiers: ModifierSet) -> Option<Action> {
        self.bindings.remove(&(input, modifiers))
    }

    /// Look up the action for an input and raw modifier flags.
    #[must_use]
    pub fn resolve(&self, input: InputKind, modifiers: Modifiers) -> Option<Action> {
        self.bindings
            .get(&(input, ModifierSet::classify(modifiers)))
            .copied()
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the table has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_wins_over_ctrl() {
        assert_eq!(
            ModifierSet::classify(Modifiers::SHIFT | Modifiers::CTRL),
            ModifierSet::Shift
        );
        assert_eq!(ModifierSet::classify(Modifiers::SUPER), ModifierSet::Primary);
        assert_eq!(ModifierSet::classify(Modifiers::ALT), ModifierSet::Plain);
        assert_eq!(ModifierSet::from(Modifiers::NONE), ModifierSet::Plain);
    }

    #[test]
    fn standard_clicks() {
        let table = DispatchTable::standard();
        assert_eq!(
            table.resolve(InputKind::Click, Modifiers::NONE),
            Some(Action::PlainSelect)
        );
        assert_eq!(
            table.resolve(InputKind::Click, Modifiers::SHIFT),
            Some(Action::RangeSelect)
        );
        assert_eq!(
            table.resolve(InputKind::Click, Modifiers::SUPER),
            Some(Action::ToggleSelect)
        );
    }

    #[test]
    fn standard_keys() {
        let table = DispatchTable::standard();
        let down = InputKind::Key(KeyCode::Down);
        let space = InputKind::Key(KeyCode::Char(' '));
        assert_eq!(
            table.resolve(down, Modifiers::NONE),
            Some(Action::Step(Direction::Next))
        );
        assert_eq!(
            table.resolve(InputKind::Key(KeyCode::Up), Modifiers::CTRL),
            Some(Action::StepFocus(Direction::Previous))
        );
        assert_eq!(
            table.resolve(space, Modifiers::CTRL),
            Some(Action::ToggleFocused)
        );
        assert_eq!(table.resolve(space, Modifiers::SHIFT), Some(Action::Suppress));
        assert_eq!(table.resolve(space, Modifiers::NONE), None);
        assert_eq!(table.resolve(InputKind::Key(KeyCode::Left), Modifiers::NONE), None);
        assert_eq!(table.len(), 11);
    }

    #[test]
    fn alt_does_not_change_routing() {
        let table = DispatchTable::standard();
        assert_eq!(
            table.resolve(InputKind::Key(KeyCode::Down), Modifiers::ALT | Modifiers::SHIFT),
            Some(Action::StepExtend(Direction::Next))
        );
    }

    #[test]
    fn bind_and_unbind() {
        let mut table = DispatchTable::standard();
        let home = InputKind::Key(KeyCode::Home);
        assert_eq!(table.bind(home, ModifierSet::Plain, Action::Suppress), None);
        assert_eq!(
            table.bind(InputKind::Click, ModifierSet::Primary, Action::RangeSelect),
            Some(Action::ToggleSelect)
        );
        assert_eq!(
            table.unbind(InputKind::Key(KeyCode::Char(' ')), ModifierSet::Shift),
            Some(Action::Suppress)
        );
        assert_eq!(
            table.resolve(InputKind::Key(KeyCode::Char(' ')), Modifiers::SHIFT),
            None
        );
        assert!(DispatchTable::empty().is_empty());
    }

    #[test]
    fn row_actions() {
        assert!(Action::PlainSelect.needs_row());
        assert!(!Action::Step(Direction::Next).needs_row());
        assert_eq!(Action::StepExtend(Direction::Previous).name(), "step_extend_select");
    }
}
