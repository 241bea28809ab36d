#![forbid(unsafe_code)]

//! Row state and the row-sequence query surface.
//!
//! A row is identified by its position in the table body. Positions are
//! never cached across operations: rows come and go between events
//! (pagination, live updates), so every query scans the sequence as it is
//! right now.

use bitflags::bitflags;

bitflags! {
    /// Visual state flags of a single row.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RowFlags: u8 {
        /// Part of the current multi-selection.
        const SELECTED = 0b01;
        /// Anchor of keyboard navigation. At most one row carries it.
        const FOCUSED  = 0b10;
    }
}

/// Navigation direction through the row sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Towards higher indices (down the page).
    Next,
    /// Towards lower indices (up the page).
    Previous,
}

impl Direction {
    /// The index one step from `index` in this direction, if inside `0..len`.
    #[must_use]
    pub fn step(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Self::Next => index.checked_add(1).filter(|&next| next < len),
            Self::Previous => index.checked_sub(1).filter(|&prev| prev < len),
        }
    }

    /// Scroll sign for this direction (`+1.0` scrolls down).
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Next => 1.0,
            Self::Previous => -1.0,
        }
    }
}

/// Read/write access to the rows of one table body.
///
/// Implementors provide raw storage; the selection logic keeps the flags and
/// checkboxes consistent. Out-of-range indices must be tolerated: reads
/// return empty flags / unchecked, writes are ignored.
pub trait RowSequence {
    /// Number of rows currently in the sequence.
    fn len(&self) -> usize;

    /// Visual flags of the row at `index`.
    fn flags(&self, index: usize) -> RowFlags;

    /// Replace the visual flags of the row at `index`.
    fn set_flags(&mut self, index: usize, flags: RowFlags);

    /// Checked state of the row's backing checkbox.
    fn checkbox(&self, index: usize) -> bool;

    /// Write the row's backing checkbox.
    ///
    /// When `notify` is true the implementor should emit a "value changed"
    /// notification to whoever listens on the checkbox.
    fn write_checkbox(&mut self, index: usize, checked: bool, notify: bool);

    /// Whether the sequence has no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the row at `index` is selected.
    fn is_selected(&self, index: usize) -> bool {
        self.flags(index).contains(RowFlags::SELECTED)
    }

    /// Whether the row at `index` is focused.
    fn is_focused(&self, index: usize) -> bool {
        self.flags(index).contains(RowFlags::FOCUSED)
    }

    /// Lowest selected index.
    fn first_selected(&self) -> Option<usize> {
        (0..self.len()).find(|&i| self.is_selected(i))
    }

    /// Highest selected index.
    fn last_selected(&self) -> Option<usize> {
        (0..self.len()).rev().find(|&i| self.is_selected(i))
    }

    /// The focused row, if any. Picks the first one should several exist.
    fn focused(&self) -> Option<usize> {
        (0..self.len()).find(|&i| self.is_focused(i))
    }

    /// All selected indices in ascending order.
    fn selected_indices(&self) -> Vec<usize> {
        (0..self.len()).filter(|&i| self.is_selected(i)).collect()
    }

    /// Number of selected rows.
    fn selected_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_selected(i)).count()
    }

    /// The row adjacent to `index` in `direction`.
    fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        direction.step(index, self.len())
    }
}

/// A broken invariant found by [`audit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// Checkbox state disagrees with the `SELECTED` flag.
    CheckboxDesync {
        /// Offending row.
        index: usize,
    },
    /// More than one row carries `FOCUSED`.
    MultipleFocus {
        /// How many rows are focused.
        count: usize,
    },
}

/// Check the structural invariants of a row sequence.
///
/// Returns every violation found; an empty vector means the sequence is
/// consistent.
#[must_use]
pub fn audit<S: RowSequence + ?Sized>(rows: &S) -> Vec<Violation> {
    let mut violations: Vec<Violation> = (0..rows.len())
        .filter(|&i| rows.checkbox(i) != rows.is_selected(i))
        .map(|index| Violation::CheckboxDesync { index })
        .collect();
    let focused = (0..rows.len()).filter(|&i| rows.is_focused(i)).count();
    if focused > 1 {
        violations.push(Violation::MultipleFocus { count: focused });
    }
    violations
}
