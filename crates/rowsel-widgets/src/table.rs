#![forbid(unsafe_code)]

//! In-memory row sequence.
//!
//! [`RowTable`] stores caller data next to the per-row visual flags and the
//! backing checkbox. Rows entering the table start unselected, unfocused and
//! unchecked; removing a row discards its state with it.
//!
//! Checkbox writes that ask for notification are queued as
//! [`CheckboxChange`] records. Hosts drain them with
//! [`RowTable::take_changes`] and forward them to whatever listens on the
//! checkbox (form state, a "n rows selected" counter, ...).

use crate::row::{RowFlags, RowSequence};

/// A "value changed" notification for one row's checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckboxChange {
    /// Row position at the time of the write.
    pub index: usize,
    /// New checked state.
    pub checked: bool,
}

#[derive(Debug, Clone)]
struct RowEntry<T> {
    data: T,
    flags: RowFlags,
    checked: bool,
}

impl<T> RowEntry<T> {
    fn fresh(data: T) -> Self {
        Self {
            data,
            flags: RowFlags::empty(),
            checked: false,
        }
    }
}

/// A vector-backed [`RowSequence`].
#[derive(Debug, Clone)]
pub struct RowTable<T> {
    rows: Vec<RowEntry<T>>,
    changes: Vec<CheckboxChange>,
}

impl<T> Default for RowTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RowTable<T> {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: Vec::new(),
            changes: Vec::new(),
        }
    }

    /// Append a row at the end of the body.
    pub fn push(&mut self, data: T) {
        self.rows.push(RowEntry::fresh(data));
    }

    /// Insert a row at `index`, shifting later rows down.
    ///
    /// Indices past the end append.
    pub fn insert(&mut self, index: usize, data: T) {
        let index = index.min(self.rows.len());
        self.rows.insert(index, RowEntry::fresh(data));
    }

    /// Remove the row at `index`, returning its data.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.rows.len()).then(|| self.rows.remove(index).data)
    }

    /// Swap the whole body for new rows (pagination, reload).
    ///
    /// Pending change notifications refer to the old rows and are dropped.
    pub fn replace_rows<I: IntoIterator<Item = T>>(&mut self, rows: I) {
        self.rows = rows.into_iter().map(RowEntry::fresh).collect();
        self.changes.clear();
    }

    /// Data of the row at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(index).map(|row| &row.data)
    }

    /// Mutable data of the row at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.rows.get_mut(index).map(|row| &mut row.data)
    }

    /// Iterate row data in document order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|row| &row.data)
    }

    /// Data of every selected row, in document order.
    pub fn selected(&self) -> impl Iterator<Item = &T> {
        self.rows
            .iter()
            .filter(|row| row.flags.contains(RowFlags::SELECTED))
            .map(|row| &row.data)
    }

    /// Notifications queued since the last [`take_changes`](Self::take_changes).
    #[must_use]
    pub fn pending_changes(&self) -> &[CheckboxChange] {
        &self.changes
    }

    /// Drain queued checkbox notifications.
    pub fn take_changes(&mut self) -> Vec<CheckboxChange> {
        std::mem::take(&mut self.changes)
    }
}

impl<T> FromIterator<T> for RowTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().map(RowEntry::fresh).collect(),
            changes: Vec::new(),
        }
    }
}

impl<T> RowSequence for RowTable<T> {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn flags(&self, index: usize) -> RowFlags {
        self.rows
            .get(index)
            .map_or(RowFlags::empty(), |row| row.flags)
    }

    fn set_flags(&mut self, index: usize, flags: RowFlags) {
        if let Some(row) = self.rows.get_mut(index) {
            row.flags = flags;
        }
    }

    fn checkbox(&self, index: usize) -> bool {
        self.rows.get(index).is_some_and(|row| row.checked)
    }

    fn write_checkbox(&mut self, index: usize, checked: bool, notify: bool) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        row.checked = checked;
        if notify {
            self.changes.push(CheckboxChange { index, checked });
        }
    }
}
