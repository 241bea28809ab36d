#![forbid(unsafe_code)]

//! Table attachment detection.
//!
//! Hosts forward insertion notices from their document observer to an
//! [`AttachWatcher`]. Only nodes that are qualifying tables count as an
//! attachment; appended rows and unrelated nodes are ignored.

use rowsel_core::event::{MutationEvent, NodeKind};

/// Counts table attachments seen in insertion batches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttachWatcher {
    attachments: u64,
}

impl AttachWatcher {
    /// Create a watcher that has seen nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self { attachments: 0 }
    }

    /// Inspect one insertion batch.
    ///
    /// Returns how many tables it attached.
    pub fn observe(&mut self, event: &MutationEvent) -> usize {
        let tables = event
            .added
            .iter()
            .filter(|kind| matches!(kind, NodeKind::Table))
            .count();
        self.attachments = self.attachments.saturating_add(tables as u64);
        tables
    }

    /// Total attachments observed.
    #[must_use]
    pub const fn attachments(&self) -> u64 {
        self.attachments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_tables_count() {
        let mut watcher = AttachWatcher::new();
        let batch = MutationEvent::new()
            .with(NodeKind::Row)
            .with(NodeKind::Table)
            .with(NodeKind::Other)
            .with(NodeKind::Table);
        assert_eq!(watcher.observe(&batch), 2);
        assert_eq!(watcher.observe(&MutationEvent::new().with(NodeKind::Row)), 0);
        assert_eq!(watcher.observe(&MutationEvent::table_inserted()), 1);
        assert_eq!(watcher.attachments(), 3);
    }

    #[test]
    fn empty_batch() {
        let mut watcher = AttachWatcher::default();
        assert_eq!(watcher.observe(&MutationEvent::new()), 0);
        assert_eq!(watcher.attachments(), 0);
    }
}
