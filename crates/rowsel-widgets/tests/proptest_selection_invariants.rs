//! Property-based invariant tests for row selection.
//!
//! Random operation sequences (including external row insertions and
//! removals between operations) must preserve:
//!
//! 1. checkbox == selected for every row.
//! 2. At most one focused row.
//! 3. Right after a range select the selection is contiguous and contains
//!    the clicked row.
//! 4. Plain select is idempotent and leaves exactly one selected row.
//! 5. A successful step select leaves exactly one selected row, which is
//!    also the focused row.
//! 6. Focus-only steps never change selection membership.
//! 7. No panics for any index, in range or not.

use proptest::prelude::*;
use rowsel_widgets::{
    Direction, RowSelection, RowSequence, RowTable, ScrollLog, UniformRowGeometry, audit,
};

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Plain(usize),
    Range(usize),
    Toggle(usize),
    Step(Direction),
    Extend(Direction),
    Focus(Direction),
    ToggleFocused,
    Default,
    Insert(usize),
    Remove(usize),
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Next), Just(Direction::Previous)]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..24).prop_map(Op::Plain),
        (0usize..24).prop_map(Op::Range),
        (0usize..24).prop_map(Op::Toggle),
        direction().prop_map(Op::Step),
        direction().prop_map(Op::Extend),
        direction().prop_map(Op::Focus),
        Just(Op::ToggleFocused),
        Just(Op::Default),
        (0usize..24).prop_map(Op::Insert),
        (0usize..24).prop_map(Op::Remove),
    ]
}

fn apply(selection: &RowSelection, rows: &mut RowTable<u32>, op: &Op) {
    let geometry = UniformRowGeometry::new(0.0, 20.0, rows.len(), 2_000.0);
    let mut log = ScrollLog::new();
    let outcome = match *op {
        Op::Plain(row) => selection.plain_select(rows, row),
        Op::Range(row) => selection.range_select(rows, row),
        Op::Toggle(row) => selection.toggle_select(rows, row),
        Op::Step(d) => selection.step_select(rows, d),
        Op::Extend(d) => selection.step_extend_select(rows, d),
        Op::Focus(d) => selection.step_focus_only(rows, d),
        Op::ToggleFocused => selection.toggle_focused_selection(rows, &geometry),
        Op::Default => selection.select_default(rows),
        Op::Insert(at) => {
            rows.insert(at, 0);
            return;
        }
        Op::Remove(at) => {
            let _ = rows.remove(at);
            return;
        }
    };
    if let Some(reveal) = outcome.reveal {
        selection.ensure_visible(reveal.row, reveal.direction, &geometry, &mut log);
    }
}

fn is_contiguous(indices: &[usize]) -> bool {
    indices.windows(2).all(|w| w[1] == w[0] + 1)
}

fn initial_rows() -> impl Strategy<Value = RowTable<u32>> {
    (0usize..16).prop_map(|n| (0..n as u32).collect())
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Structural invariants hold after every operation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn invariants_hold_after_every_op(
        mut rows in initial_rows(),
        ops in proptest::collection::vec(op(), 0..60),
    ) {
        let selection = RowSelection::default();
        for op in &ops {
            apply(&selection, &mut rows, op);
            let violations = audit(&rows);
            prop_assert!(violations.is_empty(), "after {:?}: {:?}", op, violations);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Range select is contiguous
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn range_select_is_contiguous(
        mut rows in initial_rows(),
        ops in proptest::collection::vec(op(), 0..30),
        click in 0usize..24,
    ) {
        let selection = RowSelection::default();
        for op in &ops {
            apply(&selection, &mut rows, op);
        }
        prop_assume!(!rows.is_empty());
        let click = click % rows.len();
        let _ = selection.range_select(&mut rows, click);
        let selected = rows.selected_indices();
        prop_assert!(is_contiguous(&selected), "{:?}", selected);
        prop_assert!(selected.contains(&click));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Plain select is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn plain_select_is_idempotent(
        mut rows in initial_rows(),
        ops in proptest::collection::vec(op(), 0..30),
        click in 0usize..24,
    ) {
        let selection = RowSelection::default();
        for op in &ops {
            apply(&selection, &mut rows, op);
        }
        let _ = selection.plain_select(&mut rows, click);
        let first: Vec<_> = (0..rows.len()).map(|i| rows.flags(i)).collect();
        let again = selection.plain_select(&mut rows, click);
        let second: Vec<_> = (0..rows.len()).map(|i| rows.flags(i)).collect();
        prop_assert!(!again.changed);
        prop_assert_eq!(first, second);
        if click < rows.len() {
            prop_assert_eq!(rows.selected_indices(), vec![click]);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Step select collapses to one focused row
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn step_select_collapses(
        mut rows in initial_rows(),
        ops in proptest::collection::vec(op(), 0..30),
        d in direction(),
    ) {
        let selection = RowSelection::default();
        for op in &ops {
            apply(&selection, &mut rows, op);
        }
        let outcome = selection.step_select(&mut rows, d);
        if let Some(reveal) = outcome.reveal {
            prop_assert_eq!(rows.selected_indices(), vec![reveal.row]);
            prop_assert_eq!(rows.focused(), Some(reveal.row));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Focus-only steps keep selection membership
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn focus_step_keeps_selection(
        mut rows in initial_rows(),
        ops in proptest::collection::vec(op(), 0..30),
        d in direction(),
    ) {
        let selection = RowSelection::default();
        for op in &ops {
            apply(&selection, &mut rows, op);
        }
        let before = rows.selected_indices();
        let _ = selection.step_focus_only(&mut rows, d);
        prop_assert_eq!(rows.selected_indices(), before);
    }
}
