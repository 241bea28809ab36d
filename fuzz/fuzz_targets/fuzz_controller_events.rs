#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rowsel_core::event::{
    ClickEvent, Event, KeyEvent, Modifiers, MouseButton, MutationEvent, NodeKind,
};
use rowsel_widgets::{
    AnimatedScroll, RowSelectController, RowSequence, RowTable, SelectionHost, SmoothScroll,
    UniformRowGeometry, audit,
};
use std::time::Duration;

#[derive(Arbitrary, Debug)]
enum Op {
    Key { which: u8, modifiers: u8 },
    Click { row: u8, modifiers: u8, button: u8 },
    Insert { kind: u8 },
    AddRow { at: u8 },
    RemoveRow { at: u8 },
    Scroll { delta: i16 },
    Tick { ms: u8 },
}

#[derive(Arbitrary, Debug)]
struct Input {
    rows: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut rows: RowTable<u16> = (0..u16::from(input.rows % 64)).collect();
    let mut geometry = UniformRowGeometry::new(80.0, 28.0, rows.len(), 420.0);
    let mut scroll = AnimatedScroll::new(0.0);
    let mut controller = RowSelectController::default();

    for op in input.ops.iter().take(512) {
        let event = match *op {
            Op::Key { which, modifiers } => Some(Event::Key(
                KeyEvent::from_legacy(u32::from(which))
                    .with_modifiers(Modifiers::from_bits_truncate(modifiers)),
            )),
            Op::Click {
                row,
                modifiers,
                button,
            } => {
                let button = match button % 3 {
                    0 => MouseButton::Left,
                    1 => MouseButton::Right,
                    _ => MouseButton::Middle,
                };
                Some(Event::Click(
                    ClickEvent::new(usize::from(row))
                        .with_modifiers(Modifiers::from_bits_truncate(modifiers))
                        .with_button(button),
                ))
            }
            Op::Insert { kind } => {
                let kind = match kind % 3 {
                    0 => NodeKind::Table,
                    1 => NodeKind::Row,
                    _ => NodeKind::Other,
                };
                Some(Event::Mutation(MutationEvent::new().with(kind)))
            }
            Op::AddRow { at } => {
                rows.insert(usize::from(at), u16::from(at));
                None
            }
            Op::RemoveRow { at } => {
                let _ = rows.remove(usize::from(at));
                None
            }
            Op::Scroll { delta } => {
                scroll.scroll_by(f64::from(delta), Duration::from_millis(150));
                None
            }
            Op::Tick { ms } => {
                scroll.tick(Duration::from_millis(u64::from(ms)));
                None
            }
        };

        geometry.set_row_count(rows.len());
        scroll.set_limit(geometry.max_scroll());
        geometry.set_scroll_top(scroll.position());

        if let Some(event) = event {
            let mut host = SelectionHost::new(&mut rows, &geometry, &mut scroll);
            controller.handle_event(&event, &mut host);
        }

        // Post-conditions that must always hold:
        assert!(audit(&rows).is_empty(), "invariant broken after {op:?}");
        assert!(rows.focused().is_none_or(|f| f < rows.len()), "focus OOB");
        let position = scroll.position();
        assert!(position.is_finite() && position >= 0.0, "scroll position {position}");
    }
});
