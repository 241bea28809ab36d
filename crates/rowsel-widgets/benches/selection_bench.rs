//! Benchmark: selection transitions on large table bodies.
//!
//! Run with: `cargo bench -p rowsel-widgets --bench selection_bench`
//!
//! Every operation rescans the live row sequence, so cost is linear in the
//! number of rows. These benches keep an eye on the constant factor for
//! tables in the thousands of rows (long paginated listings).

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rowsel_core::event::{ClickEvent, Event, KeyCode, KeyEvent, Modifiers};
use rowsel_widgets::{
    Direction, RowSelectController, RowSelection, RowTable, ScrollLog, SelectionHost,
    UniformRowGeometry,
};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn table(n: usize) -> RowTable<u32> {
    (0..n as u32).collect()
}

// ===========================================================================
// Raw transitions
// ===========================================================================

fn bench_range_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_select");
    let selection = RowSelection::default();
    for n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rows = table(n);
            let _ = selection.plain_select(&mut rows, n / 4);
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                let target = if flip { n - 1 } else { 0 };
                black_box(selection.range_select(&mut rows, black_box(target)));
                let _ = rows.take_changes();
            });
        });
    }
    group.finish();
}

fn bench_step_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_select");
    let selection = RowSelection::default();
    for n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rows = table(n);
            let _ = selection.plain_select(&mut rows, n / 2);
            let mut direction = Direction::Next;
            b.iter(|| {
                direction = match direction {
                    Direction::Next => Direction::Previous,
                    Direction::Previous => Direction::Next,
                };
                black_box(selection.step_select(&mut rows, direction));
                let _ = rows.take_changes();
            });
        });
    }
    group.finish();
}

// ===========================================================================
// Full dispatch
// ===========================================================================

fn bench_controller_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller_events");
    let n = 1_000;
    let down = Event::Key(KeyEvent::new(KeyCode::Down));
    let up = Event::Key(KeyEvent::new(KeyCode::Up));
    let shift_click = Event::Click(ClickEvent::new(n / 2).with_modifiers(Modifiers::SHIFT));

    group.bench_function("arrow_keys", |b| {
        let mut rows = table(n);
        let geometry = UniformRowGeometry::new(0.0, 30.0, n, 900.0);
        let mut log = ScrollLog::new();
        let mut controller = RowSelectController::default();
        let _ = controller.attach(&mut rows);
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let mut host = SelectionHost::new(&mut rows, &geometry, &mut log);
            let event = if flip { &down } else { &up };
            black_box(controller.handle_event(event, &mut host));
            log.take();
            rows.take_changes();
        });
    });

    group.bench_function("shift_click", |b| {
        let mut rows = table(n);
        let geometry = UniformRowGeometry::new(0.0, 30.0, n, 900.0);
        let mut log = ScrollLog::new();
        let mut controller = RowSelectController::default();
        let _ = controller.attach(&mut rows);
        b.iter(|| {
            let mut host = SelectionHost::new(&mut rows, &geometry, &mut log);
            black_box(controller.handle_event(&shift_click, &mut host));
            rows.take_changes();
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_range_select,
    bench_step_select,
    bench_controller_events
);
criterion_main!(benches);
