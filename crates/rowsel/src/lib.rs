#![forbid(unsafe_code)]

//! rowsel public facade crate.
//!
//! Re-exports the event and geometry types from `rowsel-core`, the
//! selection controller from `rowsel-widgets`, and offers a prelude for
//! day-to-day usage.
//!
//! ```
//! use rowsel::prelude::*;
//!
//! let mut rows: RowTable<u32> = (0..20).collect();
//! let geometry = UniformRowGeometry::new(0.0, 24.0, rows.len(), 480.0);
//! let mut scroll = AnimatedScroll::default();
//! let mut controller = RowSelectController::default();
//!
//! let mut host = SelectionHost::new(&mut rows, &geometry, &mut scroll);
//! controller.handle_event(&Event::Mutation(MutationEvent::table_inserted()), &mut host);
//! controller.handle_event(&Event::Key(KeyEvent::new(KeyCode::Down)), &mut host);
//! controller.handle_event(
//!     &Event::Key(KeyEvent::new(KeyCode::Down).with_modifiers(Modifiers::SHIFT)),
//!     &mut host,
//! );
//!
//! assert_eq!(rows.selected_indices(), vec![1, 2]);
//! assert_eq!(rows.focused(), Some(2));
//! ```

pub mod error;

pub use error::{Error, Result};

// --- Core re-exports -------------------------------------------------------

pub use rowsel_core::animation::{Animation, ScrollTween};
pub use rowsel_core::event::{
    ClickEvent, Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MutationEvent,
    NodeKind,
};
pub use rowsel_core::geometry::{Bounds, Placement, ViewportMetrics};

// --- Widget re-exports -----------------------------------------------------

pub use rowsel_widgets::{
    Action, AnimatedScroll, AttachWatcher, CheckboxChange, ConfigError, Direction, DispatchTable,
    EventResult, Geometry, InputKind, ModifierSet, Outcome, Reveal, RowFlags, RowSelectController,
    RowSelection, RowSequence, RowTable, ScrollLog, ScrollRequest, SelectionConfig, SelectionHost,
    SmoothScroll, UniformRowGeometry, Violation, audit,
};

/// Load a controller configured from the environment, rejecting bad values.
pub fn controller_from_env() -> Result<RowSelectController> {
    Ok(RowSelectController::new(SelectionConfig::try_from_env()?))
}

/// Initialize a JSON `tracing` subscriber honouring `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_logging() -> bool {
    rowsel_core::logging::init_json_subscriber()
}

/// Prelude for rowsel hosts.
pub mod prelude {
    pub use crate::{
        AnimatedScroll, Direction, Error, Event, EventResult, Geometry, KeyCode, KeyEvent,
        Modifiers, MutationEvent, Result, RowSelectController, RowSequence, RowTable,
        SelectionConfig, SelectionHost, SmoothScroll, UniformRowGeometry,
    };

    pub use crate::{core, widgets};
}

pub use rowsel_core as core;
pub use rowsel_widgets as widgets;
