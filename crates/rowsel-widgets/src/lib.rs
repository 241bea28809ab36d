#![forbid(unsafe_code)]

//! Multi-row selection for scrollable table bodies.
//!
//! The pieces, bottom up:
//!
//! - [`row`]: per-row flags and the [`RowSequence`] query surface.
//! - [`table`]: [`RowTable`], an in-memory row sequence.
//! - [`viewport`] / [`scroll`]: layout and smooth-scroll collaborators.
//! - [`selection`]: the state transitions ([`RowSelection`]).
//! - [`dispatch`]: input + modifiers to [`Action`] bindings.
//! - [`attach`]: table attachment detection.
//! - [`controller`]: [`RowSelectController`], which routes events.
//!
//! # Example
//!
//! ```
//! use rowsel_core::event::{ClickEvent, Event, Modifiers};
//! use rowsel_widgets::{
//!     RowSelectController, RowSequence, RowTable, ScrollLog, SelectionHost, UniformRowGeometry,
//! };
//!
//! let mut rows: RowTable<&str> = ["a", "b", "c", "d"].into_iter().collect();
//! let geometry = UniformRowGeometry::new(0.0, 30.0, rows.len(), 600.0);
//! let mut scroll = ScrollLog::new();
//! let mut controller = RowSelectController::default();
//!
//! let mut host = SelectionHost::new(&mut rows, &geometry, &mut scroll);
//! controller.handle_event(&Event::Click(ClickEvent::new(1)), &mut host);
//! controller.handle_event(
//!     &Event::Click(ClickEvent::new(3).with_modifiers(Modifiers::SHIFT)),
//!     &mut host,
//! );
//! assert_eq!(rows.selected_indices(), vec![1, 2, 3]);
//! ```

pub mod attach;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod row;
pub mod scroll;
pub mod selection;
pub mod table;
pub mod viewport;

pub use attach::AttachWatcher;
pub use config::{ConfigError, SelectionConfig};
pub use controller::{EventResult, RowSelectController, SelectionHost};
pub use dispatch::{Action, DispatchTable, InputKind, ModifierSet};
pub use row::{Direction, RowFlags, RowSequence, Violation, audit};
pub use scroll::AnimatedScroll;
pub use selection::{Outcome, Reveal, RowSelection, range_for_click};
pub use table::{CheckboxChange, RowTable};
pub use viewport::{Geometry, ScrollLog, ScrollRequest, SmoothScroll, UniformRowGeometry};
