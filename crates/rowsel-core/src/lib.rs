#![forbid(unsafe_code)]

//! Core: input events, viewport geometry, and scroll animation.
//!
//! # Role in rowsel
//! `rowsel-core` is the input and geometry layer. It owns the normalized
//! event types the selection controller consumes, the vertical geometry used
//! to decide whether a row is visible, and the tween primitive used to scroll
//! the page smoothly.
//!
//! # Primary responsibilities
//! - **Event**: canonical input events (keys, row clicks, node insertions).
//! - **Geometry**: row bounds, viewport metrics, and the tolerance-aware
//!   intersection test.
//! - **Animation**: the [`animation::Animation`] trait, easing functions, and
//!   [`animation::ScrollTween`].
//!
//! # How it fits in the system
//! `rowsel-widgets` consumes `rowsel-core::event::Event` values and drives
//! row selection state. Nothing in this crate knows about rows being
//! selected; it only describes what happened and where things are.

pub mod animation;
pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, info_span, trace, warn};
