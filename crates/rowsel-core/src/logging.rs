#![forbid(unsafe_code)]

//! Logging facade.
//!
//! With the `tracing` feature the usual `tracing` macros are re-exported so
//! downstream crates can log through `rowsel_core::debug!` without naming
//! `tracing` themselves. With `tracing-json` a JSON subscriber filtered by
//! `RUST_LOG` can be installed for production hosts.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, info_span, trace, warn};

/// Default filter directive when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn,rowsel_core=info,rowsel_widgets=info";

/// Install a global JSON subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(false)
        .try_init()
        .is_ok()
}
