#![forbid(unsafe_code)]

//! Selection controller configuration.
//!
//! # Environment Variables
//!
//! - `ROWSEL_STEP_TOLERANCE_PX`: visibility tolerance for keyboard steps.
//! - `ROWSEL_TOGGLE_TOLERANCE_PX`: visibility tolerance for ctrl+Space.
//! - `ROWSEL_SCROLL_MS`: smooth-scroll duration in milliseconds.
//! - `ROWSEL_NOTIFY_CHECKBOX`: emit change notifications on checkbox writes.
//! - `ROWSEL_RECHECK_AFTER_SCROLL`: re-run the visibility check once a
//!   scroll settles.
//!
//! Booleans accept `1/0`, `true/false`, `yes/no`, `on/off` (any case).

use std::fmt;
use std::time::Duration;

/// Default tolerance for keyboard navigation (px).
pub const DEFAULT_STEP_TOLERANCE: f64 = 150.0;
/// Default tolerance for ctrl+Space toggling (px).
pub const DEFAULT_TOGGLE_TOLERANCE: f64 = 100.0;
/// Default smooth-scroll duration (ms).
pub const DEFAULT_SCROLL_MS: u64 = 150;
/// Upper clamp for both tolerances (px).
pub const MAX_TOLERANCE: f64 = 1000.0;
/// Upper clamp for the scroll duration (ms).
pub const MAX_SCROLL_MS: u64 = 2000;

const ENV_STEP_TOLERANCE: &str = "ROWSEL_STEP_TOLERANCE_PX";
const ENV_TOGGLE_TOLERANCE: &str = "ROWSEL_TOGGLE_TOLERANCE_PX";
const ENV_SCROLL_MS: &str = "ROWSEL_SCROLL_MS";
const ENV_NOTIFY_CHECKBOX: &str = "ROWSEL_NOTIFY_CHECKBOX";
const ENV_RECHECK_AFTER_SCROLL: &str = "ROWSEL_RECHECK_AFTER_SCROLL";

/// A configuration value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Expected a finite non-negative number.
    InvalidNumber {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },
    /// Expected a boolean.
    InvalidBool {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },
}

impl ConfigError {
    /// Name of the offending variable.
    #[must_use]
    pub fn var(&self) -> &'static str {
        match self {
            Self::InvalidNumber { var, .. } | Self::InvalidBool { var, .. } => var,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { var, value } => {
                write!(f, "{var}: expected a non-negative number, got {value:?}")
            }
            Self::InvalidBool { var, value } => {
                write!(f, "{var}: expected a boolean, got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tunables of the row selection controller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectionConfig {
    /// Tolerance used when a keyboard step checks whether the new row is
    /// visible.
    pub step_tolerance: f64,
    /// Tolerance used when ctrl+Space checks whether the focused row is
    /// visible.
    pub toggle_tolerance: f64,
    /// Duration of the smooth scroll started by `ensure_visible`.
    pub scroll_duration: Duration,
    /// Emit "value changed" notifications on checkbox writes.
    pub notify_checkbox_changes: bool,
    /// Re-check the focused row once a scroll animation settles.
    pub recheck_after_scroll: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            step_tolerance: DEFAULT_STEP_TOLERANCE,
            toggle_tolerance: DEFAULT_TOGGLE_TOLERANCE,
            scroll_duration: Duration::from_millis(DEFAULT_SCROLL_MS),
            notify_checkbox_changes: true,
            recheck_after_scroll: false,
        }
    }
}

impl SelectionConfig {
    /// Set the keyboard-step tolerance.
    #[must_use]
    pub fn with_step_tolerance(mut self, px: f64) -> Self {
        self.step_tolerance = px;
        self
    }

    /// Set the ctrl+Space tolerance.
    #[must_use]
    pub fn with_toggle_tolerance(mut self, px: f64) -> Self {
        self.toggle_tolerance = px;
        self
    }

    /// Set the smooth-scroll duration.
    #[must_use]
    pub fn with_scroll_duration(mut self, duration: Duration) -> Self {
        self.scroll_duration = duration;
        self
    }

    /// Enable or disable checkbox change notifications.
    #[must_use]
    pub fn with_checkbox_notifications(mut self, enabled: bool) -> Self {
        self.notify_checkbox_changes = enabled;
        self
    }

    /// Enable or disable the post-scroll visibility re-check.
    #[must_use]
    pub fn with_recheck_after_scroll(mut self, enabled: bool) -> Self {
        self.recheck_after_scroll = enabled;
        self
    }

    /// Load from the process environment, ignoring unparsable values.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok()).0
    }

    /// Load from the process environment, failing on the first bad value.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let (config, mut errors) = Self::from_lookup(|var| std::env::var(var).ok());
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(errors.swap_remove(0))
        }
    }

    /// Load through an arbitrary variable lookup.
    ///
    /// Returns the validated config built from every value that parsed,
    /// together with the errors for those that did not. Bad values leave
    /// the corresponding default in place.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(raw) = lookup(ENV_STEP_TOLERANCE) {
            match parse_px(ENV_STEP_TOLERANCE, &raw) {
                Ok(px) => config.step_tolerance = px,
                Err(err) => errors.push(err),
            }
        }

        if let Some(raw) = lookup(ENV_TOGGLE_TOLERANCE) {
            match parse_px(ENV_TOGGLE_TOLERANCE, &raw) {
                Ok(px) => config.toggle_tolerance = px,
                Err(err) => errors.push(err),
            }
        }

        if let Some(raw) = lookup(ENV_SCROLL_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.scroll_duration = Duration::from_millis(ms),
                Err(_) => errors.push(ConfigError::InvalidNumber {
                    var: ENV_SCROLL_MS,
                    value: raw,
                }),
            }
        }

        if let Some(raw) = lookup(ENV_NOTIFY_CHECKBOX) {
            match parse_bool(ENV_NOTIFY_CHECKBOX, &raw) {
                Ok(on) => config.notify_checkbox_changes = on,
                Err(err) => errors.push(err),
            }
        }

        if let Some(raw) = lookup(ENV_RECHECK_AFTER_SCROLL) {
            match parse_bool(ENV_RECHECK_AFTER_SCROLL, &raw) {
                Ok(on) => config.recheck_after_scroll = on,
                Err(err) => errors.push(err),
            }
        }

        (config.validated(), errors)
    }

    /// Clamp values to their supported ranges.
    ///
    /// - tolerances to `0..=1000` px (NaN falls back to the default)
    /// - scroll duration to at most 2000 ms
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.step_tolerance = clamp_px(self.step_tolerance, DEFAULT_STEP_TOLERANCE);
        self.toggle_tolerance = clamp_px(self.toggle_tolerance, DEFAULT_TOGGLE_TOLERANCE);
        self.scroll_duration = self.scroll_duration.min(Duration::from_millis(MAX_SCROLL_MS));
        self
    }

    /// Whether every value lies in its supported range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let px = 0.0..=MAX_TOLERANCE;
        px.contains(&self.step_tolerance)
            && px.contains(&self.toggle_tolerance)
            && self.scroll_duration <= Duration::from_millis(MAX_SCROLL_MS)
    }
}

fn clamp_px(px: f64, fallback: f64) -> f64 {
    if px.is_nan() {
        fallback
    } else {
        px.clamp(0.0, MAX_TOLERANCE)
    }
}

fn parse_px(var: &'static str, raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(px) if px.is_finite() && px >= 0.0 => Ok(px),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: raw.to_owned(),
        }),
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    let value = raw.trim();
    if ["1", "true", "yes", "on"]
        .iter()
        .any(|t| value.eq_ignore_ascii_case(t))
    {
        Ok(true)
    } else if ["0", "false", "no", "off"]
        .iter()
        .any(|f| value.eq_ignore_ascii_case(f))
    {
        Ok(false)
    } else {
        Err(ConfigError::InvalidBool {
            var,
            value: raw.to_owned(),
        })
    }
}
