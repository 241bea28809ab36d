#![forbid(unsafe_code)]

//! Error model.
//!
//! Selection itself never fails: every transition is total and an unmet
//! precondition is a no-op. Errors only surface where outside input is
//! parsed, which today is configuration loading.

use std::fmt;

use rowsel_widgets::config::ConfigError;

/// Top-level error type for rowsel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A configuration value could not be parsed.
    Config(ConfigError),
}

/// Standard result type for rowsel APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Error type label for metrics and tracing.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;

    use super::*;

    fn bad_bool() -> ConfigError {
        ConfigError::InvalidBool {
            var: "ROWSEL_NOTIFY_CHECKBOX",
            value: "perhaps".into(),
        }
    }

    #[test]
    fn config_error_converts() {
        let err: Error = bad_bool().into();
        assert_eq!(err.error_type(), "config");
        assert!(matches!(err, Error::Config(ConfigError::InvalidBool { .. })));
    }

    #[test]
    fn display_wraps_inner_message() {
        let err = Error::from(bad_bool());
        let text = err.to_string();
        assert!(text.starts_with("configuration: "));
        assert!(text.contains("ROWSEL_NOTIFY_CHECKBOX"));
        assert!(text.contains("perhaps"));
    }

    #[test]
    fn source_is_the_config_error() {
        let err = Error::from(bad_bool());
        let source = StdError::source(&err).expect("config errors carry a source");
        assert_eq!(source.to_string(), bad_bool().to_string());
    }

    #[test]
    fn question_mark_propagates() {
        fn load(raw: std::result::Result<u32, ConfigError>) -> Result<u32> {
            Ok(raw? + 1)
        }
        assert_eq!(load(Ok(1)), Ok(2));
        assert_eq!(load(Err(bad_bool())), Err(Error::Config(bad_bool())));
    }
}
