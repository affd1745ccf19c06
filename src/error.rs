use std::fmt;

/// Errors that can occur in the policy-guard crate.
///
/// Only construction can fail. Decisions and redaction on a constructed
/// instance never return errors.
#[derive(Debug)]
pub enum Error {
    /// A component was constructed with invalid configuration
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

/// A configuration problem detected while building a component.
///
/// Configuration errors are fatal to the instance being built and should
/// surface at process start, not be retried.
///
/// # Examples
///
/// ```
/// use policy_guard::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::EmptyFieldSet, "no fields configured");
/// assert_eq!(err.kind(), ConfigErrorKind::EmptyFieldSet);
/// assert_eq!(err.to_string(), "empty field set: no fields configured");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    message: String,
}

impl ConfigError {
    /// Creates a new configuration error.
    pub fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ConfigErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Kind of configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// A redaction engine was given no fields to redact
    EmptyFieldSet,
    /// A field name in the field set is the empty string
    EmptyFieldName,
    /// A session cookie name was configured but is empty
    EmptyCookieName,
    /// The combined redaction pattern could not be compiled
    InvalidPattern,
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFieldSet => write!(f, "empty field set"),
            Self::EmptyFieldName => write!(f, "empty field name"),
            Self::EmptyCookieName => write!(f, "empty cookie name"),
            Self::InvalidPattern => write!(f, "invalid pattern"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn config_error_display_includes_kind_and_message() {
        let err = ConfigError::new(ConfigErrorKind::EmptyCookieName, "SESSION_NAME is empty");
        assert_eq!(err.to_string(), "empty cookie name: SESSION_NAME is empty");
        assert_eq!(err.message(), "SESSION_NAME is empty");
    }

    #[test]
    fn crate_error_wraps_config_error() {
        let err: Error = ConfigError::new(ConfigErrorKind::EmptyFieldSet, "none").into();
        assert_eq!(err.to_string(), "Configuration error: empty field set: none");
        assert!(err.source().is_some());
    }
}
