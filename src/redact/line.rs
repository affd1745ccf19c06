//! Builder for `key=value<sep>` messages.

use std::fmt::{self, Write as _};

use super::engine::DEFAULT_SEPARATOR;

/// Assembles a message in the shape a [`RedactionEngine`](super::RedactionEngine)
/// understands.
///
/// Pairs are written as `key=value<sep>` and joined by a single space.
///
/// # Examples
///
/// ```
/// use policy_guard::redact::{LogLine, RedactionConfig};
///
/// let line = LogLine::new()
///     .field("name", "Alice")
///     .field("email", "alice@example.com")
///     .field("last_login", "2019-11-14 06:14:24")
///     .finish();
/// assert_eq!(line, "name=Alice; email=alice@example.com; last_login=2019-11-14 06:14:24;");
///
/// let engine = RedactionConfig::pii().build().unwrap();
/// assert_eq!(engine.redact(&line), "name=***; email=***; last_login=2019-11-14 06:14:24;");
/// ```
#[derive(Debug, Clone)]
pub struct LogLine {
    separator: char,
    buf: String,
}

impl LogLine {
    /// Starts an empty line using [`DEFAULT_SEPARATOR`].
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    /// Starts an empty line using `separator`.
    pub fn with_separator(separator: char) -> Self {
        Self {
            separator,
            buf: String::new(),
        }
    }

    /// Appends a `key=value` pair.
    pub fn field(mut self, key: &str, value: impl fmt::Display) -> Self {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(self.buf, "{}={}{}", key, value, self.separator);
        self
    }

    /// Returns the line built so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the builder and returns the line.
    pub fn finish(self) -> String {
        self.buf
    }
}

impl Default for LogLine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
