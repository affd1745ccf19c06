//! Log records and the fixed output template.

use chrono::{DateTime, TimeZone, Utc};
use tracing::Level;

use super::engine::{redact, RedactionEngine, DEFAULT_TAG};

/// `chrono` format for record timestamps, e.g. `2024-03-01 12:00:00,123`.
///
/// Timestamps are always rendered in UTC, so lines from hosts in different
/// zones sort together.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// A single log record before formatting.
///
/// Formatting never mutates the record; redaction only touches the output
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Logger name (the `tracing` target for events)
    pub name: String,
    /// Severity
    pub level: Level,
    /// When the record was created, in UTC
    pub timestamp: DateTime<Utc>,
    /// Raw, unredacted message
    pub message: String,
}

impl LogRecord {
    /// Creates a record stamped with the current UTC time.
    pub fn new(name: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            timestamp: Utc::now(),
            message: message.into(),
        }
    }

    /// Replaces the timestamp, converting it to UTC.
    pub fn with_timestamp<Tz: TimeZone>(mut self, timestamp: DateTime<Tz>) -> Self {
        self.timestamp = timestamp.with_timezone(&Utc);
        self
    }
}

impl RedactionEngine {
    /// Renders `record` as `[<tag>] <name> <LEVEL> <timestamp>: <message>`
    /// with the message redacted.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use policy_guard::redact::{LogRecord, RedactionConfig};
    /// use tracing::Level;
    ///
    /// let engine = RedactionConfig::new(["email", "ssn", "password"])
    ///     .tag("USERS")
    ///     .build()
    ///     .unwrap();
    /// let record = LogRecord::new(
    ///     "my_logger",
    ///     Level::INFO,
    ///     "name=Bob;email=bob@dylan.com;ssn=000-123-0000;password=bobbycool;",
    /// )
    /// .with_timestamp(Utc.with_ymd_and_hms(2019, 11, 19, 18, 24, 25).unwrap());
    ///
    /// assert_eq!(
    ///     engine.format_record(&record),
    ///     "[USERS] my_logger INFO 2019-11-19 18:24:25,000: name=Bob;email=***;ssn=***;password=***;"
    /// );
    /// ```
    pub fn format_record(&self, record: &LogRecord) -> String {
        render(self.tag(), record, &self.redact(&record.message))
    }
}

/// One-shot form of [`RedactionEngine::format_record`] using the default
/// tag.
pub fn format_record<S: AsRef<str>>(
    fields: &[S],
    token: &str,
    separator: char,
    record: &LogRecord,
) -> String {
    render(
        DEFAULT_TAG,
        record,
        &redact(fields, token, &record.message, separator),
    )
}

pub(super) fn render(tag: &str, record: &LogRecord, message: &str) -> String {
    let timestamp = record.timestamp.format(TIMESTAMP_FORMAT).to_string();
    format!(
        "[{}] {} {} {:<15}: {}",
        tag, record.name, record.level, timestamp, message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redact::RedactionConfig;
    use chrono::FixedOffset;

    fn fixed_record(message: &str) -> LogRecord {
        LogRecord::new("user_data", Level::INFO, message)
            .with_timestamp(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn format_record_redacts_message_only() {
        let engine = RedactionConfig::new(["name"]).build().unwrap();
        let record = fixed_record("name=Alice;id=1;");

        let out = engine.format_record(&record);

        assert_eq!(out, "[PII] user_data INFO 2024-03-01 12:00:00,000: name=***;id=1;");
    }

    #[test]
    fn format_record_leaves_record_untouched() {
        let engine = RedactionConfig::pii().build().unwrap();
        let record = fixed_record("password=hunter2;");
        let before = record.clone();

        let _ = engine.format_record(&record);

        assert_eq!(record, before);
        assert_eq!(record.message, "password=hunter2;");
    }

    #[test]
    fn logger_name_is_not_redacted() {
        let engine = RedactionConfig::new(["name"]).build().unwrap();
        let record = LogRecord {
            name: "name=service".to_string(),
            ..fixed_record("id=1;")
        };

        assert!(engine.format_record(&record).contains("name=service"));
    }

    #[test]
    fn free_format_record_uses_default_tag() {
        let record = fixed_record("ssn=123;");
        let out = format_record(&["ssn"], "***", ';', &record);

        assert!(out.starts_with("[PII] user_data INFO "));
        assert!(out.ends_with(": ssn=***;"));
    }

    #[test]
    fn level_is_rendered_upper_case() {
        let engine = RedactionConfig::pii().build().unwrap();
        let record = LogRecord {
            level: Level::WARN,
            ..fixed_record("x=1;")
        };

        assert!(engine.format_record(&record).contains(" WARN "));
    }

    #[test]
    fn offset_timestamp_is_rendered_in_utc() {
        let engine = RedactionConfig::pii().build().unwrap();
        let local = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 1, 14, 0, 0)
            .unwrap();
        let record = LogRecord::new("user_data", Level::INFO, "id=1;").with_timestamp(local);

        assert_eq!(
            engine.format_record(&record),
            "[PII] user_data INFO 2024-03-01 12:00:00,000: id=1;"
        );
    }
}
