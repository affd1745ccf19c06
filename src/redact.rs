//! Structured-log redaction.
//!
//! This module provides:
//! - `RedactionEngine`: Replaces the values of sensitive `field=value` pairs
//! - `LogRecord`: A log record rendered through the engine's fixed template
//! - `RedactingFormatter`: A `tracing-subscriber` event formatter that redacts
//!   every event before it is written
//! - `LogLine`: Builder for messages in the `key=value<sep>` shape
//!
//! Redaction is safe by default:
//! - Field names and separators are matched literally, never as patterns
//! - Everything outside a matched value is left byte-identical
//! - A constructed engine never fails at call time

#[cfg(test)]
mod capture;
mod engine;
mod formatter;
mod line;
mod record;

pub use engine::{
    redact, RedactionConfig, RedactionEngine, DEFAULT_SEPARATOR, DEFAULT_TAG, DEFAULT_TOKEN,
    PII_FIELDS,
};
pub use formatter::RedactingFormatter;
pub use line::LogLine;
pub use record::{format_record, LogRecord, TIMESTAMP_FORMAT};
