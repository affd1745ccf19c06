//! `tracing-subscriber` integration.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use super::engine::RedactionEngine;
use super::record::{render, LogRecord};

/// Event formatter that redacts every event before it is written.
///
/// The event's message and any other recorded fields (rendered as
/// `key=value<sep>` pairs after the message) are redacted separately, so an
/// unterminated value at the end of the message cannot run into the fields.
/// The result is written through the engine's record template, one line per
/// event.
///
/// # Examples
///
/// ```
/// use policy_guard::redact::{RedactingFormatter, RedactionConfig};
///
/// let engine = RedactionConfig::pii().build().unwrap();
/// let subscriber = tracing_subscriber::fmt()
///     .event_format(RedactingFormatter::new(engine))
///     .with_writer(std::io::stderr)
///     .finish();
///
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::info!("name=Bob;password=hunter2;");
/// });
/// ```
#[derive(Debug, Clone)]
pub struct RedactingFormatter {
    engine: RedactionEngine,
}

impl RedactingFormatter {
    /// Wraps an engine as an event formatter.
    pub fn new(engine: RedactionEngine) -> Self {
        Self { engine }
    }

    /// Returns the engine used for redaction.
    pub fn engine(&self) -> &RedactionEngine {
        &self.engine
    }
}

impl<S, N> FormatEvent<S, N> for RedactingFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        let mut visitor = EventVisitor::new(self.engine.separator());
        event.record(&mut visitor);

        let (message, fields) = visitor.finish();
        let redacted = join(&self.engine.redact(&message), &self.engine.redact(&fields));

        let raw = join(&message, &fields);
        let record = LogRecord::new(metadata.target(), *metadata.level(), raw);
        writeln!(writer, "{}", render(self.engine.tag(), &record, &redacted))
    }
}

fn join(message: &str, fields: &str) -> String {
    match (message.is_empty(), fields.is_empty()) {
        (_, true) => message.to_owned(),
        (true, false) => fields.to_owned(),
        (false, false) => format!("{} {}", message, fields),
    }
}

/// Flattens an event into a single `message key=value<sep>...` string.
struct EventVisitor {
    separator: char,
    message: String,
    fields: String,
}

impl EventVisitor {
    fn new(separator: char) -> Self {
        Self {
            separator,
            message: String::new(),
            fields: String::new(),
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        // Writing into a String cannot fail.
        let _ = write!(self.fields, "{}={}{}", name, value, self.separator);
    }

    fn finish(self) -> (String, String) {
        (self.message, self.fields)
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), format_args!("{}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }
}
