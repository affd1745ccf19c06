//! Redacting subscriber setup.
//!
//! Builds a `tracing-subscriber` fmt subscriber that writes every event to
//! stderr through a [`RedactingFormatter`], so that sensitive field values
//! never reach the sink.

use tracing::subscriber::SetGlobalDefaultError;
use tracing::{Level, Subscriber};

use crate::redact::{RedactingFormatter, RedactionEngine};

/// Builds a stderr subscriber that redacts with `engine` and drops events
/// above `max_level`.
///
/// # Examples
///
/// ```
/// use policy_guard::logging;
/// use policy_guard::redact::RedactionConfig;
/// use tracing::Level;
///
/// let engine = RedactionConfig::pii().build().unwrap();
/// let subscriber = logging::subscriber(engine, Level::INFO);
///
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::info!(target: "user_data", "name=Bob;ip=127.0.0.1;");
/// });
/// ```
pub fn subscriber(
    engine: RedactionEngine,
    max_level: Level,
) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .event_format(RedactingFormatter::new(engine))
        .with_writer(std::io::stderr)
        .with_max_level(max_level)
        .finish()
}

/// Installs [`subscriber`] as the process-wide default.
///
/// # Errors
///
/// Fails if a global default subscriber is already installed.
pub fn init(engine: RedactionEngine, max_level: Level) -> Result<(), SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(subscriber(engine, max_level))
}
