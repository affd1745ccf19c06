//! Field-value redaction over `field=value<sep>` log lines.

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::error::{ConfigError, ConfigErrorKind};

/// Field names treated as personally identifiable by default.
pub const PII_FIELDS: [&str; 5] = ["name", "email", "phone", "ssn", "password"];

/// Default replacement for redacted values.
pub const DEFAULT_TOKEN: &str = "***";

/// Default delimiter between `field=value` pairs.
pub const DEFAULT_SEPARATOR: char = ';';

/// Default tag printed at the start of each formatted record.
pub const DEFAULT_TAG: &str = "PII";

/// Settings for a [`RedactionEngine`].
///
/// Every setting is fixed once the engine is built; there is no per-call
/// override.
///
/// # Examples
///
/// ```
/// use policy_guard::redact::RedactionConfig;
///
/// let engine = RedactionConfig::new(["password", "ssn"])
///     .token("[hidden]")
///     .separator('|')
///     .build()
///     .expect("fields are configured");
///
/// assert_eq!(engine.redact("user=bob|password=pw|"), "user=bob|password=[hidden]|");
/// ```
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    fields: Vec<String>,
    token: String,
    separator: char,
    tag: String,
}

impl RedactionConfig {
    /// Starts a configuration for the given sensitive fields with the
    /// default token, separator and tag.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            token: DEFAULT_TOKEN.to_string(),
            separator: DEFAULT_SEPARATOR,
            tag: DEFAULT_TAG.to_string(),
        }
    }

    /// Starts a configuration for [`PII_FIELDS`].
    pub fn pii() -> Self {
        Self::new(PII_FIELDS)
    }

    /// Sets the replacement token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Sets the field separator.
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the tag printed by [`RedactionEngine::format_record`].
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Validates the configuration and compiles the engine.
    ///
    /// # Errors
    ///
    /// - [`ConfigErrorKind::EmptyFieldSet`] if no fields were given
    /// - [`ConfigErrorKind::EmptyFieldName`] if any field name is empty
    /// - [`ConfigErrorKind::InvalidPattern`] if the combined pattern is too
    ///   large to compile
    pub fn build(self) -> Result<RedactionEngine, ConfigError> {
        RedactionEngine::from_config(self)
    }
}

/// Replaces the values of sensitive fields in a log line.
///
/// For every configured field, each occurrence of `<field>=` is located and
/// the characters after it, up to (not including) the next separator or the
/// end of the message, are replaced with the token. All fields are matched
/// in one combined pass, leftmost match first.
///
/// Known limitations:
/// - A value that itself contains the separator is cut at the first
///   separator; the remainder is left visible.
/// - A field matches wherever `<field>=` appears, so `name` also matches the
///   tail of `username=`.
/// - An empty value (`field=` directly followed by the separator) is left
///   as-is.
///
/// # Examples
///
/// ```
/// use policy_guard::redact::RedactionEngine;
///
/// let engine = RedactionEngine::new(["password", "ssn"], "***", ';').unwrap();
///
/// assert_eq!(
///     engine.redact("name=Bob;password=hunter2;ssn=123-45-6789;"),
///     "name=Bob;password=***;ssn=***;"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RedactionEngine {
    config: RedactionConfig,
    pattern: Regex,
}

impl RedactionEngine {
    /// Builds an engine with the default tag.
    ///
    /// # Errors
    ///
    /// See [`RedactionConfig::build`].
    pub fn new<I, S>(fields: I, token: impl Into<String>, separator: char) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RedactionConfig::new(fields)
            .token(token)
            .separator(separator)
            .build()
    }

    fn from_config(config: RedactionConfig) -> Result<Self, ConfigError> {
        if config.fields.is_empty() {
            return Err(ConfigError::new(
                ConfigErrorKind::EmptyFieldSet,
                "at least one field is required",
            ));
        }
        if config.fields.iter().any(String::is_empty) {
            return Err(ConfigError::new(
                ConfigErrorKind::EmptyFieldName,
                "field names must not be empty",
            ));
        }

        let pattern = compile(&config.fields, config.separator).map_err(|e| {
            ConfigError::new(ConfigErrorKind::InvalidPattern, e.to_string())
        })?;

        warn_if_ambiguous(&config);

        Ok(Self { config, pattern })
    }

    /// Returns the configured field names in order.
    pub fn fields(&self) -> &[String] {
        &self.config.fields
    }

    /// Returns the replacement token.
    pub fn token(&self) -> &str {
        &self.config.token
    }

    /// Returns the field separator.
    pub fn separator(&self) -> char {
        self.config.separator
    }

    /// Returns the record tag.
    pub fn tag(&self) -> &str {
        &self.config.tag
    }

    /// Redacts `message`.
    ///
    /// Borrows the input when nothing matched.
    pub fn redact<'a>(&self, message: &'a str) -> Cow<'a, str> {
        replace_values(&self.pattern, &self.config.token, message)
    }
}

/// One-shot form of [`RedactionEngine::redact`].
///
/// Never fails: an empty `fields` slice returns the message unchanged. An
/// empty field name matches every `=` in the message. If the combined
/// pattern cannot be compiled the whole message is replaced by `token`, so
/// nothing leaks.
///
/// Prefer a [`RedactionEngine`] when redacting more than one line; it
/// compiles the pattern once.
///
/// # Examples
///
/// ```
/// use policy_guard::redact::redact;
///
/// let out = redact(&["password", "date_of_birth"], "xxx",
///     "name=egg;email=eggmin@eggsample.com;password=eggcellent;date_of_birth=12/12/1986;", ';');
/// assert_eq!(out, "name=egg;email=eggmin@eggsample.com;password=xxx;date_of_birth=xxx;");
/// ```
pub fn redact<'a, S: AsRef<str>>(
    fields: &[S],
    token: &str,
    message: &'a str,
    separator: char,
) -> Cow<'a, str> {
    if fields.is_empty() {
        return Cow::Borrowed(message);
    }

    match compile(fields, separator) {
        Ok(pattern) => replace_values(&pattern, token, message),
        Err(e) => {
            tracing::warn!(error = %e, "redaction pattern failed to compile, suppressing message");
            Cow::Owned(token.to_string())
        }
    }
}

/// Builds `(?P<key>(?:f1|f2|...)=)[^<sep>]+` with every name escaped.
fn compile<S: AsRef<str>>(fields: &[S], separator: char) -> Result<Regex, regex::Error> {
    let alternation = fields
        .iter()
        .map(|f| regex::escape(f.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    let separator = regex::escape(separator.encode_utf8(&mut [0; 4]));

    Regex::new(&format!("(?P<key>(?:{})=)[^{}]+", alternation, separator))
}

fn replace_values<'a>(pattern: &Regex, token: &str, message: &'a str) -> Cow<'a, str> {
    pattern.replace_all(message, |caps: &Captures<'_>| {
        let key = caps.name("key").map_or("", |m| m.as_str());
        format!("{}{}", key, token)
    })
}

fn warn_if_ambiguous(config: &RedactionConfig) {
    if config.token.contains(config.separator) {
        tracing::warn!(
            separator = %config.separator,
            "redaction token contains the field separator; redacted lines will not re-parse cleanly"
        );
    }

    let token_marks_field = config
        .fields
        .iter()
        .any(|field| config.token.contains(&format!("{}=", field)));
    if token_marks_field {
        tracing::warn!("redaction token contains a field marker; redaction is not idempotent");
    }
}
