//! Process-level configuration for the path policy.
//!
//! Configuration is resolved once at startup and injected into
//! [`PathPolicy`](crate::PathPolicy). Nothing in the crate reads the
//! environment while handling a request.

use std::env;

use crate::error::{ConfigError, ConfigErrorKind};
use crate::path_policy::ExclusionSet;

/// Environment variable naming the session cookie.
pub const SESSION_NAME_VAR: &str = "SESSION_NAME";

/// Environment variable holding comma-separated exclusion patterns.
pub const EXCLUDED_PATHS_VAR: &str = "AUTH_EXCLUDED_PATHS";

/// Resolved, validated configuration.
///
/// # Examples
///
/// ```
/// use policy_guard::GuardConfig;
///
/// let config = GuardConfig::builder()
///     .exclude("/api/v1/status/")
///     .exclude("/api/v1/auth_session/login/")
///     .session_cookie("_my_session_id")
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.excluded_paths().len(), 2);
/// assert_eq!(config.session_cookie_name(), Some("_my_session_id"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GuardConfig {
    excluded: ExclusionSet,
    session_cookie: Option<String>,
}

impl GuardConfig {
    /// Starts building a configuration.
    pub fn builder() -> GuardConfigBuilder {
        GuardConfigBuilder::default()
    }

    /// Loads configuration from the process environment.
    ///
    /// Reads [`SESSION_NAME_VAR`] and [`EXCLUDED_PATHS_VAR`]. Either may be
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigErrorKind::EmptyCookieName`] if `SESSION_NAME` is set
    /// but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// This is [`from_env`](Self::from_env) with the source injected, for
    /// callers that keep settings elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use policy_guard::GuardConfig;
    ///
    /// let config = GuardConfig::from_lookup(|key| match key {
    ///     "SESSION_NAME" => Some("_my_session_id".to_string()),
    ///     "AUTH_EXCLUDED_PATHS" => Some("/api/v1/status/, /api/v1/stats/".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.excluded_paths().len(), 2);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(paths) = lookup(EXCLUDED_PATHS_VAR) {
            for pattern in paths.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                builder = builder.exclude(pattern);
            }
        }

        if let Some(name) = lookup(SESSION_NAME_VAR) {
            builder = builder.session_cookie(name);
        }

        let config = builder.build()?;
        tracing::debug!(
            excluded = config.excluded.len(),
            session_cookie = config.session_cookie.is_some(),
            "loaded path policy configuration"
        );
        Ok(config)
    }

    /// Returns the exclusion patterns.
    pub fn excluded_paths(&self) -> &ExclusionSet {
        &self.excluded
    }

    /// Returns the session cookie name, if configured.
    pub fn session_cookie_name(&self) -> Option<&str> {
        self.session_cookie.as_deref()
    }
}

/// Builder for [`GuardConfig`].
#[derive(Debug, Default)]
pub struct GuardConfigBuilder {
    excluded: Vec<String>,
    session_cookie: Option<String>,
}

impl GuardConfigBuilder {
    /// Adds an exclusion pattern.
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.excluded.push(pattern.into());
        self
    }

    /// Sets the session cookie name.
    pub fn session_cookie(mut self, name: impl Into<String>) -> Self {
        self.session_cookie = Some(name.into());
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigErrorKind::EmptyCookieName`] if a session cookie name
    /// was given but is empty.
    pub fn build(self) -> Result<GuardConfig, ConfigError> {
        if matches!(self.session_cookie.as_deref(), Some("")) {
            return Err(ConfigError::new(
                ConfigErrorKind::EmptyCookieName,
                format!("{} is set but empty", SESSION_NAME_VAR),
            ));
        }

        Ok(GuardConfig {
            excluded: ExclusionSet::new(self.excluded),
            session_cookie: self.session_cookie,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lookup_yields_empty_config() {
        let config = GuardConfig::from_lookup(|_| None).unwrap();

        assert!(config.excluded_paths().is_empty());
        assert!(config.session_cookie_name().is_none());
    }

    #[test]
    fn lookup_splits_and_trims_patterns() {
        let config = GuardConfig::from_lookup(|key| {
            (key == EXCLUDED_PATHS_VAR).then(|| " /a/ ,, /b/* ,".to_string())
        })
        .unwrap();

        let patterns: Vec<&str> = config.excluded_paths().iter().collect();
        assert_eq!(patterns, vec!["/a/", "/b/*"]);
    }

    #[test]
    fn empty_session_name_is_rejected() {
        let err = GuardConfig::from_lookup(|key| (key == SESSION_NAME_VAR).then(String::new))
            .unwrap_err();

        assert_eq!(err.kind(), ConfigErrorKind::EmptyCookieName);
        assert!(err.message().contains(SESSION_NAME_VAR));
    }

    #[test]
    fn builder_preserves_pattern_order() {
        let config = GuardConfig::builder()
            .exclude("/first/")
            .exclude("/second/")
            .build()
            .unwrap();

        let patterns: Vec<&str> = config.excluded_paths().iter().collect();
        assert_eq!(patterns, vec!["/first/", "/second/"]);
    }
}
