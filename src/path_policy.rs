//! Path exclusion policy and raw credential extraction.
//!
//! [`PathPolicy`] answers two questions for request middleware:
//! does this path need authentication at all, and if so, what raw
//! credential material did the client send? It never decides whether that
//! material is valid.
//!
//! # Matching rules
//!
//! Both the request path and every exclusion pattern are normalized by
//! appending `/` when missing, so matching is trailing-slash-insensitive.
//! A pattern is then cut at its first `*`, and the path is excluded when it
//! equals the normalized pattern or starts with the cut prefix. Anything
//! after the first `*` is ignored: `/a/*/b` behaves exactly like `/a/`.
//!
//! An empty path or an empty exclusion set always requires authentication.

use std::borrow::Cow;

use crate::config::GuardConfig;
use crate::error::{ConfigError, ConfigErrorKind};
use crate::request::UserIdentity;
use crate::web::RequestLike;

/// Header carrying raw authorization material.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

const PATH_SEPARATOR: char = '/';
const WILDCARD: char = '*';

/// Ordered set of path patterns exempt from authentication.
///
/// Order only affects how quickly a match is found, never the outcome.
///
/// # Examples
///
/// ```
/// use policy_guard::ExclusionSet;
///
/// let excluded = ExclusionSet::new(["/api/v1/status", "/api/v1/auth_session/*"]);
///
/// assert!(excluded.matches("/api/v1/status"));
/// assert!(excluded.matches("/api/v1/auth_session/login"));
/// assert!(!excluded.matches("/api/v1/users"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    patterns: Vec<String>,
}

impl ExclusionSet {
    /// Creates an exclusion set from the given patterns.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if no patterns are configured.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the number of configured patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Iterates over the patterns in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    /// Returns `true` if `path` is exempt from authentication.
    ///
    /// An empty path is never exempt.
    pub fn matches(&self, path: &str) -> bool {
        !requires_auth(path, &self.patterns)
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Decides whether `path` requires authentication.
///
/// Returns `true` (fail secure) when `path` is empty or `excluded` is empty,
/// and `false` as soon as one pattern excludes the path.
///
/// # Examples
///
/// ```
/// use policy_guard::requires_auth;
///
/// let excluded = ["/api/v1/status/", "/api/v1/unauthorized/", "/api/v1/forbidden/"];
///
/// assert!(!requires_auth("/api/v1/status", &excluded));
/// assert!(!requires_auth("/api/v1/status/", &excluded));
/// assert!(requires_auth("/api/v1/users", &excluded));
/// assert!(requires_auth("", &excluded));
/// assert!(requires_auth("/api/v1/status", &[] as &[&str]));
///
/// assert!(!requires_auth("/api/v1/stats", &["/api/v1/stat*"]));
/// ```
pub fn requires_auth<P: AsRef<str>>(path: &str, excluded: &[P]) -> bool {
    if path.is_empty() || excluded.is_empty() {
        return true;
    }

    let path = with_trailing_separator(path);
    for pattern in excluded {
        let pattern = pattern.as_ref();
        if is_excluded_by(&path, pattern) {
            tracing::trace!(path = %path, pattern, "path excluded from authentication");
            return false;
        }
    }

    true
}

/// Returns the raw `Authorization` header value, if any.
///
/// No scheme (`Basic`, `Bearer`, ...) is parsed. An absent request yields
/// `None`.
///
/// # Examples
///
/// ```
/// use policy_guard::authorization_header;
/// use policy_guard::web::RequestAdapter;
///
/// let req = RequestAdapter::new("/api/v1/users").with_header("Authorization", "Basic Zm9vOmJhcg==");
/// assert_eq!(authorization_header(Some(&req)), Some("Basic Zm9vOmJhcg=="));
///
/// let bare = RequestAdapter::new("/api/v1/users");
/// assert_eq!(authorization_header(Some(&bare)), None);
/// assert_eq!(authorization_header::<RequestAdapter>(None), None);
/// ```
pub fn authorization_header<R>(request: Option<&R>) -> Option<&str>
where
    R: RequestLike + ?Sized,
{
    request?.header(AUTHORIZATION_HEADER)
}

/// Returns the value of the session cookie named `cookie_name`, if any.
///
/// An absent request or an unconfigured cookie name yields `None`.
pub fn session_cookie<'r, R>(request: Option<&'r R>, cookie_name: Option<&str>) -> Option<&'r str>
where
    R: RequestLike + ?Sized,
{
    let request = request?;
    request.cookie(cookie_name?)
}

/// Exclusion policy plus credential extraction, configured once.
///
/// A `PathPolicy` is immutable after construction and can be shared across
/// request-handling threads without locking.
///
/// # Examples
///
/// ```
/// use policy_guard::PathPolicy;
/// use policy_guard::web::RequestAdapter;
///
/// let policy = PathPolicy::new(["/api/v1/status/", "/api/v1/auth_session/login/"])
///     .with_session_cookie("_my_session_id")
///     .expect("cookie name is not empty");
///
/// assert!(!policy.requires_auth("/api/v1/status"));
/// assert!(policy.requires_auth("/api/v1/users/me"));
///
/// let req = RequestAdapter::new("/api/v1/users/me").with_cookie("_my_session_id", "c0ffee");
/// assert_eq!(policy.session_cookie(Some(&req)), Some("c0ffee"));
/// assert!(policy.current_user(Some(&req)).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathPolicy {
    excluded: ExclusionSet,
    session_cookie: Option<String>,
}

impl PathPolicy {
    /// Creates a policy with the given exclusion patterns and no session
    /// cookie.
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: ExclusionSet::new(excluded),
            session_cookie: None,
        }
    }

    /// Builds a policy from resolved configuration.
    pub fn from_config(config: &GuardConfig) -> Self {
        Self {
            excluded: config.excluded_paths().clone(),
            session_cookie: config.session_cookie_name().map(str::to_owned),
        }
    }

    /// Sets the name of the cookie that carries the session identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigErrorKind::EmptyCookieName`] if `name` is empty.
    pub fn with_session_cookie(mut self, name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::new(
                ConfigErrorKind::EmptyCookieName,
                "session cookie name must not be empty",
            ));
        }
        self.session_cookie = Some(name);
        Ok(self)
    }

    /// Returns the configured exclusion patterns.
    pub fn excluded_paths(&self) -> &ExclusionSet {
        &self.excluded
    }

    /// Returns the configured session cookie name, if any.
    pub fn session_cookie_name(&self) -> Option<&str> {
        self.session_cookie.as_deref()
    }

    /// Decides whether `path` requires authentication.
    ///
    /// See [`requires_auth`] for the matching rules.
    pub fn requires_auth(&self, path: &str) -> bool {
        requires_auth(path, &self.excluded.patterns)
    }

    /// Returns the raw `Authorization` header value, if any.
    pub fn authorization_header<'r, R>(&self, request: Option<&'r R>) -> Option<&'r str>
    where
        R: RequestLike + ?Sized,
    {
        authorization_header(request)
    }

    /// Returns the raw session cookie value, if a cookie name is configured
    /// and the request carries it.
    pub fn session_cookie<'r, R>(&self, request: Option<&'r R>) -> Option<&'r str>
    where
        R: RequestLike + ?Sized,
    {
        session_cookie(request, self.session_cookie.as_deref())
    }

    /// Resolves the user behind a request.
    ///
    /// The path policy verifies nothing, so this is always `None`. Concrete
    /// strategies override [`AuthStrategy::current_user`](crate::AuthStrategy::current_user).
    pub fn current_user<R>(&self, _request: Option<&R>) -> Option<UserIdentity>
    where
        R: RequestLike + ?Sized,
    {
        None
    }
}

fn with_trailing_separator(s: &str) -> Cow<'_, str> {
    if s.ends_with(PATH_SEPARATOR) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!("{}{}", s, PATH_SEPARATOR))
    }
}

/// `path` must already carry its trailing separator.
fn is_excluded_by(path: &str, pattern: &str) -> bool {
    let pattern = with_trailing_separator(pattern);
    let prefix = match pattern.find(WILDCARD) {
        Some(idx) => &pattern[..idx],
        None => &pattern[..],
    };

    path == pattern || path.starts_with(prefix)
}
