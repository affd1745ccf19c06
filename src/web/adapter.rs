//! Request adapter for mapping HTTP requests to policy-guard types.

use std::collections::HashMap;

use super::RequestLike;

/// Owned, framework-agnostic request snapshot.
///
/// `RequestAdapter` is the simplest way to satisfy [`RequestLike`]: copy the
/// path, headers and cookies out of a framework request once, then hand the
/// adapter to [`PathPolicy`](crate::PathPolicy) or an
/// [`AccessGate`](crate::web::AccessGate).
///
/// Header names are matched case-insensitively, as HTTP requires. Cookie
/// names are matched exactly.
///
/// # Examples
///
/// ```
/// use policy_guard::web::{RequestAdapter, RequestLike};
///
/// let mut adapter = RequestAdapter::new("/api/v1/users");
/// adapter.add_header("Authorization", "Basic dXNlcjpwYXNz");
/// adapter.add_cookie("_my_session_id", "5535d4d7");
///
/// assert_eq!(adapter.path(), "/api/v1/users");
/// assert_eq!(adapter.header("authorization"), Some("Basic dXNlcjpwYXNz"));
/// assert_eq!(adapter.cookie("_my_session_id"), Some("5535d4d7"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestAdapter {
    path: String,
    /// Keyed by lowercased header name
    headers: HashMap<String, String>,
    cookies: HashMap<String, String>,
}

impl RequestAdapter {
    /// Creates a new request adapter for the given path.
    ///
    /// Headers and cookies start empty. Use the `add_*` methods to populate
    /// them.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            headers: HashMap::new(),
            cookies: HashMap::new(),
        }
    }

    /// Adds a header, replacing any previous value under the same name.
    pub fn add_header(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
    }

    /// Adds a cookie, replacing any previous value under the same name.
    pub fn add_cookie(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.cookies.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`add_header`](Self::add_header).
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.add_header(name, value);
        self
    }

    /// Builder-style variant of [`add_cookie`](Self::add_cookie).
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_cookie(name, value);
        self
    }

    /// Returns the number of headers carried.
    pub fn headers_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns the number of cookies carried.
    pub fn cookies_count(&self) -> usize {
        self.cookies.len()
    }
}

impl RequestLike for RequestAdapter {
    fn path(&self) -> &str {
        &self.path
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_adapter_new() {
        let adapter = RequestAdapter::new("/api/v1/status");
        assert_eq!(adapter.path(), "/api/v1/status");
        assert_eq!(adapter.headers_count(), 0);
        assert_eq!(adapter.cookies_count(), 0);
    }

    #[test]
    fn header_lookup_ignores_case() {
        let adapter = RequestAdapter::new("/").with_header("AUTHORIZATION", "Bearer x");

        assert_eq!(adapter.header("Authorization"), Some("Bearer x"));
        assert_eq!(adapter.header("authorization"), Some("Bearer x"));
    }

    #[test]
    fn cookie_lookup_is_exact() {
        let adapter = RequestAdapter::new("/").with_cookie("session_id", "abc");

        assert_eq!(adapter.cookie("session_id"), Some("abc"));
        assert!(adapter.cookie("SESSION_ID").is_none());
    }

    #[test]
    fn missing_values_are_absent() {
        let adapter = RequestAdapter::new("/");

        assert!(adapter.header("Authorization").is_none());
        assert!(adapter.cookie("session_id").is_none());
    }

    #[test]
    fn later_header_replaces_earlier() {
        let mut adapter = RequestAdapter::new("/");
        adapter.add_header("X-Custom", "one");
        adapter.add_header("x-custom", "two");

        assert_eq!(adapter.headers_count(), 1);
        assert_eq!(adapter.header("X-Custom"), Some("two"));
    }
}
