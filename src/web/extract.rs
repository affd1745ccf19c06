//! Extraction boundary trait for web integration.
//!
//! This module defines the only view of an HTTP request the core relies on.

/// Read-only view of an inbound request.
///
/// Any transport (an HTTP framework's request type, a test double) can
/// satisfy this trait. The core only reads through it and never mutates the
/// request.
///
/// Implementations must return `None` for anything that is missing rather
/// than panicking: every value behind this trait is attacker-controlled.
///
/// # Examples
///
/// ```
/// use policy_guard::web::RequestLike;
///
/// // Example framework-specific implementation
/// struct MyFrameworkRequest {
///     uri_path: String,
///     bearer: Option<String>,
/// }
///
/// impl RequestLike for MyFrameworkRequest {
///     fn path(&self) -> &str {
///         &self.uri_path
///     }
///
///     fn header(&self, name: &str) -> Option<&str> {
///         if name.eq_ignore_ascii_case("authorization") {
///             self.bearer.as_deref()
///         } else {
///             None
///         }
///     }
///
///     fn cookie(&self, _name: &str) -> Option<&str> {
///         None
///     }
/// }
///
/// let req = MyFrameworkRequest {
///     uri_path: "/api/v1/users".to_string(),
///     bearer: Some("Bearer t0k3n".to_string()),
/// };
/// assert_eq!(req.header("Authorization"), Some("Bearer t0k3n"));
/// ```
pub trait RequestLike {
    /// Returns the request path (without query string).
    fn path(&self) -> &str;

    /// Returns the value of the named header, if present.
    fn header(&self, name: &str) -> Option<&str>;

    /// Returns the value of the named cookie, if present.
    fn cookie(&self, name: &str) -> Option<&str>;
}

impl<T: RequestLike + ?Sized> RequestLike for &T {
    fn path(&self) -> &str {
        (**self).path()
    }

    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        (**self).cookie(name)
    }
}
