//! Pluggable authentication strategies.
//!
//! An [`AuthStrategy`] knows where a request carries its credential and,
//! optionally, how to turn that credential into a [`UserIdentity`]. The
//! strategies shipped here only extract; identity resolution belongs to an
//! external verifier that implements its own strategy.

use crate::credential::Credential;
use crate::error::{ConfigError, ConfigErrorKind};
use crate::path_policy::{authorization_header, session_cookie, PathPolicy};
use crate::request::UserIdentity;
use crate::web::RequestLike;

/// Where to find a credential and whom it belongs to.
///
/// # Examples
///
/// ```
/// use policy_guard::{AuthStrategy, Credential, UserIdentity};
/// use policy_guard::web::{RequestAdapter, RequestLike};
///
/// // A strategy that trusts a gateway-injected header
/// struct GatewayAuth;
///
/// impl AuthStrategy for GatewayAuth {
///     fn credential(&self, request: Option<&dyn RequestLike>) -> Option<Credential> {
///         request?.header("X-Gateway-User").map(Credential::new)
///     }
///
///     fn current_user(&self, request: Option<&dyn RequestLike>) -> Option<UserIdentity> {
///         let credential = self.credential(request)?;
///         Some(UserIdentity {
///             id: credential.expose().to_string(),
///             name: credential.expose().to_string(),
///         })
///     }
/// }
///
/// let req = RequestAdapter::new("/").with_header("X-Gateway-User", "alice");
/// assert_eq!(GatewayAuth.current_user(Some(&req)).unwrap().id, "alice");
/// ```
pub trait AuthStrategy {
    /// Extracts raw credential material from the request.
    ///
    /// Returns `None` for an absent request or a missing credential.
    fn credential(&self, request: Option<&dyn RequestLike>) -> Option<Credential>;

    /// Resolves the identity behind the request.
    ///
    /// Defaults to `None`: extraction alone proves nothing.
    fn current_user(&self, _request: Option<&dyn RequestLike>) -> Option<UserIdentity> {
        None
    }
}

/// Reads the credential from the `Authorization` header.
///
/// # Examples
///
/// ```
/// use policy_guard::{AuthStrategy, HeaderAuth};
/// use policy_guard::web::RequestAdapter;
///
/// let req = RequestAdapter::new("/api/v1/users").with_header("Authorization", "Basic Ym9iOnB3ZA==");
///
/// let credential = HeaderAuth.credential(Some(&req)).unwrap();
/// assert_eq!(credential.expose(), "Basic Ym9iOnB3ZA==");
/// assert!(HeaderAuth.current_user(Some(&req)).is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderAuth;

impl AuthStrategy for HeaderAuth {
    fn credential(&self, request: Option<&dyn RequestLike>) -> Option<Credential> {
        authorization_header(request).map(Credential::new)
    }
}

/// Reads the credential from a named session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookieAuth {
    cookie_name: String,
}

impl SessionCookieAuth {
    /// Creates a strategy reading the cookie `cookie_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigErrorKind::EmptyCookieName`] if `cookie_name` is empty.
    pub fn new(cookie_name: impl Into<String>) -> Result<Self, ConfigError> {
        let cookie_name = cookie_name.into();
        if cookie_name.is_empty() {
            return Err(ConfigError::new(
                ConfigErrorKind::EmptyCookieName,
                "session cookie name must not be empty",
            ));
        }
        Ok(Self { cookie_name })
    }

    /// Creates a strategy from the policy's configured cookie name, if any.
    pub fn from_policy(policy: &PathPolicy) -> Option<Self> {
        policy.session_cookie_name().map(|name| Self {
            cookie_name: name.to_owned(),
        })
    }

    /// Returns the cookie name.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

impl AuthStrategy for SessionCookieAuth {
    fn credential(&self, request: Option<&dyn RequestLike>) -> Option<Credential> {
        session_cookie(request, Some(self.cookie_name.as_str())).map(Credential::new)
    }
}
