//! Access gate composing the path policy with an authentication strategy.
//!
//! This is the decision a request pipeline makes before routing:
//!
//! ```text
//! HTTP Request
//!   ↓
//! Framework-specific code implements RequestLike (or builds a RequestAdapter)
//!   ↓
//! AccessGate::evaluate()
//!   ↓
//! Public             → route without authentication
//! Credentialed(cred) → hand cred to the external verifier
//! MissingCredential  → reject (typically 401)
//! ```
//!
//! The gate never verifies the credential it returns.

use crate::auth::AuthStrategy;
use crate::credential::Credential;
use crate::path_policy::PathPolicy;

use super::RequestLike;

/// Outcome of evaluating a request at the access gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The path is excluded from authentication
    Public,
    /// Authentication is required and the request carries a credential
    Credentialed(Credential),
    /// Authentication is required and no credential was found
    MissingCredential,
}

impl AccessDecision {
    /// Returns `true` if the request may proceed without verification.
    pub fn is_public(&self) -> bool {
        matches!(self, AccessDecision::Public)
    }

    /// Returns the credential to verify, if any.
    pub fn credential(&self) -> Option<&Credential> {
        match self {
            AccessDecision::Credentialed(credential) => Some(credential),
            _ => None,
        }
    }
}

/// Path policy plus credential strategy, evaluated per request.
///
/// # Examples
///
/// ```
/// use policy_guard::{HeaderAuth, PathPolicy};
/// use policy_guard::web::{AccessDecision, AccessGate, RequestAdapter};
///
/// let gate = AccessGate::new(
///     PathPolicy::new(["/api/v1/status/", "/api/v1/unauthorized/"]),
///     HeaderAuth,
/// );
///
/// let status = RequestAdapter::new("/api/v1/status");
/// assert_eq!(gate.evaluate(&status), AccessDecision::Public);
///
/// let anonymous = RequestAdapter::new("/api/v1/users");
/// assert_eq!(gate.evaluate(&anonymous), AccessDecision::MissingCredential);
///
/// let authed = RequestAdapter::new("/api/v1/users").with_header("Authorization", "Basic x");
/// assert_eq!(gate.evaluate(&authed).credential().unwrap().expose(), "Basic x");
/// ```
#[derive(Debug, Clone)]
pub struct AccessGate<S> {
    policy: PathPolicy,
    strategy: S,
}

impl<S: AuthStrategy> AccessGate<S> {
    /// Creates a gate from a policy and a strategy.
    pub fn new(policy: PathPolicy, strategy: S) -> Self {
        Self { policy, strategy }
    }

    /// Returns the path policy.
    pub fn policy(&self) -> &PathPolicy {
        &self.policy
    }

    /// Returns the authentication strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Decides what the pipeline should do with `request`.
    pub fn evaluate<R: RequestLike>(&self, request: &R) -> AccessDecision {
        let path = request.path();

        if !self.policy.requires_auth(path) {
            tracing::debug!(path, "public path");
            return AccessDecision::Public;
        }

        match self.strategy.credential(Some(request as &dyn RequestLike)) {
            Some(credential) => {
                tracing::debug!(path, "credential present");
                AccessDecision::Credentialed(credential)
            }
            None => {
                tracing::debug!(path, "credential missing");
                AccessDecision::MissingCredential
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{HeaderAuth, SessionCookieAuth};
    use crate::web::RequestAdapter;

    fn header_gate() -> AccessGate<HeaderAuth> {
        AccessGate::new(
            PathPolicy::new(["/api/v1/status/", "/api/v1/auth_session/*"]),
            HeaderAuth,
        )
    }

    #[test]
    fn excluded_path_is_public_even_with_credential() {
        let req = RequestAdapter::new("/api/v1/status").with_header("Authorization", "Basic x");
        assert!(header_gate().evaluate(&req).is_public());
    }

    #[test]
    fn wildcard_exclusion_is_public() {
        let req = RequestAdapter::new("/api/v1/auth_session/login");
        assert!(header_gate().evaluate(&req).is_public());
    }

    #[test]
    fn protected_path_without_credential() {
        let req = RequestAdapter::new("/api/v1/users");
        let decision = header_gate().evaluate(&req);

        assert_eq!(decision, AccessDecision::MissingCredential);
        assert!(decision.credential().is_none());
    }

    #[test]
    fn empty_path_is_protected() {
        let req = RequestAdapter::new("");
        assert_eq!(header_gate().evaluate(&req), AccessDecision::MissingCredential);
    }

    #[test]
    fn empty_policy_protects_everything() {
        let gate = AccessGate::new(PathPolicy::default(), HeaderAuth);
        let req = RequestAdapter::new("/api/v1/status");

        assert!(!gate.evaluate(&req).is_public());
    }

    #[test]
    fn cookie_gate_returns_session_credential() {
        let gate = AccessGate::new(
            PathPolicy::new(["/api/v1/status/"]),
            SessionCookieAuth::new("_my_session_id").unwrap(),
        );
        let req = RequestAdapter::new("/api/v1/users/me").with_cookie("_my_session_id", "abc");

        let decision = gate.evaluate(&req);
        assert_eq!(decision.credential().unwrap().expose(), "abc");
        assert_eq!(gate.strategy().cookie_name(), "_my_session_id");
    }

    #[test]
    fn decision_debug_never_shows_credential() {
        let req = RequestAdapter::new("/api/v1/users").with_header("Authorization", "Bearer s3cr3t");
        let decision = header_gate().evaluate(&req);

        let debug = format!("{:?}", decision);
        assert_eq!(debug, "Credentialed([REDACTED])");
    }
}
