//! Access-policy and log-redaction primitives for request middleware.
//!
//! This crate provides the decision pieces a request pipeline plugs into its
//! own authentication flow:
//! - **Path policy**: Is this path exempt from authentication?
//! - **Credential extraction**: What raw credential did the client send?
//! - **Redaction**: Obfuscate sensitive `field=value` pairs before a log line
//!   leaves the process
//!
//! Nothing here verifies credentials, stores sessions or writes logs itself.
//! Every configured type is immutable after construction and safe to share
//! across request-handling threads.
//!
//! # Core Types
//!
//! - [`PathPolicy`]: Exclusion patterns plus credential extraction
//! - [`AuthStrategy`]: Where a credential lives and whom it belongs to
//! - [`Credential`]: Raw credential that redacts itself in logs/output
//! - [`RedactionEngine`](redact::RedactionEngine): Field-value redaction
//! - [`web::AccessGate`]: Policy and strategy composed into one decision
//!
//! # Examples
//!
//! ```
//! use policy_guard::{requires_auth, PathPolicy};
//! use policy_guard::redact::RedactionEngine;
//! use policy_guard::web::RequestAdapter;
//!
//! // Decide whether a path needs authentication
//! let excluded = ["/api/v1/status/", "/api/v1/public/*"];
//! assert!(!requires_auth("/api/v1/status", &excluded));
//! assert!(!requires_auth("/api/v1/public/docs", &excluded));
//! assert!(requires_auth("/api/v1/users", &excluded));
//!
//! // Pull the raw credential out of the request
//! let policy = PathPolicy::new(excluded);
//! let req = RequestAdapter::new("/api/v1/users").with_header("Authorization", "Basic Ym9iOnB3");
//! assert_eq!(policy.authorization_header(Some(&req)), Some("Basic Ym9iOnB3"));
//!
//! // Redact a log line
//! let engine = RedactionEngine::new(["password", "ssn"], "***", ';').unwrap();
//! assert_eq!(
//!     engine.redact("name=Bob;password=hunter2;ssn=123-45-6789;"),
//!     "name=Bob;password=***;ssn=***;"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod config;
mod credential;
mod error;
pub mod logging;
mod path_policy;
pub mod redact;
mod request;
pub mod web;

pub use auth::{AuthStrategy, HeaderAuth, SessionCookieAuth};
pub use config::{GuardConfig, GuardConfigBuilder, EXCLUDED_PATHS_VAR, SESSION_NAME_VAR};
pub use credential::Credential;
pub use error::{ConfigError, ConfigErrorKind, Error};
pub use path_policy::{
    authorization_header, requires_auth, session_cookie, ExclusionSet, PathPolicy,
    AUTHORIZATION_HEADER,
};
pub use request::UserIdentity;
