//! Web framework integration surface.
//!
//! This module provides the boundary between HTTP frameworks and
//! policy-guard's decision primitives. It handles:
//! - Describing the read-only view of a request the core needs (`RequestLike`)
//! - An owned request snapshot for bridges and tests (`RequestAdapter`)
//! - Composing the path policy with a credential strategy (`AccessGate`)
//!
//! # Design Principles
//!
//! 1. **No Framework Dependencies**: This module contains no framework-specific code.
//!    It defines interfaces that framework-specific code can implement.
//!
//! 2. **Extract, Never Verify**: Credentials leave the gate as raw
//!    [`Credential`](crate::Credential) values for an external verifier.
//!
//! 3. **Fail Secure**: Missing paths, headers or cookies downgrade to
//!    "authentication required" or "no value", never to a panic.
//!
//! 4. **Explicit Context**: No global state. Configuration is injected at
//!    construction.
//!
//! # Example Flow
//!
//! ```ignore
//! // In a framework-specific integration (e.g., axum, actix):
//!
//! // 1. Bridge the framework request
//! let adapter = RequestAdapter::new(req.uri().path())
//!     .with_header("Authorization", auth_header);
//!
//! // 2. Decide
//! match gate.evaluate(&adapter) {
//!     AccessDecision::Public => next.run(req).await,
//!     AccessDecision::Credentialed(cred) => verify(cred)?,
//!     AccessDecision::MissingCredential => return Err(StatusCode::UNAUTHORIZED),
//! }
//! ```

mod adapter;
mod extract;
mod middleware;

pub use adapter::RequestAdapter;
pub use extract::RequestLike;
pub use middleware::{AccessDecision, AccessGate};
