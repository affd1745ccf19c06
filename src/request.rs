/// An identity resolved for the caller of a request.
///
/// The core never produces one of these on its own; a concrete
/// [`AuthStrategy`](crate::AuthStrategy) that verifies credentials against a
/// backing store is expected to build it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    /// Unique identifier for this user
    pub id: String,
    /// Display name or email
    pub name: String,
}
