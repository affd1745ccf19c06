use std::fmt;

/// Raw, unverified authentication material pulled from a request.
///
/// A `Credential` is whatever the client sent in the `Authorization` header
/// or the session cookie. Its contents are never parsed or checked here;
/// that is the job of an external verifier.
///
/// The value cannot be printed by accident: `Debug` and `Display` always
/// render `[REDACTED]`. Use [`expose`](Self::expose) to hand it to the
/// verifier.
///
/// # Examples
///
/// ```
/// use policy_guard::Credential;
///
/// let credential = Credential::new("Bearer abc.def.ghi");
///
/// assert_eq!(format!("{:?}", credential), "[REDACTED]");
/// assert_eq!(format!("{}", credential), "[REDACTED]");
/// assert_eq!(credential.expose(), "Bearer abc.def.ghi");
/// ```
// Do not derive Debug or Display; both must stay redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    raw: String,
}

impl Credential {
    /// Wraps raw credential material.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns the raw value for verification.
    ///
    /// The result must not be logged.
    pub fn expose(&self) -> &str {
        &self.raw
    }

    /// Consumes the credential and returns the raw value.
    pub fn into_inner(self) -> String {
        self.raw
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_redacts_debug() {
        let credential = Credential::new("hunter2");
        let debug_output = format!("{:?}", credential);

        assert_eq!(debug_output, "[REDACTED]");
        assert!(!debug_output.contains("hunter2"));
        assert!(!debug_output.contains("Credential"));
    }

    #[test]
    fn credential_redacts_display() {
        let credential = Credential::new("Basic dXNlcjpwYXNz");
        let display_output = format!("{}", credential);

        assert_eq!(display_output, "[REDACTED]");
        assert!(!display_output.contains("Basic"));
    }

    #[test]
    fn credential_redacts_inside_containers() {
        let maybe = Some(Credential::new("session-123"));
        assert_eq!(format!("{:?}", maybe), "Some([REDACTED])");
    }

    #[test]
    fn credential_exposes_when_explicit() {
        let credential = Credential::new("token");
        assert_eq!(credential.expose(), "token");
        assert_eq!(credential.into_inner(), "token".to_string());
    }
}
