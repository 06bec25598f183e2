//! Shared-secret check for the state-changing endpoints.
//!
//! Callers send the configured token verbatim in the `Authorization` header.
//! The gate fails closed: an empty token is rejected before any comparison, so
//! a server misconfigured with an empty secret still refuses every request.

use std::fmt;

/// Returns `true` when `provided` is non-empty and equal to `expected`.
///
/// The byte comparison does not short-circuit on the first mismatch.  Only the
/// length of `expected` can be learned from timing.
pub fn authorize(provided: &str, expected: &str) -> bool {
    if provided.is_empty() {
        return false;
    }
    constant_time_eq(provided.as_bytes(), expected.as_bytes())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// The process-wide API token, fixed at startup.
///
/// `Debug` output never contains the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Checks a caller-provided token against this one.  See [`authorize`].
    pub fn verify(&self, provided: &str) -> bool {
        authorize(provided, &self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_token_is_authorized() {
        assert!(authorize("keycontrol", "keycontrol"));
    }

    #[test]
    fn test_mismatched_token_is_rejected() {
        assert!(!authorize("wrong", "keycontrol"));
        assert!(!authorize("keycontrol ", "keycontrol"));
        assert!(!authorize("KEYCONTROL", "keycontrol"));
    }

    #[test]
    fn test_prefix_of_expected_token_is_rejected() {
        assert!(!authorize("key", "keycontrol"));
    }

    #[test]
    fn test_empty_provided_token_is_rejected() {
        assert!(!authorize("", "keycontrol"));
    }

    #[test]
    fn test_empty_versus_empty_is_rejected() {
        // A server started with an empty secret must not accept anonymous calls.
        assert!(!authorize("", ""));
        assert!(!AuthToken::new("").verify(""));
    }

    #[test]
    fn test_auth_token_verify_delegates_to_authorize() {
        let token = AuthToken::new("s3cret");
        assert!(token.verify("s3cret"));
        assert!(!token.verify("s3cre"));
        assert!(!token.is_empty());
    }

    #[test]
    fn test_debug_output_redacts_secret() {
        let rendered = format!("{:?}", AuthToken::new("s3cret"));
        assert!(!rendered.contains("s3cret"));
    }
}
