use thiserror::Error;

use crate::domain::{email::Email, token::IssuedToken};

#[derive(Debug, Error)]
pub enum TokenIssuerError {
    /// Malformed, wrongly signed, or expired. Collapsed into one variant so
    /// callers cannot be used as a structural oracle; implementations log
    /// the precise reason internally.
    #[error("invalid token")]
    Invalid,
    #[error("token issuance failed: {0}")]
    Issuance(String),
}

impl PartialEq for TokenIssuerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Invalid, Self::Invalid) => true,
            (Self::Issuance(_), Self::Issuance(_)) => true,
            _ => false,
        }
    }
}

/// Port over stateless token signing and verification.
///
/// Validation is a pure computation over the token bytes and the issuer's
/// key material - no I/O, no locks - which is what lets any number of
/// requests validate concurrently without coordination.
///
/// A token is valid iff its signature verifies against the issuer's current
/// key and `now < expires_at`. This trait only proves "this subject string
/// was asserted legitimately at issuance time"; whether the subject still
/// resolves to a live user is the caller's concern.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, subject: &Email) -> Result<IssuedToken, TokenIssuerError>;
    fn validate(&self, raw: &str) -> Result<Email, TokenIssuerError>;

    /// Equivalent to `validate` followed by `issue` on the same subject. No
    /// re-presentation of the original secret is required.
    fn refresh(&self, raw: &str) -> Result<IssuedToken, TokenIssuerError> {
        let subject = self.validate(raw)?;
        self.issue(&subject)
    }
}
