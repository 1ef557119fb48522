use chrono::{DateTime, Utc};

/// A freshly signed bearer token together with its expiry instant.
///
/// The token is self-contained: nothing about it is persisted, and its
/// validity is re-derivable at any time from the signature and the embedded
/// expiry claim alone.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The encoded token, handed to the caller verbatim.
    pub token: String,
    /// Instant after which the token stops validating.
    pub expires_at: DateTime<Utc>,
}
