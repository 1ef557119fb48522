use keygate_core::{CredentialStoreError, SecretHasherError, TokenIssuerError, ValidationError};

/// The closed set of failures an authentication operation can surface.
///
/// Callers branch on the variant, never on message strings. The transport
/// layer maps each variant to a status code; this layer only guarantees the
/// variants are distinguishable.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Conflict on the unique email - retrying with the same input cannot
    /// succeed.
    #[error("identity already exists")]
    IdentityAlreadyExists,
    /// Surfaced uniformly whether the email never existed or the user was
    /// deleted after token issuance.
    #[error("identity not found")]
    IdentityNotFound,
    #[error("invalid credential")]
    InvalidCredential,
    #[error("invalid token")]
    InvalidToken,
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl PartialEq for AuthError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::IdentityAlreadyExists, Self::IdentityAlreadyExists) => true,
            (Self::IdentityNotFound, Self::IdentityNotFound) => true,
            (Self::InvalidCredential, Self::InvalidCredential) => true,
            (Self::InvalidToken, Self::InvalidToken) => true,
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

impl From<CredentialStoreError> for AuthError {
    fn from(err: CredentialStoreError) -> Self {
        match err {
            CredentialStoreError::DuplicateIdentity => Self::IdentityAlreadyExists,
            CredentialStoreError::NotFound => Self::IdentityNotFound,
            CredentialStoreError::Unexpected(msg) => Self::Unexpected(msg),
        }
    }
}

impl From<TokenIssuerError> for AuthError {
    fn from(err: TokenIssuerError) -> Self {
        match err {
            TokenIssuerError::Invalid => Self::InvalidToken,
            TokenIssuerError::Issuance(msg) => Self::Unexpected(msg),
        }
    }
}

impl From<SecretHasherError> for AuthError {
    fn from(err: SecretHasherError) -> Self {
        Self::Unexpected(err.to_string())
    }
}
