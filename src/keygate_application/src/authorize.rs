use keygate_core::{CredentialStore, TokenIssuer, User};

use crate::error::AuthError;

/// The single authorization sequence shared by every protected operation:
/// validate the bearer token, then re-confirm the subject still resolves to
/// a live user.
///
/// Centralized here so call sites cannot drift apart - refresh, profile
/// reads, and profile updates all pass through this exact path, and so will
/// any future protected operation.
pub struct TokenAuthorizer<'a, C, T>
where
    C: CredentialStore,
    T: TokenIssuer,
{
    credential_store: &'a C,
    token_issuer: &'a T,
}

impl<'a, C, T> TokenAuthorizer<'a, C, T>
where
    C: CredentialStore,
    T: TokenIssuer,
{
    pub fn new(credential_store: &'a C, token_issuer: &'a T) -> Self {
        Self {
            credential_store,
            token_issuer,
        }
    }

    /// Resolve a raw bearer token to the live user it asserts.
    ///
    /// Fails `InvalidToken` on any token problem and `IdentityNotFound` when
    /// the subject no longer exists - a deleted user's stale token must not
    /// keep authorizing.
    pub async fn resolve(&self, raw_token: &str) -> Result<User, AuthError> {
        let subject = self.token_issuer.validate(raw_token)?;
        let user = self.credential_store.find_by_email(&subject).await?;
        Ok(user)
    }
}
