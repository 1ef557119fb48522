use keygate_core::{CredentialStore, IssuedToken, TokenIssuer};

use crate::{authorize::TokenAuthorizer, error::AuthError};

/// Refresh use case - exchanges a valid token for a fresh one.
///
/// The token issuer only proves the subject was asserted legitimately at
/// issuance time, so this use case re-confirms through the credential store
/// that the subject still exists. Without that check, a deleted user's
/// stale token could keep refreshing indefinitely.
pub struct RefreshTokenUseCase<'a, C, T>
where
    C: CredentialStore,
    T: TokenIssuer,
{
    authorizer: TokenAuthorizer<'a, C, T>,
    token_issuer: &'a T,
}

impl<'a, C, T> RefreshTokenUseCase<'a, C, T>
where
    C: CredentialStore,
    T: TokenIssuer,
{
    pub fn new(credential_store: &'a C, token_issuer: &'a T) -> Self {
        Self {
            authorizer: TokenAuthorizer::new(credential_store, token_issuer),
            token_issuer,
        }
    }

    #[tracing::instrument(name = "RefreshTokenUseCase::execute", skip_all)]
    pub async fn execute(&self, raw_token: &str) -> Result<IssuedToken, AuthError> {
        let user = self.authorizer.resolve(raw_token).await?;
        Ok(self.token_issuer.issue(user.email())?)
    }
}
