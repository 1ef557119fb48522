use keygate_core::{CredentialStore, TokenIssuer, UserProfile};

use crate::{authorize::TokenAuthorizer, error::AuthError};

/// Get-profile use case - resolves a bearer token to its read-only
/// projection. Pure read: no event, no mutation, idempotent.
pub struct GetProfileUseCase<'a, C, T>
where
    C: CredentialStore,
    T: TokenIssuer,
{
    authorizer: TokenAuthorizer<'a, C, T>,
}

impl<'a, C, T> GetProfileUseCase<'a, C, T>
where
    C: CredentialStore,
    T: TokenIssuer,
{
    pub fn new(credential_store: &'a C, token_issuer: &'a T) -> Self {
        Self {
            authorizer: TokenAuthorizer::new(credential_store, token_issuer),
        }
    }

    #[tracing::instrument(name = "GetProfileUseCase::execute", skip_all)]
    pub async fn execute(&self, raw_token: &str) -> Result<UserProfile, AuthError> {
        let user = self.authorizer.resolve(raw_token).await?;
        Ok(user.profile())
    }
}
