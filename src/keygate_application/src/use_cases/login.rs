use keygate_core::{CredentialStore, Email, IssuedToken, Password, SecretHasher, TokenIssuer};

use crate::error::AuthError;

/// Login use case - verifies a credential pair and issues a fresh token.
///
/// Login mutates nothing and therefore emits no event. An unknown email and
/// a wrong password surface as distinct errors (`IdentityNotFound` vs
/// `InvalidCredential`), matching the upstream behavior this service
/// replaces; see DESIGN.md for the enumeration trade-off.
pub struct LoginUseCase<'a, C, H, T>
where
    C: CredentialStore,
    H: SecretHasher,
    T: TokenIssuer,
{
    credential_store: &'a C,
    secret_hasher: &'a H,
    token_issuer: &'a T,
}

impl<'a, C, H, T> LoginUseCase<'a, C, H, T>
where
    C: CredentialStore,
    H: SecretHasher,
    T: TokenIssuer,
{
    pub fn new(credential_store: &'a C, secret_hasher: &'a H, token_issuer: &'a T) -> Self {
        Self {
            credential_store,
            secret_hasher,
            token_issuer,
        }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<IssuedToken, AuthError> {
        let user = self.credential_store.find_by_email(&email).await?;

        if !self
            .secret_hasher
            .verify(&password, user.password_hash())
            .await
        {
            return Err(AuthError::InvalidCredential);
        }

        Ok(self.token_issuer.issue(user.email())?)
    }
}
