use keygate_core::{
    CredentialStore, DisplayName, Email, EventPublisher, IdentityEvent, IssuedToken, Password,
    SecretHasher, TokenIssuer, User,
};

use crate::error::AuthError;

/// Register use case - creates a new identity and issues its first token.
pub struct RegisterUseCase<'a, C, H, T, P>
where
    C: CredentialStore,
    H: SecretHasher,
    T: TokenIssuer,
    P: EventPublisher,
{
    credential_store: &'a C,
    secret_hasher: &'a H,
    token_issuer: &'a T,
    event_publisher: &'a P,
}

impl<'a, C, H, T, P> RegisterUseCase<'a, C, H, T, P>
where
    C: CredentialStore,
    H: SecretHasher,
    T: TokenIssuer,
    P: EventPublisher,
{
    pub fn new(
        credential_store: &'a C,
        secret_hasher: &'a H,
        token_issuer: &'a T,
        event_publisher: &'a P,
    ) -> Self {
        Self {
            credential_store,
            secret_hasher,
            token_issuer,
            event_publisher,
        }
    }

    /// Execute the register use case.
    ///
    /// The password is hashed before any store interaction - plaintext never
    /// crosses the store boundary. Uniqueness is decided entirely inside the
    /// store's atomic insert; a losing concurrent registration observes
    /// `IdentityAlreadyExists`.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
        display_name: DisplayName,
    ) -> Result<IssuedToken, AuthError> {
        let password_hash = self.secret_hasher.hash(&password).await?;
        let user = User::new(email, password_hash, display_name);

        self.credential_store.insert(user.clone()).await?;

        self.event_publisher
            .publish(IdentityEvent::user_created(&user));

        Ok(self.token_issuer.issue(user.email())?)
    }
}
