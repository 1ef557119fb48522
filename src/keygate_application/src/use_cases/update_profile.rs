use keygate_core::{
    CredentialStore, DisplayName, EventPublisher, IdentityEvent, TokenIssuer, UserProfile,
};

use crate::{authorize::TokenAuthorizer, error::AuthError};

/// Update-profile use case - mutates the display name of the token's
/// subject and emits exactly one `UserUpdated` event.
///
/// The only store interaction is the single atomic per-record update;
/// concurrent updates serialize to last-write-wins.
pub struct UpdateProfileUseCase<'a, C, T, P>
where
    C: CredentialStore,
    T: TokenIssuer,
    P: EventPublisher,
{
    authorizer: TokenAuthorizer<'a, C, T>,
    credential_store: &'a C,
    event_publisher: &'a P,
}

impl<'a, C, T, P> UpdateProfileUseCase<'a, C, T, P>
where
    C: CredentialStore,
    T: TokenIssuer,
    P: EventPublisher,
{
    pub fn new(credential_store: &'a C, token_issuer: &'a T, event_publisher: &'a P) -> Self {
        Self {
            authorizer: TokenAuthorizer::new(credential_store, token_issuer),
            credential_store,
            event_publisher,
        }
    }

    #[tracing::instrument(name = "UpdateProfileUseCase::execute", skip(self, raw_token))]
    pub async fn execute(
        &self,
        raw_token: &str,
        display_name: DisplayName,
    ) -> Result<UserProfile, AuthError> {
        let user = self.authorizer.resolve(raw_token).await?;

        let updated = self
            .credential_store
            .update_display_name(&user.id(), display_name)
            .await?;

        self.event_publisher.publish(IdentityEvent::user_updated(
            &updated,
            vec!["displayName".to_string()],
        ));

        Ok(updated.profile())
    }
}
