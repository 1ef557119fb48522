use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use keygate_core::{CredentialStore, CredentialStoreError, DisplayName, Email, User, UserId};

/// In-memory credential store for tests and local development.
///
/// The uniqueness check and the insert happen under one write-lock
/// acquisition, so concurrent duplicate registrations resolve the same way
/// they do against a database unique constraint: one winner, one
/// `DuplicateIdentity`.
#[derive(Default, Clone)]
pub struct InMemoryCredentialStore {
    users: Arc<RwLock<HashMap<Email, User>>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn exists(&self, email: &Email) -> Result<bool, CredentialStoreError> {
        Ok(self.users.read().await.contains_key(email))
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, CredentialStoreError> {
        self.users
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(CredentialStoreError::NotFound)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, CredentialStoreError> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.id() == *id)
            .cloned()
            .ok_or(CredentialStoreError::NotFound)
    }

    async fn insert(&self, user: User) -> Result<(), CredentialStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email()) {
            return Err(CredentialStoreError::DuplicateIdentity);
        }
        users.insert(user.email().clone(), user);
        Ok(())
    }

    async fn update_display_name(
        &self,
        id: &UserId,
        display_name: DisplayName,
    ) -> Result<User, CredentialStoreError> {
        let mut users = self.users.write().await;
        let user = users
            .values_mut()
            .find(|user| user.id() == *id)
            .ok_or(CredentialStoreError::NotFound)?;
        user.set_display_name(display_name);
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use fake::Fake;
    use fake::faker::internet::en::SafeEmail;
    use secrecy::Secret;

    use super::*;
    use keygate_core::PasswordHash;

    fn user(email: &str, name: &str) -> User {
        User::new(
            Email::try_from(Secret::from(email.to_string())).unwrap(),
            PasswordHash::new(Secret::from("$argon2id$stub".to_string())),
            DisplayName::try_from(name.to_string()).unwrap(),
        )
    }

    fn random_email() -> Email {
        let raw: String = SafeEmail().fake();
        Email::try_from(Secret::from(raw)).unwrap()
    }

    #[tokio::test]
    async fn insert_then_lookup_round_trips() {
        let store = InMemoryCredentialStore::new();
        let ann = user("a@x.com", "Ann");
        store.insert(ann.clone()).await.unwrap();

        assert!(store.exists(ann.email()).await.unwrap());
        assert_eq!(store.find_by_email(ann.email()).await.unwrap().id(), ann.id());
        assert_eq!(store.find_by_id(&ann.id()).await.unwrap().id(), ann.id());
    }

    #[tokio::test]
    async fn second_insert_with_same_email_is_rejected() {
        let store = InMemoryCredentialStore::new();
        store.insert(user("a@x.com", "Ann")).await.unwrap();

        let result = store.insert(user("a@x.com", "Impostor")).await;
        assert_eq!(result, Err(CredentialStoreError::DuplicateIdentity));
    }

    #[tokio::test]
    async fn concurrent_duplicate_inserts_have_exactly_one_winner() {
        let store = InMemoryCredentialStore::new();
        let email = random_email();
        let first = user(email.as_str(), "Ann");
        let second = user(email.as_str(), "Impostor");

        let a = tokio::spawn({
            let store = store.clone();
            async move { store.insert(first).await }
        });
        let b = tokio::spawn({
            let store = store.clone();
            async move { store.insert(second).await }
        });

        let (a, b) = (a.await.unwrap(), b.await.unwrap());
        assert!(
            a.is_ok() != b.is_ok(),
            "exactly one concurrent insert must win: {a:?} / {b:?}"
        );
        let loser = if a.is_err() { a } else { b };
        assert_eq!(loser, Err(CredentialStoreError::DuplicateIdentity));
    }

    #[tokio::test]
    async fn update_display_name_is_last_write_wins() {
        let store = InMemoryCredentialStore::new();
        let ann = user("a@x.com", "Ann");
        store.insert(ann.clone()).await.unwrap();

        store
            .update_display_name(&ann.id(), DisplayName::try_from("Annie".to_string()).unwrap())
            .await
            .unwrap();
        let updated = store
            .update_display_name(&ann.id(), DisplayName::try_from("Anne".to_string()).unwrap())
            .await
            .unwrap();

        assert_eq!(updated.display_name().as_str(), "Anne");
        assert_eq!(
            store.find_by_id(&ann.id()).await.unwrap().display_name().as_str(),
            "Anne"
        );
    }

    #[tokio::test]
    async fn missing_records_report_not_found() {
        let store = InMemoryCredentialStore::new();
        let result = store.find_by_email(&random_email()).await;
        assert_eq!(result.err(), Some(CredentialStoreError::NotFound));
    }
}
