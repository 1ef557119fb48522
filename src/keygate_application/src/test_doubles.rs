//! Hand-rolled port doubles shared by the use-case tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use keygate_core::{
    CredentialStore, CredentialStoreError, DisplayName, Email, EventPublisher, IdentityEvent,
    IssuedToken, Password, PasswordHash, SecretHasher, SecretHasherError, TokenIssuer,
    TokenIssuerError, User, UserId,
};
use secrecy::{ExposeSecret, Secret};

pub fn test_email(raw: &str) -> Email {
    Email::try_from(Secret::from(raw.to_string())).unwrap()
}

pub fn test_password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_string())).unwrap()
}

/// A user whose password is `pw123456` under [`StubSecretHasher`].
pub fn test_user(email: &str, display_name: &str) -> User {
    User::new(
        test_email(email),
        StubSecretHasher::hash_of("pw123456"),
        DisplayName::try_from(display_name.to_string()).unwrap(),
    )
}

pub fn seeded_store(users: Vec<User>) -> FakeCredentialStore {
    let store = FakeCredentialStore::default();
    {
        let mut guard = store.users.lock().unwrap();
        for user in users {
            guard.insert(user.email().clone(), user);
        }
    }
    store
}

#[derive(Default, Clone)]
pub struct FakeCredentialStore {
    pub users: Arc<Mutex<HashMap<Email, User>>>,
}

#[async_trait]
impl CredentialStore for FakeCredentialStore {
    async fn exists(&self, email: &Email) -> Result<bool, CredentialStoreError> {
        Ok(self.users.lock().unwrap().contains_key(email))
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, CredentialStoreError> {
        self.users
            .lock()
            .unwrap()
            .get(email)
            .cloned()
            .ok_or(CredentialStoreError::NotFound)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, CredentialStoreError> {
        self.users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.id() == *id)
            .cloned()
            .ok_or(CredentialStoreError::NotFound)
    }

    async fn insert(&self, user: User) -> Result<(), CredentialStoreError> {
        let mut users = self.users.lock().unwrap();
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
        let mut users = self.users.lock().unwrap();
        let user = users
            .values_mut()
            .find(|user| user.id() == *id)
            .ok_or(CredentialStoreError::NotFound)?;
        user.set_display_name(display_name);
        Ok(user.clone())
    }
}

/// Deterministic "hash" for tests: `hashed:<plaintext>`.
#[derive(Debug, Clone, Default)]
pub struct StubSecretHasher;

impl StubSecretHasher {
    pub fn hash_of(plaintext: &str) -> PasswordHash {
        PasswordHash::new(Secret::from(format!("hashed:{plaintext}")))
    }
}

#[async_trait]
impl SecretHasher for StubSecretHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, SecretHasherError> {
        Ok(Self::hash_of(password.as_ref().expose_secret()))
    }

    async fn verify(&self, candidate: &Password, expected: &PasswordHash) -> bool {
        expected.as_ref().expose_secret()
            == &format!("hashed:{}", candidate.as_ref().expose_secret())
    }
}

/// Transparent token format for tests: `tok:<subject email>`.
#[derive(Debug, Clone, Default)]
pub struct StubTokenIssuer;

impl TokenIssuer for StubTokenIssuer {
    fn issue(&self, subject: &Email) -> Result<IssuedToken, TokenIssuerError> {
        Ok(IssuedToken {
            token: format!("tok:{}", subject.as_str()),
            expires_at: Utc::now() + Duration::minutes(10),
        })
    }

    fn validate(&self, raw: &str) -> Result<Email, TokenIssuerError> {
        let subject = raw.strip_prefix("tok:").ok_or(TokenIssuerError::Invalid)?;
        Email::try_from(Secret::from(subject.to_string())).map_err(|_| TokenIssuerError::Invalid)
    }
}

#[derive(Default, Clone)]
pub struct RecordingEventPublisher {
    events: Arc<Mutex<Vec<IdentityEvent>>>,
}

impl RecordingEventPublisher {
    pub fn events(&self) -> Vec<IdentityEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventPublisher for RecordingEventPublisher {
    fn publish(&self, event: IdentityEvent) {
        self.events.lock().unwrap().push(event);
    }
}
