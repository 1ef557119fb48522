use secrecy::Secret;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    display_name::DisplayName,
    email::Email,
    password::PasswordHash,
    validation::ValidationError,
};

/// Opaque user identifier, assigned once at creation and immutable after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A durable identity record.
///
/// `id` and `email` are immutable after creation; `display_name` is the only
/// field mutated by this subsystem. The password hash never leaves this type
/// except toward a `SecretHasher` or a credential store.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    email: Email,
    password_hash: PasswordHash,
    display_name: DisplayName,
}

impl User {
    /// Create a brand-new user with a freshly assigned id.
    pub fn new(email: Email, password_hash: PasswordHash, display_name: DisplayName) -> Self {
        Self {
            id: UserId::new(),
            email,
            password_hash,
            display_name,
        }
    }

    /// Rehydrate a user from stored column values, re-applying domain
    /// validation on the way in.
    pub fn parse(
        id: Uuid,
        email: Secret<String>,
        password_hash: Secret<String>,
        display_name: String,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: UserId::from_uuid(id),
            email: Email::try_from(email)?,
            password_hash: PasswordHash::new(password_hash),
            display_name: DisplayName::try_from(display_name)?,
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    pub fn set_display_name(&mut self, display_name: DisplayName) {
        self.display_name = display_name;
    }

    /// The outward, read-only projection of this record.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.as_str().to_string(),
            display_name: self.display_name.clone(),
        }
    }
}

/// Read-only view of a user, safe to hand to callers: carries no secret
/// material by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    #[serde(rename = "displayName")]
    pub display_name: DisplayName,
}
