use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    display_name::DisplayName,
    email::Email,
    user::{User, UserId},
};

#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("identity already exists")]
    DuplicateIdentity,
    #[error("identity not found")]
    NotFound,
    #[error("unexpected store error: {0}")]
    Unexpected(String),
}

impl PartialEq for CredentialStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateIdentity, Self::DuplicateIdentity) => true,
            (Self::NotFound, Self::NotFound) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// Port over the durable user record store.
///
/// Implementations must uphold two guarantees the rest of the system leans
/// on:
///
/// 1. `insert` is an atomic insert-if-absent on the normalized email. Of two
///    concurrent inserts with the same email, exactly one succeeds and the
///    other observes [`CredentialStoreError::DuplicateIdentity`]. The check
///    is never a separate read followed by a write.
/// 2. `update_display_name` is atomic per record: concurrent updates
///    serialize to last-write-wins and never produce a torn record.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn exists(&self, email: &Email) -> Result<bool, CredentialStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<User, CredentialStoreError>;
    async fn find_by_id(&self, id: &UserId) -> Result<User, CredentialStoreError>;
    async fn insert(&self, user: User) -> Result<(), CredentialStoreError>;
    async fn update_display_name(
        &self,
        id: &UserId,
        display_name: DisplayName,
    ) -> Result<User, CredentialStoreError>;
}
