use async_trait::async_trait;
use thiserror::Error;

use crate::domain::password::{Password, PasswordHash};

#[derive(Debug, Error)]
pub enum SecretHasherError {
    #[error("failed to hash secret: {0}")]
    Hash(String),
}

/// Port over one-way password hashing.
///
/// `hash` is deliberately expensive; implementations run it off the async
/// executor. `verify` must compare in constant time and never leak timing
/// correlated with partial matches - a malformed stored hash verifies as
/// `false`, not as a distinguishable error.
#[async_trait]
pub trait SecretHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, SecretHasherError>;
    async fn verify(&self, candidate: &Password, expected: &PasswordHash) -> bool;
}
