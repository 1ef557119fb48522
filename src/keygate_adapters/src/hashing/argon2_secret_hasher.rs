use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

use keygate_core::{Password, PasswordHash, SecretHasher, SecretHasherError};

/// Argon2id hasher with a fresh salt per hash.
///
/// Hashing is deliberately expensive, so both directions run on the
/// blocking thread pool with the current span carried across.
#[derive(Debug, Clone, Default)]
pub struct Argon2SecretHasher;

impl Argon2SecretHasher {
    pub fn new() -> Self {
        Self
    }
}

fn hasher() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

#[async_trait]
impl SecretHasher for Argon2SecretHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, SecretHasherError> {
        let password = password.clone();
        let current_span = tracing::Span::current();

        let encoded = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let salt = SaltString::generate(rand_core::OsRng);
                hasher()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| h.to_string())
                    .map_err(|e| e.to_string())
            })
        })
        .await
        .map_err(|e| SecretHasherError::Hash(e.to_string()))?
        .map_err(SecretHasherError::Hash)?;

        Ok(PasswordHash::new(Secret::from(encoded)))
    }

    #[tracing::instrument(name = "Verifying password hash", skip_all)]
    async fn verify(&self, candidate: &Password, expected: &PasswordHash) -> bool {
        let candidate = candidate.clone();
        let expected = expected.as_ref().clone();
        let current_span = tracing::Span::current();

        let verdict = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let parsed = argon2::PasswordHash::new(expected.expose_secret())
                    .map_err(|e| e.to_string())?;
                match hasher()?.verify_password(
                    candidate.as_ref().expose_secret().as_bytes(),
                    &parsed,
                ) {
                    Ok(()) => Ok(true),
                    Err(argon2::password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(e.to_string()),
                }
            })
        })
        .await;

        match verdict {
            Ok(Ok(matched)) => matched,
            // A malformed stored hash is an operator problem, but to the
            // caller it is indistinguishable from a mismatch.
            Ok(Err(err)) => {
                tracing::error!(error = %err, "password verification failed abnormally");
                false
            }
            Err(join_err) => {
                tracing::error!(error = %join_err, "password verification task failed");
                false
            }
        }
    }
}
