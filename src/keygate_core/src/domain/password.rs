use secrecy::{ExposeSecret, Secret};

use crate::domain::validation::ValidationError;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A plaintext password in transit between the request boundary and the
/// hasher. Never stored, never logged; the store boundary only ever sees a
/// [`PasswordHash`].
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = ValidationError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// An opaque, one-way hash of a password as produced by a
/// [`SecretHasher`](crate::ports::secret_hasher::SecretHasher).
///
/// The encoded form (algorithm, parameters, salt, digest) is treated as a
/// single opaque string; nothing outside the hasher interprets it.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(encoded: Secret<String>) -> Self {
        Self(encoded)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
