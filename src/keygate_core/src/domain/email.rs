use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};

use crate::domain::validation::ValidationError;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
});

/// A validated, case-normalized email address.
///
/// The inner value is lowercased at parse time so two spellings of the same
/// address compare equal everywhere - lookups, uniqueness checks, and token
/// subjects all see the normalized form. The address is wrapped in
/// [`Secret`] so it never leaks through `Debug` output or logs.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    /// The normalized address as a plain string slice.
    ///
    /// Deliberately not named `expose_secret` - crossing this boundary is an
    /// explicit choice at call sites that hand the address outward (token
    /// subjects, events, profile projections).
    pub fn as_str(&self) -> &str {
        self.0.expose_secret()
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = ValidationError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let normalized = value.expose_secret().trim().to_lowercase();
        if !EMAIL_REGEX.is_match(&normalized) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self(Secret::from(normalized)))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
