use serde::Serialize;

use crate::domain::validation::ValidationError;

/// Maximum accepted display name length, in characters.
pub const MAX_DISPLAY_NAME_LENGTH: usize = 256;

/// A user's public display name. The only mutable field on a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(ValidationError::BlankDisplayName);
        }
        if value.chars().count() > MAX_DISPLAY_NAME_LENGTH {
            return Err(ValidationError::DisplayNameTooLong(MAX_DISPLAY_NAME_LENGTH));
        }
        Ok(Self(value))
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
