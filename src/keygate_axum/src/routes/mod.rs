pub mod login;
pub mod profile;
pub mod refresh;
pub mod register;

pub use login::login;
pub use profile::{get_profile, update_profile};
pub use refresh::refresh;
pub use register::register;

use axum_extra::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};
use chrono::{DateTime, Utc};
use keygate_application::AuthError;
use keygate_core::IssuedToken;
use serde::Serialize;

use crate::error::ApiError;

/// Wire shape of a successful token issuance.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,
}

impl From<IssuedToken> for TokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            expires_at: issued.expires_at,
        }
    }
}

/// A missing Authorization header fails exactly like a bad token: the
/// caller learns only that no valid credential was presented.
pub(crate) fn require_bearer(
    header: Option<TypedHeader<Authorization<Bearer>>>,
) -> Result<TypedHeader<Authorization<Bearer>>, ApiError> {
    header.ok_or_else(|| AuthError::InvalidToken.into())
}
