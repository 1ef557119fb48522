use axum::{Json, http::StatusCode, response::IntoResponse};
use keygate_application::AuthError;
use keygate_core::ValidationError;

/// Transport-boundary wrapper that maps the closed [`AuthError`] taxonomy to
/// status codes. Unexpected failures are logged here and surface as an
/// opaque 500.
#[derive(Debug)]
pub struct ApiError(AuthError);

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(AuthError::Validation(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            AuthError::IdentityAlreadyExists => StatusCode::CONFLICT,
            AuthError::IdentityNotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidCredential | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed unexpectedly");
            "internal server error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
