//! Axum-specific registration route.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;

use keygate_application::RegisterUseCase;
use keygate_core::{
    CredentialStore, DisplayName, Email, EventPublisher, Password, SecretHasher, TokenIssuer,
};

use crate::{error::ApiError, routes::TokenResponse, state::AuthState};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[tracing::instrument(name = "Register", skip(state, request))]
pub async fn register<C, H, T, P>(
    State(state): State<AuthState<C, H, T, P>>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CredentialStore + Clone + 'static,
    H: SecretHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
    P: EventPublisher + Clone + 'static,
{
    // Parse domain entities
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;
    let display_name = DisplayName::try_from(request.display_name)?;

    let use_case = RegisterUseCase::new(
        &state.credential_store,
        &state.secret_hasher,
        &state.token_issuer,
        &state.event_publisher,
    );
    let token = use_case.execute(email, password, display_name).await?;

    Ok((StatusCode::CREATED, Json(TokenResponse::from(token))))
}
