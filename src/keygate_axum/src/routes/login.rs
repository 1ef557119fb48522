//! Axum-specific login route.

use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;

use keygate_application::LoginUseCase;
use keygate_core::{CredentialStore, Email, EventPublisher, Password, SecretHasher, TokenIssuer};

use crate::{error::ApiError, routes::TokenResponse, state::AuthState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login", skip(state, request))]
pub async fn login<C, H, T, P>(
    State(state): State<AuthState<C, H, T, P>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CredentialStore + Clone + 'static,
    H: SecretHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
    P: EventPublisher + Clone + 'static,
{
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let use_case = LoginUseCase::new(
        &state.credential_store,
        &state.secret_hasher,
        &state.token_issuer,
    );
    let token = use_case.execute(email, password).await?;

    Ok(Json(TokenResponse::from(token)))
}
