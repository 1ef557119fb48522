//! Axum-specific token refresh route.

use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};

use keygate_application::RefreshTokenUseCase;
use keygate_core::{CredentialStore, EventPublisher, SecretHasher, TokenIssuer};

use crate::{
    error::ApiError,
    routes::{TokenResponse, require_bearer},
    state::AuthState,
};

#[tracing::instrument(name = "Refresh token", skip_all)]
pub async fn refresh<C, H, T, P>(
    State(state): State<AuthState<C, H, T, P>>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CredentialStore + Clone + 'static,
    H: SecretHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
    P: EventPublisher + Clone + 'static,
{
    let bearer = require_bearer(bearer)?;

    let use_case = RefreshTokenUseCase::new(&state.credential_store, &state.token_issuer);
    let token = use_case.execute(bearer.token()).await?;

    Ok(Json(TokenResponse::from(token)))
}
