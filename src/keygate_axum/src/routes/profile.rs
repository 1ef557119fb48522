//! Axum-specific profile routes: read and update the caller's projection.

use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};
use serde::Deserialize;

use keygate_application::{GetProfileUseCase, UpdateProfileUseCase};
use keygate_core::{
    CredentialStore, DisplayName, EventPublisher, SecretHasher, TokenIssuer,
};

use crate::{error::ApiError, routes::require_bearer, state::AuthState};

#[tracing::instrument(name = "Get profile", skip_all)]
pub async fn get_profile<C, H, T, P>(
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

    let use_case = GetProfileUseCase::new(&state.credential_store, &state.token_issuer);
    let profile = use_case.execute(bearer.token()).await?;

    Ok(Json(profile))
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[tracing::instrument(name = "Update profile", skip(state, bearer))]
pub async fn update_profile<C, H, T, P>(
    State(state): State<AuthState<C, H, T, P>>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CredentialStore + Clone + 'static,
    H: SecretHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
    P: EventPublisher + Clone + 'static,
{
    let bearer = require_bearer(bearer)?;
    let display_name = DisplayName::try_from(request.display_name)?;

    let use_case = UpdateProfileUseCase::new(
        &state.credential_store,
        &state.token_issuer,
        &state.event_publisher,
    );
    let profile = use_case.execute(bearer.token(), display_name).await?;

    Ok(Json(profile))
}
