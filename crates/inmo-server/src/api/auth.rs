//! Login handler wiring the credential verifier to the session store.

use axum::Json;
use axum::extract::State;
use inmo_auth::verifier::{AuthenticatedUser, CredentialVerifier};
use inmo_core::error::InmoError;
use inmo_core::validate;
use serde::Serialize;
use serde_json::Value;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: AuthenticatedUser,
    /// Opaque bearer token for subsequent write requests.
    pub token: String,
}

#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<LoginResponse>, ApiError> {
    let credentials =
        validate::validate_login(&body).map_err(|errors| InmoError::Validation { errors })?;

    let user = state
        .verifier
        .verify(&credentials.email, &credentials.password)
        .await?;

    tracing::info!(email = %user.email, "Admin login");

    let token = state.sessions.issue(user.clone()).await;
    Ok(Json(LoginResponse { user, token }))
}
