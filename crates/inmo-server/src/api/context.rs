//! Shared request state: the selected backends and the session map.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::HeaderMap;
use inmo_auth::verifier::AuthenticatedUser;
use inmo_core::error::InmoError;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::backend::{PropertyBackend, VerifierBackend};

/// Opaque bearer-token session map. Stands in for the session
/// provider boundary; tokens are random and carry no claims.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, AuthenticatedUser>>>,
}

impl SessionStore {
    /// Issue a fresh opaque token for an authenticated user.
    pub async fn issue(&self, user: AuthenticatedUser) -> String {
        let token = Uuid::new_v4().to_string();
        self.inner.write().await.insert(token.clone(), user);
        token
    }

    pub async fn lookup(&self, token: &str) -> Option<AuthenticatedUser> {
        self.inner.read().await.get(token).cloned()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub repo: PropertyBackend,
    pub verifier: VerifierBackend,
    pub sessions: SessionStore,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolve the caller's session or reject with 401. The rejection
/// never reveals whether a targeted resource exists.
pub async fn require_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<AuthenticatedUser, ApiError> {
    match bearer_token(headers) {
        Some(token) => state
            .sessions
            .lookup(token)
            .await
            .ok_or(ApiError(InmoError::Unauthorized)),
        None => Err(ApiError(InmoError::Unauthorized)),
    }
}

/// Non-rejecting variant for the access-gate middleware.
pub async fn is_authenticated(state: &AppState, headers: &HeaderMap) -> bool {
    match bearer_token(headers) {
        Some(token) => state.sessions.lookup(token).await.is_some(),
        None => false,
    }
}
