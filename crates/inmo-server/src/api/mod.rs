//! HTTP API: router assembly and the access-gate middleware.

pub mod auth;
pub mod context;
pub mod error;
pub mod properties;

#[cfg(test)]
mod tests;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use inmo_auth::gate::{self, GateDecision};

use context::{AppState, is_authenticated};
use properties::{
    create_property, delete_property, get_property, list_properties, update_property,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/properties", get(list_properties).post(create_property))
        .route(
            "/properties/{id}",
            get(get_property)
                .patch(update_property)
                .delete(delete_property),
        )
        .route("/api/auth/login", post(auth::login))
        .layer(middleware::from_fn_with_state(state.clone(), access_gate))
        .with_state(state)
}

/// Gate every request by path classification before it reaches a
/// handler. Admin paths redirect anonymous callers to the login path;
/// an authenticated caller hitting the login path is bounced to the
/// dashboard. API routes enforce their own session checks.
async fn access_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let authenticated = is_authenticated(&state, request.headers()).await;
    match gate::decide(request.uri().path(), authenticated) {
        GateDecision::Allow => next.run(request).await,
        GateDecision::Redirect(to) => Redirect::temporary(to).into_response(),
    }
}
