//! Property CRUD handlers.
//!
//! Reads are public. Writes require a session (checked before the
//! payload is even validated) and gate every payload through the
//! validation layer — the repository only ever sees normalized input.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use inmo_core::error::InmoError;
use inmo_core::models::property::Property;
use inmo_core::repository::PropertyRepository;
use inmo_core::validate;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::api::context::{AppState, require_session};
use crate::api::error::ApiError;

/// A malformed id can never name an existing listing, so it is
/// reported as 404 rather than leaking id-format details.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| {
        ApiError(InmoError::NotFound {
            entity: "property".into(),
            id: raw.to_string(),
        })
    })
}

#[tracing::instrument(skip_all)]
pub async fn list_properties(
    State(state): State<AppState>,
) -> Result<Json<Vec<Property>>, ApiError> {
    let properties = state.repo.list().await?;
    Ok(Json(properties))
}

#[tracing::instrument(skip_all, fields(id = %id))]
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Property>, ApiError> {
    let id = parse_id(&id)?;
    let property = state.repo.get(id).await?;
    Ok(Json(property))
}

#[tracing::instrument(skip_all)]
pub async fn create_property(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Property>), ApiError> {
    require_session(&state, &headers).await?;

    let input = validate::validate_new_property(&body)
        .map_err(|errors| InmoError::Validation { errors })?;

    let property = state.repo.create(input).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

#[tracing::instrument(skip_all, fields(id = %id))]
pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Property>, ApiError> {
    require_session(&state, &headers).await?;

    let id = parse_id(&id)?;
    let patch = validate::validate_property_patch(&body)
        .map_err(|errors| InmoError::Validation { errors })?;

    // A patch with no fields changes nothing; return the record as it
    // stands instead of bumping `updated_at`.
    if patch.is_empty() {
        let property = state.repo.get(id).await?;
        return Ok(Json(property));
    }

    let property = state.repo.update(id, patch).await?;
    Ok(Json(property))
}

#[tracing::instrument(skip_all, fields(id = %id))]
pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    require_session(&state, &headers).await?;

    let id = parse_id(&id)?;
    state.repo.delete(id).await?;
    Ok(Json(json!({ "message": "Property deleted" })))
}
