//! Axum route handlers for the Profile API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::profile::ProfileRow;
use crate::profile::store::{find_profile, upsert_profile, ProfileIn};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// POST /api/v1/profile
///
/// Upserts the profile by email: create if absent, full field replace if
/// present. Returns the stored row.
pub async fn handle_upsert_profile(
    State(state): State<AppState>,
    Json(payload): Json<ProfileIn>,
) -> Result<Json<ProfileRow>, AppError> {
    if payload.email.trim().is_empty() {
        return Err(AppError::Validation("email cannot be empty".to_string()));
    }
    let row = upsert_profile(&state.db, payload).await?;
    Ok(Json(row))
}

/// GET /api/v1/profile?email=
///
/// Returns the profile for the given email, or the sole stored profile when
/// no email is supplied.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<ProfileRow>, AppError> {
    let row = find_profile(&state.db, params.email.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;
    Ok(Json(row))
}
