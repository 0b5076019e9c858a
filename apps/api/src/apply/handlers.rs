//! Axum route handlers for the Application API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::apply::channel::{ApplicationStatus, ApplyChannel};
use crate::apply::tracker::queue_application;
use crate::errors::AppError;
use crate::models::application::ApplicationRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub job_id: String,
}

#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub message: String,
    pub channel: ApplyChannel,
    pub status: ApplicationStatus,
}

#[derive(Debug, Serialize)]
pub struct ApplicationListResponse {
    pub count: usize,
    pub applications: Vec<ApplicationRow>,
}

/// POST /api/v1/apply
///
/// Classifies the job's apply channel and records one immutable application
/// snapshot with its initial status.
pub async fn handle_apply(
    State(state): State<AppState>,
    Json(request): Json<ApplyRequest>,
) -> Result<Json<ApplyResponse>, AppError> {
    let outcome = queue_application(&state.db, &request.job_id).await?;
    Ok(Json(ApplyResponse {
        message: "Application queued".to_string(),
        channel: outcome.channel,
        status: outcome.status,
    }))
}

/// GET /api/v1/applications
///
/// Lists all tracked applications, newest first.
pub async fn handle_list_applications(
    State(state): State<AppState>,
) -> Result<Json<ApplicationListResponse>, AppError> {
    let applications: Vec<ApplicationRow> =
        sqlx::query_as("SELECT * FROM applications ORDER BY created_at DESC")
            .fetch_all(&state.db)
            .await?;

    Ok(Json(ApplicationListResponse {
        count: applications.len(),
        applications,
    }))
}
