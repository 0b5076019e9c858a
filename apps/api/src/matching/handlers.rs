//! Axum route handlers for the Matching API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::scorer::run_match;
use crate::models::job::JobRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    50
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub count: usize,
    pub jobs: Vec<JobRow>,
}

#[derive(Debug, Deserialize)]
pub struct JobsQuery {
    #[serde(default)]
    pub min_score: f64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

/// POST /api/v1/match
///
/// Scores every stored job against the resolved profile, persists the
/// scores, and returns the top N by score descending.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs = run_match(&state.db, request.email.as_deref(), request.top_n).await?;
    Ok(Json(JobListResponse {
        count: jobs.len(),
        jobs,
    }))
}

/// GET /api/v1/jobs?min_score=&limit=
///
/// Lists already-scored jobs at or above `min_score`, best first. Jobs that
/// have never been scored are excluded.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobsQuery>,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs: Vec<JobRow> = sqlx::query_as(
        "SELECT * FROM jobs WHERE matched_score >= $1 ORDER BY matched_score DESC, created_at LIMIT $2",
    )
    .bind(params.min_score)
    .bind(params.limit)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(JobListResponse {
        count: jobs.len(),
        jobs,
    }))
}
