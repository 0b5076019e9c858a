pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile API
        .route(
            "/api/v1/profile",
            post(crate::profile::handlers::handle_upsert_profile)
                .get(crate::profile::handlers::handle_get_profile),
        )
        // Ingestion API
        .route(
            "/api/v1/ingest/indeed",
            post(crate::ingest::handlers::handle_ingest_indeed),
        )
        // Matching API
        .route("/api/v1/match", post(crate::matching::handlers::handle_match))
        .route("/api/v1/jobs", get(crate::matching::handlers::handle_list_jobs))
        // Application API
        .route("/api/v1/apply", post(crate::apply::handlers::handle_apply))
        .route(
            "/api/v1/applications",
            get(crate::apply::handlers::handle_list_applications),
        )
        .with_state(state)
}
