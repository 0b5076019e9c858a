use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::ingest::feed::FeedSource;

/// Shared application state injected into all route handlers via Axum
/// extractors. The store handle is threaded through every operation —
/// there is no process-wide connection singleton.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable feed source. Default: HttpFeedSource; tests swap in stubs.
    pub feed: Arc<dyn FeedSource>,
}
