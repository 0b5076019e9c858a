use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A normalized job posting. `url` is the dedup key: re-ingesting the same
/// URL overwrites the parser fields in place and keeps `id` and
/// `matched_score` intact.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub source: String,
    pub source_id: Option<String>,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub url: String,
    pub description: Option<String>,
    /// Feed-supplied publication date, kept as an opaque string.
    pub posted_at: Option<String>,
    pub tags: Vec<String>,
    pub matched_score: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
