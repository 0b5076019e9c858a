use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A tracked outreach record. `job_url`/`job_title`/`company` snapshot the
/// job at creation time and are not kept in sync with later job edits.
/// `status` is assigned once, from channel classification, and never
/// transitioned by this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub job_url: String,
    pub job_title: String,
    pub company: Option<String>,
    pub apply_channel: String,
    pub status: String,
    pub tailored_cv: Option<String>,
    pub cover_letter: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
