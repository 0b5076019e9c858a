use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One user's search configuration. At most one row per email; upserts
/// replace every field.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub locations: Vec<String>,
    pub remote_ok: bool,
    pub target_titles: Vec<String>,
    pub skills: Vec<String>,
    pub min_salary_aed: Option<i32>,
    pub cv_text: String,
    pub linkedin: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
