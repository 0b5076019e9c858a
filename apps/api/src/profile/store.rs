//! Profile persistence: upsert-by-email and the resolve rule shared by
//! ingestion and matching.

use serde::Deserialize;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::profile::ProfileRow;

/// Wire payload for profile upsert. Field names are part of the API surface.
#[derive(Debug, Deserialize)]
pub struct ProfileIn {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub locations: Option<Vec<String>>,
    #[serde(default = "default_remote_ok")]
    pub remote_ok: bool,
    #[serde(default)]
    pub target_titles: Option<Vec<String>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub min_salary_aed: Option<i32>,
    pub cv_text: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

fn default_remote_ok() -> bool {
    true
}

/// Creates the profile or fully replaces its fields; email is the upsert key.
pub async fn upsert_profile(pool: &PgPool, payload: ProfileIn) -> Result<ProfileRow, AppError> {
    let row: ProfileRow = sqlx::query_as(
        r#"
        INSERT INTO profiles
            (full_name, email, phone, locations, remote_ok, target_titles,
             skills, min_salary_aed, cv_text, linkedin, website)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        ON CONFLICT (email) DO UPDATE SET
            full_name = EXCLUDED.full_name,
            phone = EXCLUDED.phone,
            locations = EXCLUDED.locations,
            remote_ok = EXCLUDED.remote_ok,
            target_titles = EXCLUDED.target_titles,
            skills = EXCLUDED.skills,
            min_salary_aed = EXCLUDED.min_salary_aed,
            cv_text = EXCLUDED.cv_text,
            linkedin = EXCLUDED.linkedin,
            website = EXCLUDED.website,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(&payload.full_name)
    .bind(&payload.email)
    .bind(&payload.phone)
    .bind(payload.locations.unwrap_or_default())
    .bind(payload.remote_ok)
    .bind(payload.target_titles.unwrap_or_default())
    .bind(payload.skills.unwrap_or_default())
    .bind(payload.min_salary_aed)
    .bind(&payload.cv_text)
    .bind(&payload.linkedin)
    .bind(&payload.website)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Finds the profile for `email`, or the sole stored profile when no email
/// is given (single-tenant convenience; oldest row wins, deterministically).
pub async fn find_profile(
    pool: &PgPool,
    email: Option<&str>,
) -> Result<Option<ProfileRow>, AppError> {
    let row = match email {
        Some(email) => {
            sqlx::query_as("SELECT * FROM profiles WHERE email = $1")
                .bind(email)
                .fetch_optional(pool)
                .await?
        }
        None => {
            sqlx::query_as("SELECT * FROM profiles ORDER BY created_at, id LIMIT 1")
                .fetch_optional(pool)
                .await?
        }
    };
    Ok(row)
}

/// As [`find_profile`], but an absent profile is a `NotFound` error.
pub async fn resolve_profile(pool: &PgPool, email: Option<&str>) -> Result<ProfileRow, AppError> {
    find_profile(pool, email)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found. Create it first.".to_string()))
}
