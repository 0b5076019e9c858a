//! Application Tracker — records one immutable application per explicit
//! "apply to job X" request, snapshotting the job at that instant.

use sqlx::PgPool;
use uuid::Uuid;

use crate::apply::channel::{ApplicationStatus, ApplyChannel};
use crate::errors::AppError;
use crate::models::job::JobRow;

#[derive(Debug)]
pub struct ApplyOutcome {
    pub channel: ApplyChannel,
    pub status: ApplicationStatus,
}

/// Parses a wire job id. Malformed ids are a client error, not a lookup miss.
pub fn parse_job_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::Validation("Invalid job id format".to_string()))
}

/// Classifies the job's URL, derives the initial status, and inserts the
/// application snapshot. The record is immutable afterward within this
/// service; status transitions happen downstream.
pub async fn queue_application(pool: &PgPool, job_id_raw: &str) -> Result<ApplyOutcome, AppError> {
    let job_id = parse_job_id(job_id_raw)?;

    let job: JobRow = sqlx::query_as("SELECT * FROM jobs WHERE id = $1")
        .bind(job_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    let channel = ApplyChannel::detect(&job.url);
    let status = channel.initial_status();

    sqlx::query(
        r#"
        INSERT INTO applications
            (job_id, job_url, job_title, company, apply_channel, status)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(job.id)
    .bind(&job.url)
    .bind(&job.title)
    .bind(&job.company)
    .bind(channel.as_str())
    .bind(status.as_str())
    .execute(pool)
    .await?;

    Ok(ApplyOutcome { channel, status })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_uuid_parses() {
        let id = Uuid::new_v4();
        assert_eq!(parse_job_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_malformed_id_is_validation_error() {
        let err = parse_job_id("not-a-uuid").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
