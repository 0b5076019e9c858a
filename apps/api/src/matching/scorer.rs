//! Scorer — weighted token-set overlap between a job and the profile.
//!
//! `score = 2.0·|jt ∩ titles| + 1.5·|jt ∩ skills| + 0.2·|jt ∩ cv|`
//!
//! Intentionally transparent and additive. The weights below define system
//! behavior: changing them or the tokenizer is a breaking change and must
//! come with test updates.

use std::collections::HashSet;

use sqlx::PgPool;

use crate::errors::AppError;
use crate::matching::tokenize::token_set;
use crate::models::job::JobRow;
use crate::models::profile::ProfileRow;
use crate::profile::store::resolve_profile;

pub const TITLE_WEIGHT: f64 = 2.0;
pub const SKILL_WEIGHT: f64 = 1.5;
pub const CV_WEIGHT: f64 = 0.2;

/// Profile-side token sets, built once per match run.
#[derive(Debug, Clone)]
pub struct ProfileTokens {
    pub titles: HashSet<String>,
    pub skills: HashSet<String>,
    pub cv: HashSet<String>,
}

impl ProfileTokens {
    pub fn from_profile(profile: &ProfileRow) -> Self {
        Self {
            titles: token_set(&profile.target_titles.join(" ")),
            skills: token_set(&profile.skills.join(" ")),
            cv: token_set(&profile.cv_text),
        }
    }
}

/// Computes the relevance score of one job against the profile token sets,
/// rounded to 2 decimal places. Pure and deterministic; an empty profile-side
/// set contributes exactly zero to its term.
pub fn score_job(job: &JobRow, profile: &ProfileTokens) -> f64 {
    let text = [
        job.title.as_str(),
        job.company.as_deref().unwrap_or(""),
        job.description.as_deref().unwrap_or(""),
    ]
    .join(" ");
    let job_tokens = token_set(&text);

    let overlap = |side: &HashSet<String>| job_tokens.intersection(side).count() as f64;

    let score = overlap(&profile.titles) * TITLE_WEIGHT
        + overlap(&profile.skills) * SKILL_WEIGHT
        + overlap(&profile.cv) * CV_WEIGHT;

    (score * 100.0).round() / 100.0
}

/// Scores every stored job against the resolved profile, persists each score
/// (every call rewrites every job's score, even unchanged ones), and returns
/// the top `top_n` jobs by score descending.
///
/// Jobs are loaded ordered by `created_at` so the stable sort gives a
/// deterministic order for equal scores on a fixed store snapshot.
pub async fn run_match(
    pool: &PgPool,
    email: Option<&str>,
    top_n: usize,
) -> Result<Vec<JobRow>, AppError> {
    let profile = resolve_profile(pool, email).await?;
    let profile_tokens = ProfileTokens::from_profile(&profile);

    let mut jobs: Vec<JobRow> = sqlx::query_as("SELECT * FROM jobs ORDER BY created_at, id")
        .fetch_all(pool)
        .await?;

    for job in &mut jobs {
        let score = score_job(job, &profile_tokens);
        sqlx::query("UPDATE jobs SET matched_score = $1, updated_at = now() WHERE id = $2")
            .bind(score)
            .bind(job.id)
            .execute(pool)
            .await?;
        job.matched_score = Some(score);
    }

    jobs.sort_by(|a, b| {
        b.matched_score
            .unwrap_or(0.0)
            .total_cmp(&a.matched_score.unwrap_or(0.0))
    });
    jobs.truncate(top_n);

    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_job(title: &str, company: Option<&str>, description: Option<&str>) -> JobRow {
        JobRow {
            id: Uuid::new_v4(),
            source: "indeed".to_string(),
            source_id: None,
            title: title.to_string(),
            company: company.map(String::from),
            location: None,
            url: "https://example.com/job".to_string(),
            description: description.map(String::from),
            posted_at: None,
            tags: vec![],
            matched_score: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn make_tokens(titles: &[&str], skills: &[&str], cv: &str) -> ProfileTokens {
        ProfileTokens {
            titles: token_set(&titles.join(" ")),
            skills: token_set(&skills.join(" ")),
            cv: token_set(cv),
        }
    }

    #[test]
    fn test_single_skill_overlap_scores_1_5() {
        let job = make_job("Role", None, Some("Senior Python Engineer"));
        let tokens = make_tokens(&[], &["python", "fastapi"], "");
        assert_eq!(score_job(&job, &tokens), 1.5);
    }

    #[test]
    fn test_title_overlap_weighs_2_0() {
        let job = make_job("Medical Director", None, None);
        let tokens = make_tokens(&["Medical Director"], &[], "");
        // "medical" and "director" both overlap: 2 × 2.0
        assert_eq!(score_job(&job, &tokens), 4.0);
    }

    #[test]
    fn test_cv_overlap_weighs_0_2() {
        let job = make_job("Nurse", None, None);
        let tokens = make_tokens(&[], &[], "nurse");
        assert_eq!(score_job(&job, &tokens), 0.2);
    }

    #[test]
    fn test_terms_are_additive() {
        let job = make_job("Python Engineer", Some("Acme"), Some("FastAPI services"));
        let tokens = make_tokens(&["Engineer"], &["python", "fastapi"], "acme");
        // title: engineer (2.0), skills: python + fastapi (3.0), cv: acme (0.2)
        assert_eq!(score_job(&job, &tokens), 5.2);
    }

    #[test]
    fn test_empty_skills_contribute_zero() {
        let job = make_job("Python Engineer", None, Some("python everywhere"));
        let with_skills = make_tokens(&[], &["python"], "");
        let without_skills = make_tokens(&[], &[], "");
        assert_eq!(score_job(&job, &with_skills), 1.5);
        assert_eq!(score_job(&job, &without_skills), 0.0);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let job = make_job("Digital Health Lead", Some("Acme Health"), Some("telemedicine"));
        let tokens = make_tokens(&["Digital Health"], &["telemedicine"], "health lead");
        let first = score_job(&job, &tokens);
        let second = score_job(&job, &tokens);
        assert_eq!(first, second);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let job = make_job("PYTHON Engineer", None, None);
        let tokens = make_tokens(&[], &["Python"], "");
        assert_eq!(score_job(&job, &tokens), 1.5);
    }

    #[test]
    fn test_duplicate_tokens_count_once() {
        let job = make_job("python python python", None, Some("python"));
        let tokens = make_tokens(&[], &["python"], "");
        // Set semantics: one distinct overlapping token.
        assert_eq!(score_job(&job, &tokens), 1.5);
    }

    #[test]
    fn test_score_rounds_to_two_decimals() {
        let job = make_job("a b c", None, None);
        let tokens = make_tokens(&[], &[], "a b c");
        // 3 × 0.2 = 0.6000000000000001 in f64; rounding keeps it at 0.6
        assert_eq!(score_job(&job, &tokens), 0.6);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let job = make_job("Accountant", Some("LedgerCo"), Some("bookkeeping"));
        let tokens = make_tokens(&["Engineer"], &["rust"], "systems");
        assert_eq!(score_job(&job, &tokens), 0.0);
    }
}
