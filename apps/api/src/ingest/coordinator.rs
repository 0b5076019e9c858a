//! Ingestion Coordinator — drives fetch + parse across all query URLs and
//! upserts the results into the jobs table by URL.

use std::sync::Arc;

use serde::Serialize;
use sqlx::PgPool;
use tokio::task::JoinSet;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::ingest::feed::FeedSource;
use crate::ingest::parser::{parse_feed, ParsedJob};
use crate::ingest::query_urls::build_feed_urls;
use crate::profile::store::resolve_profile;

/// Aggregate ingestion result: the query URLs used, total items found across
/// all feeds (pre-dedup), and how many were newly inserted rather than
/// updated.
#[derive(Debug, Serialize)]
pub struct IngestReport {
    pub sources: Vec<String>,
    pub found: usize,
    pub inserted: usize,
}

/// Runs one full ingestion pass for the resolved profile. Feed failures are
/// absorbed per URL; there is no cross-item transaction, so a mid-loop
/// database failure leaves earlier items committed (partial success is the
/// intended semantics).
pub async fn run_ingest(
    pool: &PgPool,
    feed: Arc<dyn FeedSource>,
    email: Option<&str>,
) -> Result<IngestReport, AppError> {
    let profile = resolve_profile(pool, email).await?;
    let urls = build_feed_urls(&profile);

    let items = collect_feed_items(feed, &urls).await;
    let found = items.len();

    let mut inserted = 0;
    for item in &items {
        if upsert_job(pool, item).await? {
            inserted += 1;
        }
    }

    info!("Ingested {found} items from {} feeds, {inserted} new", urls.len());

    Ok(IngestReport {
        sources: urls,
        found,
        inserted,
    })
}

/// Fetches and parses every query URL concurrently. Results are reassembled
/// in URL order, so output is deterministic for a fixed set of responses.
/// A failed fetch (or a panicked fetch task) contributes an empty list.
pub async fn collect_feed_items(feed: Arc<dyn FeedSource>, urls: &[String]) -> Vec<ParsedJob> {
    let mut tasks = JoinSet::new();
    for (idx, url) in urls.iter().enumerate() {
        let feed = Arc::clone(&feed);
        let url = url.clone();
        tasks.spawn(async move {
            let items = match feed.fetch(&url).await {
                Some(body) => parse_feed(&body),
                None => Vec::new(),
            };
            (idx, items)
        });
    }

    let mut per_url: Vec<Vec<ParsedJob>> = vec![Vec::new(); urls.len()];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((idx, items)) => per_url[idx] = items,
            Err(e) => warn!("Feed task failed: {e}"),
        }
    }
    per_url.into_iter().flatten().collect()
}

/// Upserts one parsed item by its URL. Returns true when a new row was
/// inserted. An existing row keeps its identity and `matched_score`; all
/// parser fields are overwritten.
async fn upsert_job(pool: &PgPool, item: &ParsedJob) -> Result<bool, AppError> {
    let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM jobs WHERE url = $1")
        .bind(&item.url)
        .fetch_optional(pool)
        .await?;

    match existing {
        Some((id,)) => {
            sqlx::query(
                r#"
                UPDATE jobs SET
                    source = $1, source_id = $2, title = $3, company = $4,
                    location = $5, description = $6, posted_at = $7, tags = $8,
                    updated_at = now()
                WHERE id = $9
                "#,
            )
            .bind(&item.source)
            .bind(&item.source_id)
            .bind(&item.title)
            .bind(&item.company)
            .bind(&item.location)
            .bind(&item.description)
            .bind(&item.posted_at)
            .bind(&item.tags)
            .bind(id)
            .execute(pool)
            .await?;
            Ok(false)
        }
        None => {
            sqlx::query(
                r#"
                INSERT INTO jobs
                    (source, source_id, title, company, location, url,
                     description, posted_at, tags)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                "#,
            )
            .bind(&item.source)
            .bind(&item.source_id)
            .bind(&item.title)
            .bind(&item.company)
            .bind(&item.location)
            .bind(&item.url)
            .bind(&item.description)
            .bind(&item.posted_at)
            .bind(&item.tags)
            .execute(pool)
            .await?;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// In-memory feed: URL → canned body. Unknown URLs behave like outages.
    struct StaticFeed {
        bodies: HashMap<String, String>,
    }

    #[async_trait]
    impl FeedSource for StaticFeed {
        async fn fetch(&self, url: &str) -> Option<String> {
            self.bodies.get(url).cloned()
        }
    }

    fn item(title: &str, link: &str) -> String {
        format!("<item><title>{title}</title><link>{link}</link></item>")
    }

    #[tokio::test]
    async fn test_collects_items_across_urls_in_url_order() {
        let urls = vec!["https://feed/a".to_string(), "https://feed/b".to_string()];
        let feed = StaticFeed {
            bodies: HashMap::from([
                ("https://feed/a".to_string(), item("First", "https://x/1")),
                ("https://feed/b".to_string(), item("Second", "https://x/2")),
            ]),
        };

        let items = collect_feed_items(Arc::new(feed), &urls).await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "First");
        assert_eq!(items[1].title, "Second");
    }

    #[tokio::test]
    async fn test_failed_url_is_indistinguishable_from_empty_feed() {
        let urls = vec![
            "https://feed/down".to_string(),
            "https://feed/ok".to_string(),
        ];
        let feed = StaticFeed {
            bodies: HashMap::from([(
                "https://feed/ok".to_string(),
                item("Only", "https://x/1"),
            )]),
        };

        let items = collect_feed_items(Arc::new(feed), &urls).await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Only");
    }

    #[tokio::test]
    async fn test_all_urls_down_yields_empty_list() {
        let urls = vec!["https://feed/down".to_string()];
        let feed = StaticFeed {
            bodies: HashMap::new(),
        };

        let items = collect_feed_items(Arc::new(feed), &urls).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_no_urls_yields_empty_list() {
        let feed = StaticFeed {
            bodies: HashMap::new(),
        };
        let items = collect_feed_items(Arc::new(feed), &[]).await;
        assert!(items.is_empty());
    }
}
