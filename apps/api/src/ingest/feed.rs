//! Feed Fetcher — retrieves one remote feed document per query URL.
//!
//! Failure is absorbed, never propagated: a transport error, timeout, or
//! non-2xx response yields `None`, which the coordinator treats exactly like
//! a feed with zero matching items. Ingestion stays resilient to partial
//! feed outages; the only diagnostics channel is the `warn!` log.
//!
//! `AppState` holds an `Arc<dyn FeedSource>`, so tests swap in a stub
//! without touching the coordinator.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

/// Fixed per-request timeout. Not configurable.
pub const FEED_TIMEOUT: Duration = Duration::from_secs(15);

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetches one feed document. `None` means "this URL contributed
    /// nothing" — the caller cannot distinguish failure from an empty feed.
    async fn fetch(&self, url: &str) -> Option<String>;
}

/// Default HTTP-backed feed source.
pub struct HttpFeedSource {
    client: reqwest::Client,
}

impl HttpFeedSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(FEED_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for HttpFeedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("Feed fetch failed for {url}: {e}");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Feed fetch for {url} returned {status}");
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Feed body read failed for {url}: {e}");
                None
            }
        }
    }
}
