//! Query-URL construction: one percent-encoded feed URL per target title ×
//! preferred location, deduplicated while preserving first-seen order.

use std::collections::HashSet;

use reqwest::Url;

use crate::models::profile::ProfileRow;

pub const FEED_BASE_URL: &str = "https://ae.indeed.com/rss";

/// Fallback titles when the profile specifies none.
pub const DEFAULT_TITLES: &[&str] = &[
    "Digital Health",
    "Healthcare AI",
    "Medical Director",
    "Clinical",
];

/// Fallback region when the profile specifies no locations.
pub const DEFAULT_LOCATION: &str = "United Arab Emirates";

pub fn build_feed_urls(profile: &ProfileRow) -> Vec<String> {
    let titles: Vec<&str> = if profile.target_titles.is_empty() {
        DEFAULT_TITLES.to_vec()
    } else {
        profile.target_titles.iter().map(String::as_str).collect()
    };
    let locations: Vec<&str> = if profile.locations.is_empty() {
        vec![DEFAULT_LOCATION]
    } else {
        profile.locations.iter().map(String::as_str).collect()
    };

    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for title in &titles {
        for location in &locations {
            let url = Url::parse_with_params(FEED_BASE_URL, &[("q", *title), ("l", *location)])
                .expect("valid feed base URL")
                .to_string();
            if seen.insert(url.clone()) {
                urls.push(url);
            }
        }
    }
    urls
}
