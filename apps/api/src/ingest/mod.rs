// Feed ingestion: query-URL construction, fetch, tolerant item parsing,
// and URL-keyed upsert into the jobs table.
// All network access goes through the FeedSource trait — the coordinator
// never touches reqwest directly.

pub mod coordinator;
pub mod feed;
pub mod handlers;
pub mod parser;
pub mod query_urls;
