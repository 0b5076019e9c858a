//! Item Parser — extracts provisional job records from one raw feed document.
//!
//! The source feed is loosely RSS-shaped and not guaranteed well-formed, so
//! this is a tolerant tag-delimited scan, not a strict XML parse: find
//! `<item>...</item>` blocks, pull `title`/`link`/`description`/`pubDate`
//! out of each, and strip whatever nested markup remains in the text.

use std::sync::LazyLock;

use regex::Regex;

static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<item>(.*?)</item>").expect("valid item pattern"));
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title>(.*?)</title>").expect("valid title pattern"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<link>(.*?)</link>").expect("valid link pattern"));
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<description>(.*?)</description>").expect("valid description pattern")
});
static PUB_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<pubDate>(.*?)</pubDate>").expect("valid pubDate pattern"));
static MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid markup pattern"));

/// A provisional job record extracted from one `<item>` block. Carries no
/// identity and no score; the coordinator upserts it by URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedJob {
    pub source: String,
    pub source_id: Option<String>,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub url: String,
    pub description: Option<String>,
    pub posted_at: Option<String>,
    pub tags: Vec<String>,
}

/// Parses one raw feed document into zero or more provisional jobs.
/// A document with no `<item>` blocks yields an empty vec, never an error.
pub fn parse_feed(body: &str) -> Vec<ParsedJob> {
    ITEM_RE
        .captures_iter(body)
        .map(|caps| parse_item(&caps[1]))
        .collect()
}

fn parse_item(block: &str) -> ParsedJob {
    let raw_title = tag_text(&TITLE_RE, block).unwrap_or_default();
    let url = tag_text(&LINK_RE, block).unwrap_or_default();
    let description = tag_text(&DESCRIPTION_RE, block);
    let posted_at = tag_text(&PUB_DATE_RE, block);

    let (title, company) = split_title(&raw_title);

    ParsedJob {
        source: "indeed".to_string(),
        source_id: None,
        title,
        company,
        // Location and tags are not present in this feed format.
        location: None,
        url,
        description,
        posted_at,
        tags: vec![],
    }
}

/// Extracts the text of the first matching tag in `block`, with nested
/// markup stripped and whitespace trimmed.
fn tag_text(re: &Regex, block: &str) -> Option<String> {
    re.captures(block)
        .map(|caps| MARKUP_RE.replace_all(&caps[1], "").trim().to_string())
}

/// Feed titles often read "<JobTitle> - <Company> - <Location...>". With at
/// least two hyphen-separated segments the first is the title and the second
/// the company; otherwise the whole string is the title.
fn split_title(raw: &str) -> (String, Option<String>) {
    let parts: Vec<&str> = raw.split(" - ").map(str::trim).collect();
    if parts.len() >= 2 {
        (parts[0].to_string(), Some(parts[1].to_string()))
    } else {
        (raw.to_string(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
<title>indeed jobs</title>
<item>
<title>Nurse - Acme Health - Dubai</title>
<link>https://ae.indeed.com/viewjob?jk=abc123</link>
<description>Ward duties and <b>patient care</b>.</description>
<pubDate>Mon, 01 Jul 2024 08:00:00 GMT</pubDate>
</item>
<item>
<title>Clinical Data Analyst</title>
<link>https://ae.indeed.com/viewjob?jk=def456</link>
<description>Registry analytics.</description>
</item>
</channel>
</rss>"#;

    #[test]
    fn test_extracts_all_items() {
        let jobs = parse_feed(FEED_BODY);
        assert_eq!(jobs.len(), 2);
    }

    #[test]
    fn test_title_splits_into_title_and_company() {
        let jobs = parse_feed(FEED_BODY);
        assert_eq!(jobs[0].title, "Nurse");
        assert_eq!(jobs[0].company.as_deref(), Some("Acme Health"));
    }

    #[test]
    fn test_title_without_separator_keeps_whole_string() {
        let jobs = parse_feed(FEED_BODY);
        assert_eq!(jobs[1].title, "Clinical Data Analyst");
        assert_eq!(jobs[1].company, None);
    }

    #[test]
    fn test_nested_markup_is_stripped() {
        let jobs = parse_feed(FEED_BODY);
        assert_eq!(
            jobs[0].description.as_deref(),
            Some("Ward duties and patient care.")
        );
    }

    #[test]
    fn test_missing_pub_date_is_none() {
        let jobs = parse_feed(FEED_BODY);
        assert_eq!(jobs[0].posted_at.as_deref(), Some("Mon, 01 Jul 2024 08:00:00 GMT"));
        assert_eq!(jobs[1].posted_at, None);
    }

    #[test]
    fn test_provisional_fields() {
        let jobs = parse_feed(FEED_BODY);
        assert_eq!(jobs[0].source, "indeed");
        assert_eq!(jobs[0].source_id, None);
        assert_eq!(jobs[0].location, None);
        assert!(jobs[0].tags.is_empty());
    }

    #[test]
    fn test_zero_items_yields_empty_list() {
        let jobs = parse_feed("<rss><channel><title>empty</title></channel></rss>");
        assert!(jobs.is_empty());
    }

    #[test]
    fn test_not_even_xml_yields_empty_list() {
        assert!(parse_feed("502 Bad Gateway").is_empty());
    }

    #[test]
    fn test_tags_match_case_insensitively() {
        let body = "<ITEM><TITLE>Surgeon</TITLE><LINK>https://x/1</LINK></ITEM>";
        let jobs = parse_feed(body);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Surgeon");
        assert_eq!(jobs[0].url, "https://x/1");
    }

    #[test]
    fn test_missing_link_defaults_to_empty() {
        let body = "<item><title>Orphan</title></item>";
        let jobs = parse_feed(body);
        assert_eq!(jobs[0].url, "");
    }
}
