//! Tokenizer — turns free text into lowercase tokens for overlap scoring.
//!
//! A token is a maximal run of ASCII letters, digits, `+`, `#`, or `.`,
//! which keeps terms like "c++", "c#", and "node.js" intact. No stopword
//! removal, no stemming.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9+#.]+").expect("valid token pattern"));

/// Tokenizes `text` into lowercase tokens in input order.
/// Empty input yields an empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}

/// Set-semantics view of [`tokenize`], used for intersection counting.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}
