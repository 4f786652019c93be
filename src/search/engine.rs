//! Literal substring search
//!
//! Queries are literal text, not patterns: metacharacters are escaped
//! before the scan even though a regex engine does the matching.

use regex::RegexBuilder;

use crate::core::model::MatchSpan;

/// Find all non-overlapping occurrences of `query` in `haystack`, left to
/// right, in ascending start order.
///
/// An empty or whitespace-only query yields no matches without scanning.
pub fn search(haystack: &str, query: &str, case_sensitive: bool) -> Vec<MatchSpan> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let pattern = regex::escape(query);
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .expect("escaped literal query is a valid pattern");

    re.find_iter(haystack)
        .map(|m| MatchSpan::new(m.start(), m.end(), m.as_str()))
        .collect()
}
