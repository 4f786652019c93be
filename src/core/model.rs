//! Search result model
//!
//! Search output maps to these serializable records before rendering, so
//! every output format (text/jsonl/json/md) works from the same data.

use serde::{Deserialize, Serialize};

/// One occurrence of the query within a haystack.
///
/// `start` and `end` are byte offsets into the haystack, `end` exclusive.
/// Spans are produced in ascending `start` order and never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Length of the matched text in bytes
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Role of one segment in the highlighted view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentRole {
    Plain,
    Match,
    CurrentMatch,
}

/// One run of text in the highlighted view.
///
/// Segments are purely derived data: concatenating their `text` fields in
/// order reproduces the haystack exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub role: SegmentRole,
}

impl Segment {
    /// Create a plain (unhighlighted) segment
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role: SegmentRole::Plain,
        }
    }

    /// Create a segment with an explicit role
    pub fn with_role(text: impl Into<String>, role: SegmentRole) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }
}

/// One renderable row per match, for jsonl/md output
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    /// Zero-based position in the match sequence
    pub index: usize,

    /// Byte offset of the match start
    pub start: usize,

    /// Byte offset one past the match end
    pub end: usize,

    /// The matched text
    pub text: String,

    /// Whether this match is the currently selected one
    pub current: bool,

    /// 1-based line number containing the match start
    pub line: u32,

    /// The full line containing the match start
    pub excerpt: String,
}

/// Snapshot of one search, handed to the renderer.
///
/// Pure derived data; the navigation session owns the live state.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub query: String,
    pub case_sensitive: bool,
    pub total: usize,
    pub matches: Vec<MatchSpan>,

    /// Index of the current match, absent when there are no matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<usize>,
}

impl SearchReport {
    pub fn new(
        query: impl Into<String>,
        case_sensitive: bool,
        matches: Vec<MatchSpan>,
        cursor: Option<usize>,
    ) -> Self {
        Self {
            query: query.into(),
            case_sensitive,
            total: matches.len(),
            matches,
            cursor,
        }
    }

    /// Derive one record per match, attaching the containing line of the
    /// haystack as the excerpt
    pub fn records(&self, haystack: &str) -> Vec<MatchRecord> {
        self.matches
            .iter()
            .enumerate()
            .map(|(index, m)| {
                let line = haystack[..m.start].matches('\n').count() as u32 + 1;
                let line_start = haystack[..m.start].rfind('\n').map(|i| i + 1).unwrap_or(0);
                let line_end = haystack[m.start..]
                    .find('\n')
                    .map(|i| m.start + i)
                    .unwrap_or(haystack.len());

                MatchRecord {
                    index,
                    start: m.start,
                    end: m.end,
                    text: m.text.clone(),
                    current: self.cursor == Some(index),
                    line,
                    excerpt: haystack[line_start..line_end].to_string(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_span_new() {
        let span = MatchSpan::new(4, 7, "fox");
        assert_eq!(span.start, 4);
        assert_eq!(span.end, 7);
        assert_eq!(span.text, "fox");
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn test_segment_constructors() {
        let plain = Segment::plain("hello");
        assert_eq!(plain.role, SegmentRole::Plain);

        let current = Segment::with_role("fox", SegmentRole::CurrentMatch);
        assert_eq!(current.role, SegmentRole::CurrentMatch);
        assert_eq!(current.text, "fox");
    }

    #[test]
    fn test_segment_role_serialization() {
        let seg = Segment::with_role("x", SegmentRole::CurrentMatch);
        let json = serde_json::to_string(&seg).unwrap();
        assert!(json.contains("\"role\":\"current_match\""));
    }

    #[test]
    fn test_report_counts_and_cursor() {
        let matches = vec![MatchSpan::new(0, 3, "fox"), MatchSpan::new(8, 11, "FOX")];
        let report = SearchReport::new("fox", false, matches, Some(0));
        assert_eq!(report.total, 2);
        assert_eq!(report.cursor, Some(0));
    }

    #[test]
    fn test_report_serialization_skips_absent_cursor() {
        let report = SearchReport::new("missing", true, Vec::new(), None);
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("cursor"));
        assert!(json.contains("\"total\":0"));
        assert!(json.contains("\"case_sensitive\":true"));
    }

    #[test]
    fn test_records_attach_line_excerpts() {
        let haystack = "first fox\nsecond line\nthird fox here";
        let matches = vec![MatchSpan::new(6, 9, "fox"), MatchSpan::new(28, 31, "fox")];
        let report = SearchReport::new("fox", true, matches, Some(1));

        let records = report.records(haystack);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].line, 1);
        assert_eq!(records[0].excerpt, "first fox");
        assert!(!records[0].current);

        assert_eq!(records[1].line, 3);
        assert_eq!(records[1].excerpt, "third fox here");
        assert!(records[1].current);
    }

    #[test]
    fn test_records_on_single_line_haystack() {
        let haystack = "fox Fox FOX";
        let matches = vec![MatchSpan::new(4, 7, "Fox")];
        let report = SearchReport::new("Fox", true, matches, Some(0));

        let records = report.records(haystack);
        assert_eq!(records[0].line, 1);
        assert_eq!(records[0].excerpt, haystack);
    }

    #[test]
    fn test_record_serialization() {
        let haystack = "fox";
        let report = SearchReport::new("fox", false, vec![MatchSpan::new(0, 3, "fox")], Some(0));
        let json = serde_json::to_string(&report.records(haystack)[0]).unwrap();
        assert!(json.contains("\"index\":0"));
        assert!(json.contains("\"current\":true"));
        assert!(json.contains("\"line\":1"));
    }
}
