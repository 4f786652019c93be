//! Segment builder
//!
//! Turns a haystack and its match list into an ordered run of segments for
//! highlighting. Concatenating the segment texts in order reproduces the
//! haystack exactly; no characters are dropped or duplicated.

use crate::core::model::{MatchSpan, Segment, SegmentRole};

/// Build the renderable segmentation of `haystack` for `matches`.
///
/// The match at index `cursor` (when present) gets the `CurrentMatch` role;
/// all other matches get `Match`. Gaps and the trailing tail become `Plain`
/// segments, omitted when empty.
pub fn build_segments(
    haystack: &str,
    matches: &[MatchSpan],
    cursor: Option<usize>,
) -> Vec<Segment> {
    if matches.is_empty() {
        if haystack.is_empty() {
            return Vec::new();
        }
        return vec![Segment::plain(haystack)];
    }

    let mut segments = Vec::with_capacity(matches.len() * 2 + 1);
    let mut last = 0;

    for (index, m) in matches.iter().enumerate() {
        if m.start > last {
            segments.push(Segment::plain(&haystack[last..m.start]));
        }

        let role = if cursor == Some(index) {
            SegmentRole::CurrentMatch
        } else {
            SegmentRole::Match
        };
        segments.push(Segment::with_role(&haystack[m.start..m.end], role));

        last = m.end;
    }

    if last < haystack.len() {
        segments.push(Segment::plain(&haystack[last..]));
    }

    segments
}
