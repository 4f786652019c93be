//! Stream decoder
//!
//! Reconstructs the original message from an SSE-style stream dump: lines
//! prefixed with `data:` carry JSON payloads, and each `content_delta` event
//! holds an incremental content fragment. Everything else (blank lines,
//! `[DONE]`, finish events, malformed payloads) is skipped, never fatal.

use serde::Deserialize;

/// Line prefix marking a stream event
const DATA_PREFIX: &str = "data:";

/// Terminator payload marking the end of a stream
const DONE_SENTINEL: &str = "[DONE]";

/// Event kind carried by a stream payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ContentDelta,
    FinishReason,
    #[serde(other)]
    Other,
}

/// One parsed payload line; discarded as soon as its content is consumed
#[derive(Debug, Deserialize)]
struct StreamEvent {
    #[serde(default)]
    event: Option<EventKind>,
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    delta: Option<Delta>,
}

#[derive(Debug, Deserialize)]
struct Delta {
    #[serde(default)]
    content: Option<String>,
}

impl StreamEvent {
    /// Content fragment at the first choice's delta; present only for
    /// content_delta events carrying a non-null string
    fn delta_content(&self) -> Option<&str> {
        if self.event != Some(EventKind::ContentDelta) {
            return None;
        }
        self.choices.first()?.delta.as_ref()?.content.as_deref()
    }
}

/// Outcome of decoding one input blob
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// The reconstructed message, or the original input when nothing
    /// could be extracted
    pub text: String,

    /// Lines that carried the event prefix
    pub event_lines: usize,

    /// Content fragments appended to the accumulator
    pub deltas: usize,

    /// Event lines whose payload failed to parse (skipped)
    pub malformed_lines: usize,

    /// Whether `text` was reconstructed from deltas rather than passed
    /// through
    pub extracted: bool,
}

/// Decode an SSE-style stream dump into the concatenated message.
///
/// Pure and deterministic; never fails. Inputs without the event marker
/// pass through unchanged, and a stream from which nothing can be
/// extracted falls back to the original input rather than an empty string.
pub fn decode(raw: &str) -> DecodeOutcome {
    if !raw.contains(DATA_PREFIX) {
        return DecodeOutcome {
            text: raw.to_string(),
            ..Default::default()
        };
    }

    let mut outcome = DecodeOutcome::default();
    let mut content = String::new();

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some(rest) = trimmed.strip_prefix(DATA_PREFIX) else {
            continue;
        };
        outcome.event_lines += 1;

        let payload = rest.trim();
        if payload.is_empty() || payload == DONE_SENTINEL {
            continue;
        }

        match serde_json::from_str::<StreamEvent>(payload) {
            Ok(event) => {
                if let Some(delta) = event.delta_content() {
                    content.push_str(delta);
                    outcome.deltas += 1;
                }
            }
            Err(_) => outcome.malformed_lines += 1,
        }
    }

    if content.is_empty() {
        outcome.text = raw.to_string();
    } else {
        outcome.text = content;
        outcome.extracted = true;
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta_line(content: &str) -> String {
        format!(
            r#"data: {{"event":"content_delta","choices":[{{"delta":{{"content":"{}"}}}}]}}"#,
            content
        )
    }

    #[test]
    fn test_decode_passthrough_without_marker() {
        let raw = "plain text, no stream here";
        let outcome = decode(raw);
        assert_eq!(outcome.text, raw);
        assert!(!outcome.extracted);
        assert_eq!(outcome.event_lines, 0);
    }

    #[test]
    fn test_decode_concatenates_deltas() {
        let raw = format!("{}\n{}", delta_line("The quick "), delta_line("brown fox."));
        let outcome = decode(&raw);
        assert_eq!(outcome.text, "The quick brown fox.");
        assert!(outcome.extracted);
        assert_eq!(outcome.deltas, 2);
        assert_eq!(outcome.event_lines, 2);
    }

    #[test]
    fn test_decode_skips_done_and_blank_lines() {
        let raw = format!("\n{}\n\ndata: [DONE]\ndata:\n", delta_line("hello"));
        let outcome = decode(&raw);
        assert_eq!(outcome.text, "hello");
        assert_eq!(outcome.event_lines, 3);
        assert_eq!(outcome.malformed_lines, 0);
    }

    #[test]
    fn test_decode_ignores_finish_reason_events() {
        let raw = format!(
            "{}\ndata: {{\"event\":\"finish_reason\",\"choices\":[{{\"delta\":{{\"content\":null}},\"finish_reason\":\"stop\"}}]}}",
            delta_line("done")
        );
        let outcome = decode(&raw);
        assert_eq!(outcome.text, "done");
        assert_eq!(outcome.deltas, 1);
    }

    #[test]
    fn test_decode_ignores_null_content_delta() {
        let raw = r#"data: {"event":"content_delta","choices":[{"delta":{"content":null}}]}"#;
        let outcome = decode(raw);
        // nothing extracted, input passes through
        assert_eq!(outcome.text, raw);
        assert!(!outcome.extracted);
        assert_eq!(outcome.deltas, 0);
    }

    #[test]
    fn test_decode_skips_malformed_lines_and_continues() {
        let raw = format!(
            "data: {{not json at all\n{}\ndata: [broken\n{}",
            delta_line("a"),
            delta_line("b")
        );
        let outcome = decode(&raw);
        assert_eq!(outcome.text, "ab");
        assert_eq!(outcome.malformed_lines, 2);
        assert_eq!(outcome.deltas, 2);
    }

    #[test]
    fn test_decode_ignores_non_event_lines() {
        let raw = format!("random header\n{}\ntrailing noise", delta_line("x"));
        let outcome = decode(&raw);
        assert_eq!(outcome.text, "x");
        assert_eq!(outcome.event_lines, 1);
    }

    #[test]
    fn test_decode_unknown_event_kind_is_ignored() {
        let raw = format!(
            "data: {{\"event\":\"ping\",\"choices\":[{{\"delta\":{{\"content\":\"nope\"}}}}]}}\n{}",
            delta_line("yes")
        );
        let outcome = decode(&raw);
        assert_eq!(outcome.text, "yes");
        assert_eq!(outcome.malformed_lines, 0);
    }

    #[test]
    fn test_decode_fallback_when_stream_has_no_content() {
        let raw = "data: [DONE]";
        let outcome = decode(raw);
        assert_eq!(outcome.text, raw);
        assert!(!outcome.extracted);
    }

    #[test]
    fn test_decode_handles_indented_event_lines() {
        let raw = format!("   {}   ", delta_line("indented"));
        let outcome = decode(&raw);
        assert_eq!(outcome.text, "indented");
    }

    #[test]
    fn test_decode_missing_event_field_is_ignored() {
        let raw = r#"data: {"choices":[{"delta":{"content":"orphan"}}]}"#;
        let outcome = decode(raw);
        assert_eq!(outcome.text, raw);
        assert_eq!(outcome.malformed_lines, 0);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let raw = format!("{}\ndata: {{bad\n", delta_line("abc"));
        assert_eq!(decode(&raw), decode(&raw));
    }
}
