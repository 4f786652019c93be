//! Text normalizer
//!
//! Fixed-order cleanup pipeline over decoded text. Each stage is optional
//! per config except the whitespace collapse and the final trim, which
//! always run because the removal stages can leave irregular gaps behind.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Clock times, bracketed or bare: [H:MM], [H:MM:SS], H:MM, H:MM:SS
static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\d{1,2}:\d{2}(:\d{2})?\]|\d{1,2}:\d{2}(:\d{2})?")
        .expect("Invalid TIMESTAMP_RE regex")
});

/// Bracketed progress bars: [=====>   ], [>], []
static PROGRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[=*>*\s*\]").expect("Invalid PROGRESS_RE regex"));

/// Runs of horizontal whitespace (everything but newlines)
static HSPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\S\n]+").expect("Invalid HSPACE_RE regex"));

/// Spaces hugging a newline
static LINE_EDGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" *\n *").expect("Invalid LINE_EDGE_RE regex"));

/// Runs of blank lines (three or more newlines)
static BLANK_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("Invalid BLANK_RUN_RE regex"));

/// Surviving newline runs, for line merging
static NEWLINE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n+").expect("Invalid NEWLINE_RUN_RE regex"));

/// Normalization options, fixed per invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NormalizeConfig {
    /// Strip clock-time artifacts like `[10:23:45]` or `14:23`
    pub remove_timestamps: bool,

    /// Strip progress-bar artifacts like `[=====>   ]`
    pub remove_progress_bars: bool,

    /// Re-trim paragraph blocks and drop the empty ones
    pub preserve_paragraphs: bool,

    /// Merge every line run into a single space
    pub merge_lines: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            remove_timestamps: true,
            remove_progress_bars: true,
            preserve_paragraphs: true,
            merge_lines: false,
        }
    }
}

/// Run the cleanup pipeline over `text`.
///
/// Stages always execute in the same order regardless of which subset is
/// enabled. Never fails for any input; empty in, empty out. A second pass
/// with the same config finds nothing left to collapse.
pub fn normalize(text: &str, config: &NormalizeConfig) -> String {
    let mut out = text.to_string();

    if config.remove_timestamps {
        out = TIMESTAMP_RE.replace_all(&out, "").into_owned();
    }

    if config.remove_progress_bars {
        out = PROGRESS_RE.replace_all(&out, "").into_owned();
    }

    // Unconditional collapse: horizontal runs become one space, newlines
    // lose the spaces around them, and blank-line runs shrink so paragraph
    // breaks are exactly a double newline.
    out = HSPACE_RE.replace_all(&out, " ").into_owned();
    out = LINE_EDGE_RE.replace_all(&out, "\n").into_owned();
    out = BLANK_RUN_RE.replace_all(&out, "\n\n").into_owned();

    if config.preserve_paragraphs {
        out = out
            .split("\n\n")
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");
    }

    if config.merge_lines {
        out = NEWLINE_RUN_RE.replace_all(&out, " ").into_owned();
    }

    out.trim().to_string()
}
