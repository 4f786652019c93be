//! Renderer module
//!
//! Renders a SearchReport to different output formats: text, jsonl, json, md.
//! Text mode is the highlighted view built from segments; the other formats
//! emit one record per match.

use colored::Colorize;

use crate::core::model::{SearchReport, SegmentRole};
use crate::search::segment::build_segments;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for search reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a search report against its haystack
    pub fn render(&self, report: &SearchReport, haystack: &str) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(report, haystack),
            OutputFormat::Jsonl => self.render_jsonl(report, haystack),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Markdown => self.render_markdown(report, haystack),
        }
    }

    /// Render the haystack with matches highlighted.
    ///
    /// Without color (piped output, --no-color) this degrades to the raw
    /// haystack, since the segments concatenate back to it exactly.
    fn render_text(&self, report: &SearchReport, haystack: &str) -> String {
        let segments = build_segments(haystack, &report.matches, report.cursor);

        let mut out = String::with_capacity(haystack.len());
        for segment in &segments {
            match segment.role {
                SegmentRole::Plain => out.push_str(&segment.text),
                SegmentRole::Match => {
                    out.push_str(&segment.text.black().on_yellow().to_string());
                }
                SegmentRole::CurrentMatch => {
                    out.push_str(&segment.text.black().on_bright_yellow().bold().to_string());
                }
            }
        }
        out
    }

    /// Render as JSON Lines (one JSON object per match)
    fn render_jsonl(&self, report: &SearchReport, haystack: &str) -> String {
        report
            .records(haystack)
            .iter()
            .filter_map(|record| {
                if self.config.pretty {
                    serde_json::to_string_pretty(record).ok()
                } else {
                    serde_json::to_string(record).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render the whole report as a single JSON document
    fn render_json(&self, report: &SearchReport) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, report: &SearchReport, haystack: &str) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "# Matches for `{}` ({})\n\n",
            report.query,
            if report.case_sensitive {
                "case-sensitive"
            } else {
                "case-insensitive"
            }
        ));

        if report.matches.is_empty() {
            out.push_str("No matches.\n");
            return out;
        }

        out.push_str(&format!("{} match(es)\n\n", report.total));

        for record in report.records(haystack) {
            let marker = if record.current { " (current)" } else { "" };
            out.push_str(&format!(
                "- L{} [{}..{}){}: `{}`\n",
                record.line, record.start, record.end, marker, record.excerpt
            ));
        }

        out
    }
}
