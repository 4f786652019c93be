//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::convert::normalize::NormalizeConfig;
use crate::core::render::{OutputFormat, RenderConfig};

/// unstream - reconstruct clean text from SSE-style model stream dumps.
#[derive(Parser, Debug)]
#[command(name = "unstream")]
#[command(
    author,
    version,
    about,
    long_about = r#"unstream rebuilds the full message from a buffered stream dump
(`data:` lines carrying JSON content deltas), cleans the result, and can
search the cleaned text for literal occurrences of a query.

Commands:
- convert: decode the stream (if present) and normalize the text
- search: find all occurrences of a literal query, with highlighting

Examples:
    unstream convert dump.txt
    cat dump.txt | unstream convert --merge-lines -o clean.txt
    unstream search "fox" clean.txt
    unstream search "fox" dump.txt --convert --format jsonl
"#
)]
pub struct Cli {
    /// Output format for search results (text/jsonl/json/md).
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format for search results.\n\n\
Supported values:\n\
- text (default): the haystack with matches highlighted\n\
- jsonl: one JSON object per match\n\
- json: the whole report as a single JSON document\n\
- md (markdown): human-friendly match list\n\n\
convert always emits plain text; this flag has no effect on it."
    )]
    pub format: String,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. In text format this degrades the highlighted\n\
view to the plain haystack, which is useful when piping to files."
    )]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress status lines on stderr (match counts, write confirmations).\n\
Results are still printed to stdout."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable more detailed diagnostics on stderr, such as decode accounting\n\
(event lines seen, deltas appended, malformed lines skipped)."
    )]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL search output with indentation for human\n\
readability. Has no effect on text/md formats."
    )]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a stream dump and normalize the text.
    #[command(
        long_about = r#"Read FILE (or stdin when omitted or `-`), reconstruct the message from
`data:` content-delta lines when the input is a stream dump, then run the
normalization pipeline: strip timestamps and progress bars, collapse
irregular whitespace, tidy paragraphs.

Inputs without a stream marker pass straight into normalization, so this
also works as a plain text cleaner.

Examples:
  unstream convert dump.txt
  unstream convert dump.txt -o clean.txt
  cat log.txt | unstream convert --keep-timestamps --merge-lines
"#
    )]
    Convert {
        /// Input file (stdin when omitted or `-`).
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Write the cleaned text to a file instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Keep clock-time artifacts like [10:23:45].
        #[arg(
            long,
            long_help = "Keep clock-time artifacts such as [10:23:45] or 14:23.\n\n\
By default they are stripped."
        )]
        keep_timestamps: bool,

        /// Keep progress-bar artifacts like [=====>   ].
        #[arg(
            long,
            long_help = "Keep progress-bar artifacts such as [=====>   ].\n\n\
By default they are stripped. Only brackets containing solely '=', '>' and\n\
whitespace count as progress bars; [42%] is left alone."
        )]
        keep_progress_bars: bool,

        /// Do not re-trim paragraph blocks.
        #[arg(
            long,
            long_help = "Skip the paragraph pass that trims each block and drops empty ones.\n\n\
Paragraph breaks still survive the whitespace collapse as double newlines."
        )]
        no_paragraphs: bool,

        /// Merge all lines into one, separated by single spaces.
        #[arg(long)]
        merge_lines: bool,
    },

    /// Search the text for literal occurrences of a query.
    #[command(
        long_about = r#"Read FILE (or stdin when omitted or `-`) and find every occurrence of
QUERY as literal text (metacharacters carry no special meaning). Matching
is case-insensitive unless --case-sensitive is given.

The text format prints the haystack with matches highlighted and the
current match emphasized; jsonl/json/md emit structured match records
with byte offsets and line excerpts.

Examples:
    unstream search "fox" clean.txt
    unstream search "fox" clean.txt --case-sensitive --format jsonl
    unstream search "fox" dump.txt --convert --current 2
"#
    )]
    Search {
        /// Literal text to search for.
        #[arg(value_name = "QUERY")]
        query: String,

        /// Input file (stdin when omitted or `-`).
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Match case exactly.
        #[arg(short = 's', long)]
        case_sensitive: bool,

        /// Which occurrence counts as the current match (1-indexed).
        #[arg(
            long,
            default_value_t = 1,
            value_name = "N",
            long_help = "Select which occurrence is the current match (1-indexed).\n\n\
The selection is applied by stepping forward through the matches, so a\n\
value past the last occurrence wraps around to the first."
        )]
        current: usize,

        /// Run the decode + normalize pipeline on the input first.
        #[arg(
            long,
            long_help = "Treat the input as a raw stream dump: decode and normalize it with\n\
default settings before searching, so offsets refer to the cleaned text."
        )]
        convert: bool,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Convert {
            input,
            output,
            keep_timestamps,
            keep_progress_bars,
            no_paragraphs,
            merge_lines,
        } => {
            let config = NormalizeConfig {
                remove_timestamps: !keep_timestamps,
                remove_progress_bars: !keep_progress_bars,
                preserve_paragraphs: !no_paragraphs,
                merge_lines,
            };
            crate::convert::run_convert(
                input.as_deref(),
                output.as_deref(),
                config,
                cli.quiet,
                cli.verbose,
            )
        }

        Commands::Search {
            query,
            input,
            case_sensitive,
            current,
            convert,
        } => crate::search::run_search(
            input.as_deref(),
            &query,
            case_sensitive,
            current,
            convert,
            render_config,
            cli.quiet,
        ),
    }
}
