//! Convert command - decode a stream dump and normalize the text

pub mod normalize;
pub mod stream;

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::core::input::{read_input, require_non_blank};
use normalize::{normalize, NormalizeConfig};
use stream::decode;

/// Run the full decode + normalize pipeline over one text blob
pub fn convert_text(raw: &str, config: &NormalizeConfig) -> String {
    let decoded = decode(raw);
    normalize(&decoded.text, config)
}

/// Run the convert command
pub fn run_convert(
    input: Option<&Path>,
    output: Option<&Path>,
    config: NormalizeConfig,
    quiet: bool,
    verbose: bool,
) -> Result<()> {
    let raw = read_input(input).context("failed to read input")?;
    if require_non_blank(&raw).is_err() {
        bail!("input is empty; paste or pipe some text first");
    }

    let decoded = decode(&raw);
    if verbose {
        if let Ok(echo) = serde_json::to_string(&config) {
            eprintln!("config: {}", echo);
        }
        eprintln!(
            "decode: {} event lines, {} deltas, {} malformed skipped, extracted: {}",
            decoded.event_lines, decoded.deltas, decoded.malformed_lines, decoded.extracted
        );
    }

    let cleaned = normalize(&decoded.text, &config);

    match output {
        Some(path) => {
            std::fs::write(path, &cleaned)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if !quiet {
                eprintln!("wrote {} bytes to {}", cleaned.len(), path.display());
            }
        }
        None => println!("{}", cleaned),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_text_end_to_end() {
        let raw = concat!(
            r#"data: {"event":"content_delta","choices":[{"delta":{"content":"The quick "}}]}"#,
            "\n",
            r#"data: {"event":"content_delta","choices":[{"delta":{"content":"brown fox."}}]}"#,
        );
        let out = convert_text(raw, &NormalizeConfig::default());
        assert_eq!(out, "The quick brown fox.");
    }

    #[test]
    fn test_convert_text_plain_input() {
        let out = convert_text("plain [10:23] text", &NormalizeConfig::default());
        assert_eq!(out, "plain text");
    }

    #[test]
    fn test_convert_text_normalizes_decoded_stream() {
        let raw = concat!(
            r#"data: {"event":"content_delta","choices":[{"delta":{"content":"step [11:02] one\n\n\n"}}]}"#,
            "\n",
            r#"data: {"event":"content_delta","choices":[{"delta":{"content":"step two [===> ]"}}]}"#,
        );
        let out = convert_text(raw, &NormalizeConfig::default());
        assert_eq!(out, "step one\n\nstep two");
    }
}
