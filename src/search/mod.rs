//! Search command - find literal occurrences and render them

pub mod engine;
pub mod segment;
pub mod state;

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::convert::convert_text;
use crate::convert::normalize::NormalizeConfig;
use crate::core::input::read_input;
use crate::core::render::{RenderConfig, Renderer};
use state::SearchSession;

/// Run the search command
pub fn run_search(
    input: Option<&Path>,
    query: &str,
    case_sensitive: bool,
    current: usize,
    convert_first: bool,
    render_config: RenderConfig,
    quiet: bool,
) -> Result<()> {
    if query.trim().is_empty() {
        bail!("query is empty; nothing to search for");
    }

    let raw = read_input(input).context("failed to read input")?;
    let haystack = if convert_first {
        convert_text(&raw, &NormalizeConfig::default())
    } else {
        raw
    };

    let mut session = SearchSession::new();
    session.set_case_sensitive(&haystack, case_sensitive);
    session.run_query(&haystack, query);

    // --current is 1-indexed; walking the cursor there keeps the state
    // machine as the only writer of cursor values, wrapping included
    for _ in 1..current.max(1) {
        session.next();
    }

    if !quiet {
        match session.matches().len() {
            0 => eprintln!("no matches"),
            1 => eprintln!("1 match"),
            n => eprintln!("{} matches", n),
        }
    }

    let report = session.report();
    let renderer = Renderer::with_config(render_config);
    println!("{}", renderer.render(&report, &haystack));

    Ok(())
}
