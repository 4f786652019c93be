//! unstream - reconstruct clean text from SSE-style model stream dumps
//!
//! unstream provides:
//! - Stream decoding: rebuilds the full message from `data:` delta lines
//! - Text normalization: strips timestamps, progress bars and stray whitespace
//! - Literal search with cyclic navigation and highlight-ready segments

use anyhow::Result;
use clap::Parser;

mod cli;
mod convert;
mod core;
mod search;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
