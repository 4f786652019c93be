//! Input acquisition
//!
//! Reads the text blob to operate on from a file or stdin, with consistent
//! handling for:
//! - Non-UTF-8 content (lossy conversion, never a hard failure)
//! - Oversized input (rejected with a clear error)

use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Maximum input size in bytes (64 MB)
pub const MAX_INPUT_SIZE: u64 = 64 * 1024 * 1024;

/// Errors raised while acquiring input, before the core pipelines run
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("input too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },

    #[error("input is empty or whitespace-only")]
    Blank,
}

/// Read the input blob from a file, or from stdin when `path` is `None`
/// or `-`. Invalid UTF-8 bytes are replaced, not rejected.
pub fn read_input(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(p) if p != Path::new("-") => read_file(p),
        _ => read_stdin(),
    }
}

/// Reject empty or whitespace-only input before it reaches the core
/// pipelines; the core functions themselves accept any string.
pub fn require_non_blank(text: &str) -> Result<(), InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Blank);
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String, InputError> {
    let io_err = |source| InputError::Io {
        path: path.display().to_string(),
        source,
    };

    let metadata = std::fs::metadata(path).map_err(io_err)?;
    if metadata.len() > MAX_INPUT_SIZE {
        return Err(InputError::TooLarge {
            size: metadata.len(),
            limit: MAX_INPUT_SIZE,
        });
    }

    let bytes = std::fs::read(path).map_err(io_err)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn read_stdin() -> Result<String, InputError> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .lock()
        .take(MAX_INPUT_SIZE + 1)
        .read_to_end(&mut bytes)
        .map_err(|source| InputError::Io {
            path: "<stdin>".to_string(),
            source,
        })?;

    if bytes.len() as u64 > MAX_INPUT_SIZE {
        return Err(InputError::TooLarge {
            size: bytes.len() as u64,
            limit: MAX_INPUT_SIZE,
        });
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
