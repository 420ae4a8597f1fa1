//! Reading the inputs to scan.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Marker for standard input.
pub const STDIN: &str = "-";

/// One input with its display name.
#[derive(Debug)]
pub struct Input {
    /// File path, or `-` for stdin.
    pub source: String,
    /// Full text of the input.
    pub text: String,
}

/// Read every input, in order. No files means stdin.
///
/// Files that are not valid UTF-8 are decoded lossily.
pub fn read_inputs(files: &[PathBuf]) -> Result<Vec<Input>> {
    if files.is_empty() {
        return Ok(vec![read_stdin()?]);
    }
    files
        .iter()
        .map(|path| {
            if path.as_os_str() == STDIN {
                read_stdin()
            } else {
                read_file(path)
            }
        })
        .collect()
}

fn read_stdin() -> Result<Input> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;
    debug!(bytes = bytes.len(), "read stdin");
    Ok(Input {
        source: STDIN.to_string(),
        text: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

fn read_file(path: &Path) -> Result<Input> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read file");
    Ok(Input {
        source: path.display().to_string(),
        text: String::from_utf8_lossy(&bytes).into_owned(),
    })
}
