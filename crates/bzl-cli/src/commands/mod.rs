//! Command implementations for the bzl CLI

#![allow(unreachable_pub)]

pub mod check;
pub mod dump;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Reads a source file, or standard input when the path is `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        let _ = std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read standard input")?;
        return Ok(source);
    }

    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// The path recorded in the tree: none for standard input.
pub fn tree_path(path: &Path) -> Option<PathBuf> {
    (path != Path::new("-")).then(|| path.to_path_buf())
}
