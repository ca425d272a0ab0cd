//! Dump command implementation

use std::path::Path;

use anyhow::Result;
use bzl_parser::Parser;

use super::{read_source, tree_path};

/// Parse one file and print its syntax tree.
pub fn execute(path: &Path) -> Result<()> {
    let source = read_source(path)?;
    let file = Parser::new(&source)?.parse_file(tree_path(path))?;

    println!("{file:#?}");

    Ok(())
}
