//! Check command implementation

use std::path::PathBuf;

use anyhow::{Result, bail};
use bzl_parser::Parser;

use super::{read_source, tree_path};

/// Parse each file and report the first syntax error per file.
pub fn execute(files: &[PathBuf], verbose: bool) -> Result<()> {
    let mut failures = 0usize;

    for path in files {
        let source = read_source(path)?;

        match Parser::new(&source).and_then(|parser| parser.parse_file(tree_path(path))) {
            Ok(file) => {
                log::debug!("{}: {} statements", path.display(), file.stmts.len());
                if verbose {
                    println!("{}: ok", path.display());
                }
            }
            Err(err) => {
                eprintln!("{}:{err}", path.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} file(s) failed to parse");
    }

    Ok(())
}
