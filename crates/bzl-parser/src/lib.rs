//! # bzl-parser
//!
//! A parser for Bazel BUILD files, a restricted dialect of a Python-like
//! language: expressions, literal data structures, comprehensions, simple
//! statements, and embedded uninterpreted Python blocks.
//!
//! The parser turns a byte stream into a faithful syntax tree that preserves
//! every position and every comment, so that a downstream formatter can
//! round-trip the file (parse → print → parse) without visible change beyond
//! intentional normalization.
//!
//! ## Key properties
//!
//! - **Lossless**: every comment from the input is reachable through exactly
//!   one node's comment set; all positions are absolute into the original
//!   byte stream.
//! - **First-error-only**: the first lexical or syntax error aborts the parse
//!   with its position; there is no recovery and no partial tree.
//! - **Pure**: a parse is a synchronous function from source text to a tree
//!   or an error, with no shared state. Independent parses may run on
//!   separate threads without coordination.
//!
//! ## Example
//!
//! ```rust
//! use bzl_parser::parse;
//!
//! let file = parse("cc_library(\n    name = \"util\",\n)\n")?;
//! assert_eq!(file.stmts.len(), 1);
//! # Ok::<(), bzl_parser::ParseError>(())
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;

use bzl_ast::{Expr, File};
pub use diagnostics::{LexError, ParseError, ParseResult};
pub use parser::Parser;

/// Parses a complete BUILD file from source text.
///
/// ## Errors
///
/// Returns the first lexical or syntax error with its position.
pub fn parse(source: &str) -> ParseResult<File> { Parser::new(source)?.parse_file(None) }

/// Parses a single expression from source text.
///
/// Trailing newlines are permitted; any other trailing input is an error.
///
/// ## Errors
///
/// Returns the first lexical or syntax error with its position.
pub fn parse_expression(source: &str) -> ParseResult<Expr> {
    let mut parser = Parser::new(source)?;
    parser.parse_standalone_expression()
}
