//! File-level node types: the root [`File`], uninterpreted Python blocks and
//! free-standing comment blocks.

use std::fmt;
use std::path::PathBuf;

use bzl_source::{Position, Span};

use super::{Expr, impl_node};
use crate::comments::CommentSet;

/// The root of a parsed BUILD file: an ordered sequence of top-level
/// statements.
///
/// A statement is an expression, a [`PythonBlock`], or a [`CommentBlock`];
/// the tree exclusively owns all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// The file path, when parsed from disk
    pub path: Option<PathBuf>,
    /// The top-level statements, in source order
    pub stmts: Vec<Expr>,
}

impl File {
    /// Creates a new file root.
    #[must_use]
    pub const fn new(path: Option<PathBuf>, stmts: Vec<Expr>) -> Self { Self { path, stmts } }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File[{} stmts]", self.stmts.len())
    }
}

/// An uninterpreted top-level Python block (`def`, `if`, `for`, ... at file
/// scope), kept verbatim so the file can be reproduced byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonBlock {
    /// Start of the block
    pub start: Position,
    /// Position just past the last byte of the block
    pub end: Position,
    /// The verbatim block text
    pub token: String,
    /// Attached comments
    pub comments: CommentSet,
}

impl PythonBlock {
    /// Creates a new Python block.
    #[must_use]
    pub const fn new(start: Position, end: Position, token: String) -> Self {
        Self { start, end, token, comments: CommentSet::new() }
    }
}

impl_node!(PythonBlock, |self| Span::new(self.start, self.end));

impl fmt::Display for PythonBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "PythonBlock") }
}

/// A pseudo-node holding comments that belong to no real node (for example a
/// comment paragraph separated from everything by blank lines).
///
/// Its extent is purely synthetic: a zero-width span at the first comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    /// Start of the first comment in the block
    pub start: Position,
    /// The comments (always in `after`)
    pub comments: CommentSet,
}

impl CommentBlock {
    /// Creates a new, empty comment block.
    #[must_use]
    pub const fn new(start: Position) -> Self { Self { start, comments: CommentSet::new() } }
}

impl_node!(CommentBlock, |self| Span::new(self.start, self.start));

impl fmt::Display for CommentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommentBlock[{} comments]", self.comments.after.len())
    }
}
