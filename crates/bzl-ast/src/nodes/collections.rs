//! Container literal node types: lists, tuples, parenthesized expressions
//! and dictionaries.
//!
//! All containers record their bracket positions and, where a single trailing
//! comma is syntactically meaningful, its position ([`Position::NONE`] when
//! absent). Layout hints are inferred at construction from the bracket and
//! element positions so that they stay stable under reformatting of nested
//! structures.

use std::fmt;

use bzl_source::{Position, Span};

use super::{ASTNode, Expr, impl_node};
use crate::comments::CommentSet;
use crate::hints::{force_compact, force_multi_line};

/// A list literal: `[a, b, c]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListExpr {
    /// Position of the `[`
    pub lbrack: Position,
    /// The elements, in source order
    pub elems: Vec<Expr>,
    /// Position of the trailing comma, [`Position::NONE`] if absent
    pub comma: Position,
    /// Position of the `]`
    pub rbrack: Position,
    /// Hint: break after the opening bracket
    pub force_multi_line: bool,
    /// Attached comments
    pub comments: CommentSet,
}

impl ListExpr {
    /// Creates a new list literal, inferring the multi-line hint.
    #[must_use]
    pub fn new(lbrack: Position, elems: Vec<Expr>, comma: Position, rbrack: Position) -> Self {
        let force_multi_line = force_multi_line(lbrack, &elems, rbrack);
        Self { lbrack, elems, comma, rbrack, force_multi_line, comments: CommentSet::new() }
    }
}

impl_node!(ListExpr, |self| Span::new(self.lbrack, self.rbrack.advance(1)));

impl fmt::Display for ListExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List[{} elems]", self.elems.len())
    }
}

/// A tuple literal: `(a, b)` or `(a,)`.
///
/// A parenthesized expression without a trailing comma is *not* a tuple; see
/// [`ParenExpr`]. The trailing-comma position is the sole disambiguator for
/// the one-element case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleExpr {
    /// Position of the `(`
    pub lparen: Position,
    /// The elements, in source order
    pub elems: Vec<Expr>,
    /// Position of the trailing comma, [`Position::NONE`] if absent
    pub comma: Position,
    /// Position of the `)`
    pub rparen: Position,
    /// Hint: keep the elements on the opening line
    pub force_compact: bool,
    /// Hint: break after the opening parenthesis
    pub force_multi_line: bool,
    /// Attached comments
    pub comments: CommentSet,
}

impl TupleExpr {
    /// Creates a new tuple literal, inferring the layout hints.
    #[must_use]
    pub fn new(lparen: Position, elems: Vec<Expr>, comma: Position, rparen: Position) -> Self {
        let force_compact = force_compact(lparen, &elems, rparen);
        let force_multi_line = force_multi_line(lparen, &elems, rparen);
        Self {
            lparen,
            elems,
            comma,
            rparen,
            force_compact,
            force_multi_line,
            comments: CommentSet::new(),
        }
    }
}

impl_node!(TupleExpr, |self| Span::new(self.lparen, self.rparen.advance(1)));

impl fmt::Display for TupleExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tuple[{} elems]", self.elems.len())
    }
}

/// A parenthesized expression: `(x)` with no trailing comma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParenExpr {
    /// Position of the `(`
    pub lparen: Position,
    /// The inner expression
    pub x: Expr,
    /// Position of the `)`
    pub rparen: Position,
    /// Hint: break after the opening parenthesis
    pub force_multi_line: bool,
    /// Attached comments
    pub comments: CommentSet,
}

impl ParenExpr {
    /// Creates a new parenthesized expression, inferring the multi-line hint.
    #[must_use]
    pub fn new(lparen: Position, x: Expr, rparen: Position) -> Self {
        let force_multi_line = force_multi_line(lparen, std::slice::from_ref(&x), rparen);
        Self { lparen, x, rparen, force_multi_line, comments: CommentSet::new() }
    }
}

impl_node!(ParenExpr, |self| Span::new(self.lparen, self.rparen.advance(1)));

impl fmt::Display for ParenExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Paren") }
}

/// A dictionary literal: `{"k": v, ...}`.
///
/// Entries are always [`Expr::KeyValue`] nodes; the parser enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictExpr {
    /// Position of the `{`
    pub lbrace: Position,
    /// The `key: value` entries, in source order
    pub entries: Vec<Expr>,
    /// Position of the trailing comma, [`Position::NONE`] if absent
    pub comma: Position,
    /// Position of the `}`
    pub rbrace: Position,
    /// Hint: break after the opening brace
    pub force_multi_line: bool,
    /// Attached comments
    pub comments: CommentSet,
}

impl DictExpr {
    /// Creates a new dictionary literal, inferring the multi-line hint.
    #[must_use]
    pub fn new(lbrace: Position, entries: Vec<Expr>, comma: Position, rbrace: Position) -> Self {
        let force_multi_line = force_multi_line(lbrace, &entries, rbrace);
        Self { lbrace, entries, comma, rbrace, force_multi_line, comments: CommentSet::new() }
    }
}

impl_node!(DictExpr, |self| Span::new(self.lbrace, self.rbrace.advance(1)));

impl fmt::Display for DictExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dict[{} entries]", self.entries.len())
    }
}

/// A `key: value` pair inside a dictionary or dict comprehension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueExpr {
    /// The key
    pub key: Expr,
    /// Position of the `:`
    pub colon: Position,
    /// The value
    pub value: Expr,
    /// Attached comments
    pub comments: CommentSet,
}

impl KeyValueExpr {
    /// Creates a new key/value pair.
    #[must_use]
    pub const fn new(key: Expr, colon: Position, value: Expr) -> Self {
        Self { key, colon, value, comments: CommentSet::new() }
    }
}

impl_node!(KeyValueExpr, |self| Span::new(self.key.span().start, self.value.span().end));

impl fmt::Display for KeyValueExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "KeyValue") }
}
