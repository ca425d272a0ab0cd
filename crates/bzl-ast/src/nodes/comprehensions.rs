//! Comprehension node types.
//!
//! List, tuple (generator), dict and bare call-argument comprehensions share
//! one representation, [`ListForExpr`], distinguished by a bracket tag.

use std::fmt;

use bzl_source::{Position, Span};

use super::{ASTNode, Expr, impl_node};
use crate::comments::CommentSet;

/// The bracket kind of a comprehension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    /// `[x for ...]`
    Square,
    /// `(x for ...)`
    Round,
    /// `{k: v for ...}`
    Brace,
    /// `f(x for ...)` — bare, inside a call's argument list
    Bare,
}

impl BracketKind {
    /// The bracket pair as written, empty for the bare form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "[]",
            Self::Round => "()",
            Self::Brace => "{}",
            Self::Bare => "",
        }
    }
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

/// A comprehension: a produced expression, one or more `for` clauses and zero
/// or more `if` clauses, inside one of the bracket kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListForExpr {
    /// The bracket kind
    pub brack: BracketKind,
    /// Position of the opening bracket (for the bare form, where the
    /// produced expression starts)
    pub start: Position,
    /// The produced expression (a key/value pair for `{}` comprehensions)
    pub x: Expr,
    /// The `for` clauses, in source order (at least one)
    pub fors: Vec<ForClause>,
    /// The `if` clauses, in source order
    pub ifs: Vec<IfClause>,
    /// Position of the closing bracket (for the bare form, the enclosing
    /// call's closing parenthesis)
    pub end: Position,
    /// Hint: break after the opening bracket
    pub force_multi_line: bool,
    /// Attached comments
    pub comments: CommentSet,
}

impl ListForExpr {
    /// Creates a new comprehension, inferring the multi-line hint from the
    /// opening bracket and the produced expression.
    #[must_use]
    pub fn new(
        brack: BracketKind,
        start: Position,
        x: Expr,
        fors: Vec<ForClause>,
        ifs: Vec<IfClause>,
        end: Position,
    ) -> Self {
        let force_multi_line = start.line != x.span().start.line;
        Self { brack, start, x, fors, ifs, end, force_multi_line, comments: CommentSet::new() }
    }
}

impl_node!(ListForExpr, |self| Span::new(self.start, self.end.advance(1)));

impl fmt::Display for ListForExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListFor({:?})", self.brack.as_str())
    }
}

/// A `for vars in x` clause of a comprehension.
///
/// `for (a, b) in x` binds a variable *list*, not a tuple; the parenthesized
/// form is flattened into `vars`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForClause {
    /// Start of the `for` keyword
    pub for_start: Position,
    /// The bound variables
    pub vars: Vec<Expr>,
    /// Start of the `in` keyword
    pub in_start: Position,
    /// The iterable
    pub x: Expr,
    /// Attached comments
    pub comments: CommentSet,
}

impl ForClause {
    /// Creates a new for clause.
    #[must_use]
    pub const fn new(for_start: Position, vars: Vec<Expr>, in_start: Position, x: Expr) -> Self {
        Self { for_start, vars, in_start, x, comments: CommentSet::new() }
    }
}

impl_node!(ForClause, |self| Span::new(self.for_start, self.x.span().end));

impl fmt::Display for ForClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "For[{} vars]", self.vars.len())
    }
}

/// An `if cond` filter clause of a comprehension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfClause {
    /// Start of the `if` keyword
    pub if_start: Position,
    /// The filter condition
    pub cond: Expr,
    /// Attached comments
    pub comments: CommentSet,
}

impl IfClause {
    /// Creates a new if clause.
    #[must_use]
    pub const fn new(if_start: Position, cond: Expr) -> Self {
        Self { if_start, cond, comments: CommentSet::new() }
    }
}

impl_node!(IfClause, |self| Span::new(self.if_start, self.cond.span().end));

impl fmt::Display for IfClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "If") }
}
