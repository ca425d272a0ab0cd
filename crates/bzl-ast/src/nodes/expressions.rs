//! Core expression node types
//!
//! This file contains the scalar and operator expression variants. Container
//! literals live in `collections.rs`, comprehensions in `comprehensions.rs`.

use std::fmt;

use bzl_source::{Position, Span};

use super::{ASTNode, Expr, impl_node};
use crate::comments::CommentSet;
use crate::hints::{force_compact, force_multi_line};

// ============================================================================
// Literals
// ============================================================================

/// An identifier or numeric literal (e.g. `glob`, `0755`).
///
/// The raw token text is kept verbatim; the tree never interprets numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralExpr {
    /// Start of the token
    pub start: Position,
    /// Raw token text
    pub token: String,
    /// Attached comments
    pub comments: CommentSet,
}

impl LiteralExpr {
    /// Creates a new literal.
    #[must_use]
    pub const fn new(start: Position, token: String) -> Self {
        Self { start, token, comments: CommentSet::new() }
    }
}

impl_node!(LiteralExpr, |self| Span::new(self.start, self.start.advance(self.token.len())));

impl fmt::Display for LiteralExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Literal({})", self.token)
    }
}

/// A string literal (e.g. `"//visibility:public"`, `'''docs'''`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringExpr {
    /// Start of the opening quote
    pub start: Position,
    /// Decoded string value
    pub value: String,
    /// Whether the literal uses triple quotes
    pub triple_quote: bool,
    /// Raw source text of the literal, quotes included
    pub token: String,
    /// Position just past the closing quote
    pub end: Position,
    /// Attached comments
    pub comments: CommentSet,
}

impl StringExpr {
    /// Creates a new string literal.
    #[must_use]
    pub const fn new(
        start: Position,
        value: String,
        triple_quote: bool,
        token: String,
        end: Position,
    ) -> Self {
        Self { start, value, triple_quote, token, end, comments: CommentSet::new() }
    }
}

impl_node!(StringExpr, |self| Span::new(self.start, self.end));

impl fmt::Display for StringExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "String({:?})", self.value)
    }
}

// ============================================================================
// Operators
// ============================================================================

/// A unary operation: `-x`, `not x`, or `*args`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryExpr {
    /// Start of the operator token
    pub op_start: Position,
    /// Operator text (`-`, `not` or `*`)
    pub op: &'static str,
    /// The operand
    pub x: Expr,
    /// Attached comments
    pub comments: CommentSet,
}

impl UnaryExpr {
    /// Creates a new unary operation.
    #[must_use]
    pub const fn new(op_start: Position, op: &'static str, x: Expr) -> Self {
        Self { op_start, op, x, comments: CommentSet::new() }
    }
}

impl_node!(UnaryExpr, |self| Span::new(self.op_start, self.x.span().end));

impl fmt::Display for UnaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Unary({})", self.op) }
}

/// A binary operation.
///
/// Assignments (`=`, `+=`) and the normalized keyword operators (`not in`,
/// `is not`) are binary operations too; the operator is stored as its exact
/// source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    /// Left operand
    pub x: Expr,
    /// Start of the operator token
    pub op_start: Position,
    /// Operator text (e.g. `+`, `=`, `not in`)
    pub op: &'static str,
    /// Right operand
    pub y: Expr,
    /// True iff the right operand starts on a later line than the left ends on
    pub line_break: bool,
    /// Attached comments
    pub comments: CommentSet,
}

impl BinaryExpr {
    /// Creates a new binary operation, recording whether the source had a
    /// line break between the operands.
    #[must_use]
    pub fn new(x: Expr, op_start: Position, op: &'static str, y: Expr) -> Self {
        let line_break = x.span().end.line < y.span().start.line;
        Self { x, op_start, op, y, line_break, comments: CommentSet::new() }
    }
}

impl_node!(BinaryExpr, |self| Span::new(self.x.span().start, self.y.span().end));

impl fmt::Display for BinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Binary({})", self.op) }
}

/// A ternary conditional: `then if test else orelse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalExpr {
    /// Value when the test holds
    pub then: Expr,
    /// Start of the `if` keyword
    pub if_start: Position,
    /// The condition
    pub test: Expr,
    /// Start of the `else` keyword
    pub else_start: Position,
    /// Value when the test fails
    pub orelse: Expr,
    /// Attached comments
    pub comments: CommentSet,
}

impl ConditionalExpr {
    /// Creates a new conditional expression.
    #[must_use]
    pub const fn new(
        then: Expr,
        if_start: Position,
        test: Expr,
        else_start: Position,
        orelse: Expr,
    ) -> Self {
        Self { then, if_start, test, else_start, orelse, comments: CommentSet::new() }
    }
}

impl_node!(ConditionalExpr, |self| Span::new(self.then.span().start, self.orelse.span().end));

impl fmt::Display for ConditionalExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Conditional") }
}

// ============================================================================
// Postfix expressions
// ============================================================================

/// An attribute access: `x.name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotExpr {
    /// The receiver
    pub x: Expr,
    /// Position of the `.`
    pub dot: Position,
    /// Start of the attribute name
    pub name_start: Position,
    /// The attribute name
    pub name: String,
    /// Attached comments
    pub comments: CommentSet,
}

impl DotExpr {
    /// Creates a new attribute access.
    #[must_use]
    pub const fn new(x: Expr, dot: Position, name_start: Position, name: String) -> Self {
        Self { x, dot, name_start, name, comments: CommentSet::new() }
    }
}

impl_node!(DotExpr, |self| Span::new(
    self.x.span().start,
    self.name_start.advance(self.name.len())
));

impl fmt::Display for DotExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Dot({})", self.name) }
}

/// A function call: `f(arg, name = value)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    /// The callee
    pub func: Expr,
    /// Position of the opening `(`
    pub lparen: Position,
    /// The arguments, in source order
    pub args: Vec<Expr>,
    /// Position of the closing `)`
    pub rparen: Position,
    /// Hint: keep the argument list on the opening line
    pub force_compact: bool,
    /// Hint: break after the opening parenthesis
    pub force_multi_line: bool,
    /// Attached comments
    pub comments: CommentSet,
}

impl CallExpr {
    /// Creates a new call, inferring the layout hints from the bracket and
    /// argument positions.
    #[must_use]
    pub fn new(func: Expr, lparen: Position, args: Vec<Expr>, rparen: Position) -> Self {
        let force_compact = force_compact(lparen, &args, rparen);
        let force_multi_line = force_multi_line(lparen, &args, rparen);
        Self {
            func,
            lparen,
            args,
            rparen,
            force_compact,
            force_multi_line,
            comments: CommentSet::new(),
        }
    }
}

impl_node!(CallExpr, |self| Span::new(self.func.span().start, self.rparen.advance(1)));

impl fmt::Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Call[{} args]", self.args.len())
    }
}

/// A subscript: `x[y]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexExpr {
    /// The receiver
    pub x: Expr,
    /// Position of the `[`
    pub lbrack: Position,
    /// The index expression
    pub y: Expr,
    /// Position of the `]`
    pub rbrack: Position,
    /// Attached comments
    pub comments: CommentSet,
}

impl IndexExpr {
    /// Creates a new subscript.
    #[must_use]
    pub const fn new(x: Expr, lbrack: Position, y: Expr, rbrack: Position) -> Self {
        Self { x, lbrack, y, rbrack, comments: CommentSet::new() }
    }
}

impl_node!(IndexExpr, |self| Span::new(self.x.span().start, self.rbrack.advance(1)));

impl fmt::Display for IndexExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Index") }
}

/// A two-part slice: `x[lo:hi]`, where either bound may be omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceExpr {
    /// The receiver
    pub x: Expr,
    /// Position of the `[`
    pub lbrack: Position,
    /// The lower bound, if present
    pub lo: Option<Expr>,
    /// Position of the `:`
    pub colon: Position,
    /// The upper bound, if present
    pub hi: Option<Expr>,
    /// Position of the `]`
    pub rbrack: Position,
    /// Attached comments
    pub comments: CommentSet,
}

impl SliceExpr {
    /// Creates a new slice.
    #[must_use]
    pub const fn new(
        x: Expr,
        lbrack: Position,
        lo: Option<Expr>,
        colon: Position,
        hi: Option<Expr>,
        rbrack: Position,
    ) -> Self {
        Self { x, lbrack, lo, colon, hi, rbrack, comments: CommentSet::new() }
    }
}

impl_node!(SliceExpr, |self| Span::new(self.x.span().start, self.rbrack.advance(1)));

impl fmt::Display for SliceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Slice") }
}

// ============================================================================
// Lambda
// ============================================================================

/// A lambda: `lambda params: body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaExpr {
    /// Start of the `lambda` keyword
    pub lambda: Position,
    /// The parameters (expressions, so defaulted parameters are `=` binaries)
    pub params: Vec<Expr>,
    /// Position of the `:`
    pub colon: Position,
    /// The body expression
    pub body: Expr,
    /// Attached comments
    pub comments: CommentSet,
}

impl LambdaExpr {
    /// Creates a new lambda.
    #[must_use]
    pub const fn new(lambda: Position, params: Vec<Expr>, colon: Position, body: Expr) -> Self {
        Self { lambda, params, colon, body, comments: CommentSet::new() }
    }
}

impl_node!(LambdaExpr, |self| Span::new(self.lambda, self.body.span().end));

impl fmt::Display for LambdaExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lambda[{} params]", self.params.len())
    }
}
