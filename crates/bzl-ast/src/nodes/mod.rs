//! AST node type definitions
//!
//! This module provides the node types organized in a flat structure: core
//! expressions, container literals, comprehensions and the file-level nodes.

/// Implements [`ASTNode`] for a node struct with a `comments` field, given an
/// expression for its span.
macro_rules! impl_node {
    ($ty:ty, |$self_:ident| $span:expr) => {
        impl crate::nodes::ASTNode for $ty {
            fn span(&$self_) -> bzl_source::Span { $span }

            fn comments(&self) -> &crate::comments::CommentSet { &self.comments }

            fn comments_mut(&mut self) -> &mut crate::comments::CommentSet { &mut self.comments }
        }
    };
}

pub(crate) use impl_node;

mod collections;
mod comprehensions;
mod expressions;
mod module;

use std::fmt;

use bzl_source::Span;
pub use collections::*;
pub use comprehensions::*;
pub use expressions::*;
pub use module::*;

use crate::comments::CommentSet;

/// The narrow interface shared by every node variant.
///
/// The variants are a closed set; the only capability needed across all of
/// them is reporting their source extent and exposing their comment set, so
/// this trait is deliberately minimal.
pub trait ASTNode {
    /// The source extent of this node (start inclusive, end exclusive).
    fn span(&self) -> Span;

    /// The comments attached to this node.
    fn comments(&self) -> &CommentSet;

    /// Mutable access to the attached comments.
    ///
    /// Only the parser's comment attacher uses this; after a parse returns,
    /// the tree is read-only.
    fn comments_mut(&mut self) -> &mut CommentSet;
}

/// An expression or statement node.
///
/// BUILD files blur the line between the two: a top-level statement is simply
/// an expression (assignments included, since `=` and `+=` are expression
/// operators here), an uninterpreted Python block, or a block of comments
/// that belongs to no other node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Identifier or numeric literal (e.g. `glob`, `42`)
    Literal(Box<LiteralExpr>),
    /// String literal (e.g. `"//visibility:public"`)
    String(Box<StringExpr>),
    /// Unary operation (e.g. `-x`, `not x`, `*args`)
    Unary(Box<UnaryExpr>),
    /// Binary operation, assignments included (e.g. `a + b`, `srcs = [...]`)
    Binary(Box<BinaryExpr>),
    /// Ternary conditional (e.g. `a if cond else b`)
    Conditional(Box<ConditionalExpr>),
    /// Attribute access (e.g. `ctx.attr`)
    Dot(Box<DotExpr>),
    /// Function call (e.g. `cc_library(name = "x")`)
    Call(Box<CallExpr>),
    /// Subscript (e.g. `deps[0]`)
    Index(Box<IndexExpr>),
    /// Two-part slice (e.g. `srcs[1:3]`)
    Slice(Box<SliceExpr>),
    /// Lambda (e.g. `lambda x: x`)
    Lambda(Box<LambdaExpr>),
    /// List literal (e.g. `[1, 2, 3]`)
    List(Box<ListExpr>),
    /// Tuple literal (e.g. `(1, 2)`, `(1,)`)
    Tuple(Box<TupleExpr>),
    /// Parenthesized expression (e.g. `(x)`; distinct from a one-element tuple)
    Paren(Box<ParenExpr>),
    /// Dictionary literal (e.g. `{"k": "v"}`)
    Dict(Box<DictExpr>),
    /// A `key: value` pair inside a dictionary or dict comprehension
    KeyValue(Box<KeyValueExpr>),
    /// Comprehension over any bracket kind (e.g. `[x for x in xs]`)
    ListFor(Box<ListForExpr>),
    /// Uninterpreted top-level Python block, kept verbatim
    Python(Box<PythonBlock>),
    /// Pseudo-node holding comments not attached to any real node
    CommentBlock(Box<CommentBlock>),
}

macro_rules! each_variant {
    ($self:ident, $e:ident => $body:expr) => {
        match $self {
            Self::Literal($e) => $body,
            Self::String($e) => $body,
            Self::Unary($e) => $body,
            Self::Binary($e) => $body,
            Self::Conditional($e) => $body,
            Self::Dot($e) => $body,
            Self::Call($e) => $body,
            Self::Index($e) => $body,
            Self::Slice($e) => $body,
            Self::Lambda($e) => $body,
            Self::List($e) => $body,
            Self::Tuple($e) => $body,
            Self::Paren($e) => $body,
            Self::Dict($e) => $body,
            Self::KeyValue($e) => $body,
            Self::ListFor($e) => $body,
            Self::Python($e) => $body,
            Self::CommentBlock($e) => $body,
        }
    };
}

impl ASTNode for Expr {
    fn span(&self) -> Span { each_variant!(self, e => e.span()) }

    fn comments(&self) -> &CommentSet { each_variant!(self, e => e.comments()) }

    fn comments_mut(&mut self) -> &mut CommentSet { each_variant!(self, e => e.comments_mut()) }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each_variant!(self, e => write!(f, "{e}"))
    }
}
