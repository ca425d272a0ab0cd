//! # bzl-ast
//!
//! The syntax tree for Bazel BUILD files.
//!
//! BUILD files are a restricted Python dialect; the tree here represents them
//! losslessly: every node carries absolute source positions and a
//! [`CommentSet`], and container nodes carry the layout hints
//! ([`hints::force_compact`] / [`hints::force_multi_line`]) a formatter needs
//! to reproduce the author's intent after edits.
//!
//! The node variants form a closed set ([`Expr`]); the only capability shared
//! across variants is "return my span" and "return my comment set", captured
//! by the narrow [`ASTNode`] trait. Nodes exclusively own their children:
//! there are no parent pointers and no sharing, so a tree can be traversed
//! and dropped without coordination.
//!
//! Nodes are created by the parser, mutated only during parsing (to attach
//! comments), and are read-only from then on.

pub mod comments;
pub mod hints;
pub mod nodes;
pub mod walk;

pub use comments::{Comment, CommentSet};
pub use nodes::{
    ASTNode,
    BinaryExpr,
    BracketKind,
    CallExpr,
    CommentBlock,
    ConditionalExpr,
    DictExpr,
    DotExpr,
    Expr,
    File,
    ForClause,
    IfClause,
    IndexExpr,
    KeyValueExpr,
    LambdaExpr,
    ListExpr,
    ListForExpr,
    LiteralExpr,
    ParenExpr,
    PythonBlock,
    SliceExpr,
    StringExpr,
    TupleExpr,
    UnaryExpr,
};
pub use walk::{walk, walk_file};
