//! Tree traversal.
//!
//! A pre-order walk over every node that carries a span and a comment set,
//! including comprehension clauses, visited in source order. The callback
//! receives each node through the narrow [`ASTNode`] interface, which is
//! enough for the consumers that exist: position audits, comment collection,
//! statistics.

use crate::nodes::{ASTNode, Expr, File};

/// Walks `expr` and all of its descendants in source order, parent first.
pub fn walk<F>(expr: &Expr, f: &mut F)
where
    F: FnMut(&dyn ASTNode),
{
    match expr {
        Expr::Literal(e) => f(e.as_ref()),
        Expr::String(e) => f(e.as_ref()),
        Expr::Python(e) => f(e.as_ref()),
        Expr::CommentBlock(e) => f(e.as_ref()),
        Expr::Unary(e) => {
            f(e.as_ref());
            walk(&e.x, f);
        }
        Expr::Binary(e) => {
            f(e.as_ref());
            walk(&e.x, f);
            walk(&e.y, f);
        }
        Expr::Conditional(e) => {
            f(e.as_ref());
            walk(&e.then, f);
            walk(&e.test, f);
            walk(&e.orelse, f);
        }
        Expr::Dot(e) => {
            f(e.as_ref());
            walk(&e.x, f);
        }
        Expr::Call(e) => {
            f(e.as_ref());
            walk(&e.func, f);
            for arg in &e.args {
                walk(arg, f);
            }
        }
        Expr::Index(e) => {
            f(e.as_ref());
            walk(&e.x, f);
            walk(&e.y, f);
        }
        Expr::Slice(e) => {
            f(e.as_ref());
            walk(&e.x, f);
            if let Some(lo) = &e.lo {
                walk(lo, f);
            }
            if let Some(hi) = &e.hi {
                walk(hi, f);
            }
        }
        Expr::Lambda(e) => {
            f(e.as_ref());
            for param in &e.params {
                walk(param, f);
            }
            walk(&e.body, f);
        }
        Expr::List(e) => {
            f(e.as_ref());
            for elem in &e.elems {
                walk(elem, f);
            }
        }
        Expr::Tuple(e) => {
            f(e.as_ref());
            for elem in &e.elems {
                walk(elem, f);
            }
        }
        Expr::Paren(e) => {
            f(e.as_ref());
            walk(&e.x, f);
        }
        Expr::Dict(e) => {
            f(e.as_ref());
            for entry in &e.entries {
                walk(entry, f);
            }
        }
        Expr::KeyValue(e) => {
            f(e.as_ref());
            walk(&e.key, f);
            walk(&e.value, f);
        }
        Expr::ListFor(e) => {
            f(e.as_ref());
            walk(&e.x, f);
            for clause in &e.fors {
                f(clause);
                for var in &clause.vars {
                    walk(var, f);
                }
                walk(&clause.x, f);
            }
            for clause in &e.ifs {
                f(clause);
                walk(&clause.cond, f);
            }
        }
    }
}

/// Walks every statement of `file` in order.
pub fn walk_file<F>(file: &File, f: &mut F)
where
    F: FnMut(&dyn ASTNode),
{
    for stmt in &file.stmts {
        walk(stmt, f);
    }
}
