//! Comprehension clause parsing
//!
//! This module handles the `for`/`if` clause sequence shared by all
//! comprehension forms:
//!
//! - List comprehensions: `[expr for x in iter if cond]`
//! - Generator form: `(expr for x in iter if cond)`
//! - Dict comprehensions: `{k: v for x in iter if cond}`
//! - Bare form inside a call: `f(expr for x in iter)`
//!
//! Iterables and filter conditions are parsed with the ternary-excluding
//! expression parser, since a ternary `if` head would swallow the filter
//! clauses.

use bzl_ast::{ASTNode, Expr, ForClause, IfClause};

use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parses the clause sequence of a comprehension: one or more `for`
    /// clauses followed by zero or more `if` clauses, leaving the closing
    /// bracket current. In-bracket comments between clauses attach to the
    /// surrounding clauses.
    pub(crate) fn parse_comprehension_clauses(
        &mut self,
    ) -> ParseResult<(Vec<ForClause>, Vec<IfClause>)> {
        let mut fors = vec![self.parse_for_clause()?];
        let mut ifs: Vec<IfClause> = Vec::new();

        loop {
            let prev: Option<&mut dyn ASTNode> = match ifs.last_mut() {
                Some(clause) => Some(clause),
                None => fors.last_mut().map(|clause| clause as &mut dyn ASTNode),
            };
            let pending = self.gather_element_comments(prev)?;

            if self.check(TokenKind::For) && ifs.is_empty() {
                let mut clause = self.parse_for_clause()?;
                clause.comments.before.extend(pending);
                fors.push(clause);
            } else if self.check(TokenKind::If) {
                let if_tok = self.advance()?;
                let cond = self.parse_clause_expr()?;
                let mut clause = IfClause::new(if_tok.start, cond);
                clause.comments.before.extend(pending);
                ifs.push(clause);
            } else {
                // Leftover comments stick to the last clause
                if let Some(clause) = ifs.last_mut() {
                    clause.comments.after.extend(pending);
                } else if let Some(clause) = fors.last_mut() {
                    clause.comments.after.extend(pending);
                }
                break;
            }
        }

        Ok((fors, ifs))
    }

    /// Parses one `for vars in iterable` clause.
    fn parse_for_clause(&mut self) -> ParseResult<ForClause> {
        let for_tok = self.expect(TokenKind::For)?;
        let mut vars = Vec::new();

        if self.check(TokenKind::LParen) {
            // `for (x, y) in ...` binds a variable list, not a tuple
            self.skip()?;
            loop {
                vars.push(self.parse_for_var()?);
                if !self.check(TokenKind::Comma) {
                    break;
                }
                self.skip()?;
                if self.check(TokenKind::RParen) {
                    break; // trailing comma
                }
            }
            let _ = self.expect(TokenKind::RParen)?;
        } else {
            loop {
                vars.push(self.parse_for_var()?);
                if !self.check(TokenKind::Comma) {
                    break;
                }
                self.skip()?;
            }
        }

        let in_tok = self.expect(TokenKind::In)?;
        let x = self.parse_clause_expr()?;

        Ok(ForClause::new(for_tok.start, vars, in_tok.start, x))
    }

    /// A single loop variable: parsed one step above `in`'s binding power so
    /// the clause's own `in` is left in place while postfix and arithmetic
    /// operators still bind.
    fn parse_for_var(&mut self) -> ParseResult<Expr> { self.parse_expr_bp(13, false) }
}
