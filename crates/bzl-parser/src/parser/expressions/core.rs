//! Core expression parsing logic using Pratt parsing
//!
//! This module contains the main binding-power loop and the prefix dispatch.
//! Comprehension clauses use a ternary-excluding variant of the same loop:
//! inside `[x for y in z if c]` the `if` opens a filter clause, so it must
//! never be consumed as a ternary head there.

use bzl_ast::Expr;

use super::operators::infix_binding_power;
use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parses an expression.
    ///
    /// This is the main entry point for expression parsing; it runs the
    /// Pratt loop with minimum binding power 0, allowing every operator.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::ParseError`] on the first unexpected token.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> { self.parse_expr_bp(0, true) }

    /// Parses an expression for a comprehension clause (iterable or filter
    /// condition), where ternary `if` is excluded.
    pub(crate) fn parse_clause_expr(&mut self) -> ParseResult<Expr> { self.parse_expr_bp(0, false) }

    /// The Pratt loop: parse a prefix expression, then fold infix and
    /// postfix operators while their binding power reaches `min_bp`.
    pub(crate) fn parse_expr_bp(&mut self, min_bp: u8, allow_ternary: bool) -> ParseResult<Expr> {
        let mut lhs = self.parse_prefix_expr(allow_ternary)?;

        loop {
            let op = self.current.kind;

            // In clause context `if` starts a filter, never a ternary
            if !allow_ternary && op == TokenKind::If {
                break;
            }

            let Some((left_bp, right_bp)) = infix_binding_power(op) else {
                break;
            };

            if left_bp < min_bp {
                break;
            }

            lhs = match op {
                // Postfix: function call
                TokenKind::LParen => self.parse_call_expr(lhs)?,
                // Postfix: subscript or slice
                TokenKind::LBracket => self.parse_index_or_slice(lhs)?,
                // Postfix: attribute access
                TokenKind::Dot => self.parse_dot_expr(lhs)?,
                // Ternary: then if test else orelse
                TokenKind::If => self.parse_conditional_expr(lhs, right_bp)?,
                // Binary operators, `not in` and `is not` included
                _ => self.parse_binary_expr(lhs, right_bp, allow_ternary)?,
            };
        }

        Ok(lhs)
    }

    /// Parses a prefix expression: literals, strings, unary operators and
    /// the bracketed forms.
    pub(crate) fn parse_prefix_expr(&mut self, allow_ternary: bool) -> ParseResult<Expr> {
        match self.current.kind {
            TokenKind::Ident => self.parse_literal(),
            TokenKind::String => self.parse_string_expr(),
            TokenKind::Minus | TokenKind::Star | TokenKind::Not => {
                self.parse_unary_expr(allow_ternary)
            }
            TokenKind::LParen => self.parse_paren_or_tuple(),
            TokenKind::LBracket => self.parse_list_expr(),
            TokenKind::LBrace => self.parse_dict_expr(),
            TokenKind::Lambda => self.parse_lambda_expr(),
            _ => Err(self.unexpected()),
        }
    }
}
