//! Literal parsing: identifiers, numbers and strings.
//!
//! Identifiers and numbers share one token kind and one node type; the tree
//! keeps their raw text untouched. Juxtaposed string literals concatenate
//! here, folding left into `+` chains, so a string sequence is never a valid
//! continuation of any other expression.

use bzl_ast::{ASTNode, BinaryExpr, Expr, LiteralExpr, StringExpr};

use crate::diagnostics::ParseResult;
use crate::lexer::{StringValue, TokenKind};
use crate::parser::Parser;

impl Parser<'_> {
    /// Parses an identifier or numeric literal.
    pub(crate) fn parse_literal(&mut self) -> ParseResult<Expr> {
        let tok = self.advance()?;
        Ok(Expr::Literal(Box::new(LiteralExpr::new(tok.start, tok.lexeme.to_string()))))
    }

    /// Parses a string literal, folding any juxtaposed strings that follow
    /// into a left-leaning chain of `+` nodes. The synthesized operator sits
    /// at the left operand's end position.
    pub(crate) fn parse_string_expr(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_one_string()?;

        while self.check(TokenKind::String) {
            let op_start = expr.span().end;
            let rhs = self.parse_one_string()?;
            expr = Expr::Binary(Box::new(BinaryExpr::new(expr, op_start, "+", rhs)));
        }

        Ok(expr)
    }

    fn parse_one_string(&mut self) -> ParseResult<Expr> {
        let tok = self.advance()?;
        // The lexer decodes every string token it emits
        let StringValue { value, triple } = tok.string.unwrap_or_default();
        Ok(Expr::String(Box::new(StringExpr::new(
            tok.start,
            value,
            triple,
            tok.lexeme.to_string(),
            tok.end,
        ))))
    }
}
