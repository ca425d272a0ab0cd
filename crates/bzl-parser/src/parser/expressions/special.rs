//! Postfix and special forms: calls, subscripts, slices, attribute access
//! and lambdas.

use bzl_ast::{
    ASTNode,
    BracketKind,
    CallExpr,
    DotExpr,
    Expr,
    IndexExpr,
    LambdaExpr,
    ListForExpr,
    SliceExpr,
};

use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parses a call's argument list, the callee already parsed and `(`
    /// current. A lone `expr for ...` argument becomes a bare-bracket
    /// comprehension.
    pub(crate) fn parse_call_expr(&mut self, func: Expr) -> ParseResult<Expr> {
        let lparen = self.advance()?;
        let pending = self.gather_element_comments(None)?;

        if self.check(TokenKind::RParen) {
            let rparen = self.advance()?;
            let mut call = CallExpr::new(func, lparen.start, Vec::new(), rparen.start);
            call.comments.before.extend(pending);
            return Ok(Expr::Call(Box::new(call)));
        }

        let mut first = self.parse_expression()?;
        first.comments_mut().before.extend(pending);
        let trailing = self.gather_element_comments(Some(&mut first))?;
        first.comments_mut().after.extend(trailing);

        if self.check(TokenKind::For) {
            let start = first.span().start;
            let (fors, ifs) = self.parse_comprehension_clauses()?;
            let rparen = self.expect(TokenKind::RParen)?;
            let comp = Expr::ListFor(Box::new(ListForExpr::new(
                BracketKind::Bare,
                start,
                first,
                fors,
                ifs,
                rparen.start,
            )));
            return Ok(Expr::Call(Box::new(CallExpr::new(
                func,
                lparen.start,
                vec![comp],
                rparen.start,
            ))));
        }

        // A trailing comma in an argument list is accepted, not recorded
        let (args, _comma) =
            self.finish_element_list(first, TokenKind::RParen, |p| p.parse_expression())?;
        let rparen = self.expect(TokenKind::RParen)?;

        Ok(Expr::Call(Box::new(CallExpr::new(func, lparen.start, args, rparen.start))))
    }

    /// Parses a subscript or two-part slice, the receiver already parsed and
    /// `[` current.
    pub(crate) fn parse_index_or_slice(&mut self, x: Expr) -> ParseResult<Expr> {
        let lbrack = self.advance()?;

        // `x[:hi]` and `x[:]`
        if self.check(TokenKind::Colon) {
            let colon = self.advance()?;
            let hi = self.parse_slice_bound()?;
            let rbrack = self.expect(TokenKind::RBracket)?;
            return Ok(Expr::Slice(Box::new(SliceExpr::new(
                x,
                lbrack.start,
                None,
                colon.start,
                hi,
                rbrack.start,
            ))));
        }

        let index = self.parse_expression()?;

        // `x[lo:hi]` and `x[lo:]`
        if self.check(TokenKind::Colon) {
            let colon = self.advance()?;
            let hi = self.parse_slice_bound()?;
            let rbrack = self.expect(TokenKind::RBracket)?;
            return Ok(Expr::Slice(Box::new(SliceExpr::new(
                x,
                lbrack.start,
                Some(index),
                colon.start,
                hi,
                rbrack.start,
            ))));
        }

        let rbrack = self.expect(TokenKind::RBracket)?;
        Ok(Expr::Index(Box::new(IndexExpr::new(x, lbrack.start, index, rbrack.start))))
    }

    fn parse_slice_bound(&mut self) -> ParseResult<Option<Expr>> {
        if self.check(TokenKind::RBracket) {
            return Ok(None);
        }
        Ok(Some(self.parse_expression()?))
    }

    /// Parses an attribute access, the receiver already parsed and `.`
    /// current.
    pub(crate) fn parse_dot_expr(&mut self, x: Expr) -> ParseResult<Expr> {
        let dot = self.advance()?;
        let name = self.expect(TokenKind::Ident)?;
        Ok(Expr::Dot(Box::new(DotExpr::new(x, dot.start, name.start, name.lexeme.to_string()))))
    }

    /// Parses a lambda: `lambda params: body`.
    pub(crate) fn parse_lambda_expr(&mut self) -> ParseResult<Expr> {
        let lambda = self.advance()?;
        let mut params = Vec::new();

        if !self.check(TokenKind::Colon) {
            loop {
                params.push(self.parse_expression()?);
                if !self.check(TokenKind::Comma) {
                    break;
                }
                self.skip()?;
            }
        }

        let colon = self.expect(TokenKind::Colon)?;
        let body = self.parse_expression()?;

        Ok(Expr::Lambda(Box::new(LambdaExpr::new(lambda.start, params, colon.start, body))))
    }
}
