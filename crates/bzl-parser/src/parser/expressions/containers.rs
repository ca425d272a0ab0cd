//! Container expression parsing (lists, tuples, parenthesized expressions,
//! dicts) and in-bracket comment placement.
//!
//! Newlines are invisible inside brackets, but comments are not: a full-line
//! comment between elements becomes a `before` comment of the next element, a
//! same-line comment trails the previous element as a `suffix`, and comments
//! left hanging before the closing bracket go to the last element's `after`
//! (or onto the container itself when it is empty). This is what makes
//! comment attachment total over arbitrary input.

use bzl_ast::{
    ASTNode,
    BracketKind,
    Comment,
    DictExpr,
    Expr,
    KeyValueExpr,
    ListExpr,
    ListForExpr,
    ParenExpr,
    TupleExpr,
};
use bzl_source::Position;

use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Collects consecutive comment tokens inside a bracketed construct.
    ///
    /// Suffix comments attach to `prev` directly when one is given; full-line
    /// comments are returned for the caller to place on the next element.
    pub(crate) fn gather_element_comments(
        &mut self,
        mut prev: Option<&mut dyn ASTNode>,
    ) -> ParseResult<Vec<Comment>> {
        let mut pending = Vec::new();

        while self.check(TokenKind::Comment) {
            let suffix = self.current.suffix;
            let tok = self.advance()?;
            let comment = Comment::new(tok.start, tok.lexeme.to_string());

            match prev.as_deref_mut() {
                Some(prev) if suffix => prev.comments_mut().suffix.push(comment),
                _ => pending.push(comment),
            }
        }

        Ok(pending)
    }

    /// Parses the remainder of a comma-separated element list after its
    /// first element, up to (not including) `close`. Returns the elements
    /// and the trailing-comma position ([`Position::NONE`] if absent).
    pub(crate) fn finish_element_list<P>(
        &mut self,
        first: Expr,
        close: TokenKind,
        mut parse_elem: P,
    ) -> ParseResult<(Vec<Expr>, Position)>
    where
        P: FnMut(&mut Self) -> ParseResult<Expr>,
    {
        let mut elems = vec![first];
        let mut comma = Position::NONE;

        loop {
            // Comments between the element and its comma stay with it
            let mut pending =
                self.gather_element_comments(elems.last_mut().map(|e| e as &mut dyn ASTNode))?;

            if !self.check(TokenKind::Comma) {
                if let Some(last) = elems.last_mut() {
                    last.comments_mut().after.append(&mut pending);
                }
                break;
            }
            let comma_tok = self.advance()?;

            // A same-line comment after the comma still trails the previous
            // element; full-line comments lead the next one.
            pending
                .extend(self.gather_element_comments(
                    elems.last_mut().map(|e| e as &mut dyn ASTNode),
                )?);

            if self.check(close) {
                comma = comma_tok.start; // trailing comma
                if let Some(last) = elems.last_mut() {
                    last.comments_mut().after.append(&mut pending);
                }
                break;
            }

            let mut elem = parse_elem(self)?;
            elem.comments_mut().before.extend(pending);
            elems.push(elem);
        }

        Ok((elems, comma))
    }

    /// Parses a list literal or list comprehension, `[` being current.
    pub(crate) fn parse_list_expr(&mut self) -> ParseResult<Expr> {
        let lbrack = self.advance()?;
        let pending = self.gather_element_comments(None)?;

        if self.check(TokenKind::RBracket) {
            let rbrack = self.advance()?;
            let mut list = ListExpr::new(lbrack.start, Vec::new(), Position::NONE, rbrack.start);
            list.comments.before.extend(pending);
            return Ok(Expr::List(Box::new(list)));
        }

        let mut first = self.parse_expression()?;
        first.comments_mut().before.extend(pending);
        let trailing = self.gather_element_comments(Some(&mut first))?;
        first.comments_mut().after.extend(trailing);

        if self.check(TokenKind::For) {
            let (fors, ifs) = self.parse_comprehension_clauses()?;
            let rbrack = self.expect(TokenKind::RBracket)?;
            return Ok(Expr::ListFor(Box::new(ListForExpr::new(
                BracketKind::Square,
                lbrack.start,
                first,
                fors,
                ifs,
                rbrack.start,
            ))));
        }

        let (elems, comma) =
            self.finish_element_list(first, TokenKind::RBracket, |p| p.parse_expression())?;
        let rbrack = self.expect(TokenKind::RBracket)?;

        Ok(Expr::List(Box::new(ListExpr::new(lbrack.start, elems, comma, rbrack.start))))
    }

    /// Parses `(...)`: an empty tuple, a generator-form comprehension, a
    /// tuple, or a parenthesized expression. The trailing comma is the sole
    /// tuple/paren disambiguator for the one-element case.
    pub(crate) fn parse_paren_or_tuple(&mut self) -> ParseResult<Expr> {
        let lparen = self.advance()?;
        let pending = self.gather_element_comments(None)?;

        if self.check(TokenKind::RParen) {
            let rparen = self.advance()?;
            let mut tuple = TupleExpr::new(lparen.start, Vec::new(), Position::NONE, rparen.start);
            tuple.comments.before.extend(pending);
            return Ok(Expr::Tuple(Box::new(tuple)));
        }

        let mut first = self.parse_expression()?;
        first.comments_mut().before.extend(pending);
        let trailing = self.gather_element_comments(Some(&mut first))?;
        first.comments_mut().after.extend(trailing);

        if self.check(TokenKind::For) {
            let (fors, ifs) = self.parse_comprehension_clauses()?;
            let rparen = self.expect(TokenKind::RParen)?;
            return Ok(Expr::ListFor(Box::new(ListForExpr::new(
                BracketKind::Round,
                lparen.start,
                first,
                fors,
                ifs,
                rparen.start,
            ))));
        }

        if self.check(TokenKind::Comma) {
            let (elems, comma) =
                self.finish_element_list(first, TokenKind::RParen, |p| p.parse_expression())?;
            let rparen = self.expect(TokenKind::RParen)?;
            return Ok(Expr::Tuple(Box::new(TupleExpr::new(
                lparen.start,
                elems,
                comma,
                rparen.start,
            ))));
        }

        let rparen = self.expect(TokenKind::RParen)?;
        Ok(Expr::Paren(Box::new(ParenExpr::new(lparen.start, first, rparen.start))))
    }

    /// Parses a dict literal or dict comprehension, `{` being current.
    pub(crate) fn parse_dict_expr(&mut self) -> ParseResult<Expr> {
        let lbrace = self.advance()?;
        let pending = self.gather_element_comments(None)?;

        if self.check(TokenKind::RBrace) {
            let rbrace = self.advance()?;
            let mut dict = DictExpr::new(lbrace.start, Vec::new(), Position::NONE, rbrace.start);
            dict.comments.before.extend(pending);
            return Ok(Expr::Dict(Box::new(dict)));
        }

        let mut first = self.parse_dict_entry()?;
        first.comments_mut().before.extend(pending);
        let trailing = self.gather_element_comments(Some(&mut first))?;
        first.comments_mut().after.extend(trailing);

        // `{k: v for ...}` — the produced expression is the key/value pair
        if self.check(TokenKind::For) {
            let (fors, ifs) = self.parse_comprehension_clauses()?;
            let rbrace = self.expect(TokenKind::RBrace)?;
            return Ok(Expr::ListFor(Box::new(ListForExpr::new(
                BracketKind::Brace,
                lbrace.start,
                first,
                fors,
                ifs,
                rbrace.start,
            ))));
        }

        let (entries, comma) =
            self.finish_element_list(first, TokenKind::RBrace, |p| p.parse_dict_entry())?;
        let rbrace = self.expect(TokenKind::RBrace)?;

        Ok(Expr::Dict(Box::new(DictExpr::new(lbrace.start, entries, comma, rbrace.start))))
    }

    /// Parses one `key: value` dictionary entry.
    fn parse_dict_entry(&mut self) -> ParseResult<Expr> {
        let key = self.parse_expression()?;
        let colon = self.expect(TokenKind::Colon)?;
        let value = self.parse_expression()?;
        Ok(Expr::KeyValue(Box::new(KeyValueExpr::new(key, colon.start, value))))
    }
}
