//! Parser module for BUILD files.
//!
//! The parser is a hand-written recursive-descent driver for statements
//! combined with a Pratt expression core that reproduces the BUILD grammar's
//! precedence table exactly. It consumes tokens from the [`Lexer`] one at a
//! time and builds owned tree nodes as reductions complete, attaching
//! comments and layout hints along the way.
//!
//! A parse is a pure, single-threaded function: no shared state, no
//! suspension, one error maximum. The only near-global is the comment
//! attacher's "most recent statement" slot, which lives on the stack of
//! [`Parser::parse_file`].

mod expressions;
mod module;

use bzl_ast::Expr;

use crate::diagnostics::{ParseError, ParseResult};
use crate::lexer::{Lexer, Token, TokenKind};

/// The parser: a lexer plus one token of lookahead.
#[derive(Debug)]
pub struct Parser<'src> {
    /// Token source
    lexer: Lexer<'src>,
    /// Current token
    current: Token<'src>,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source`, priming the first token.
    ///
    /// ## Errors
    ///
    /// Returns a lexical error if the source does not start with a valid
    /// token.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Advances to the next token and returns the one that was current.
    pub(crate) fn advance(&mut self) -> ParseResult<Token<'src>> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token without keeping it.
    pub(crate) fn skip(&mut self) -> ParseResult<()> {
        let _ = self.advance()?;
        Ok(())
    }

    /// Checks whether the current token is of the given kind.
    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool { self.current.kind == kind }

    /// Consumes the current token if it matches, errors otherwise.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token<'src>> {
        if self.check(kind) { self.advance() } else { Err(self.unexpected()) }
    }

    /// The syntax error for the current token.
    pub(crate) fn unexpected(&self) -> ParseError {
        if self.current.kind == TokenKind::Eof {
            ParseError::UnexpectedEof { pos: self.current.start }
        } else {
            ParseError::unexpected_token(
                self.current.kind,
                self.current.lexeme.to_string(),
                self.current.start,
            )
        }
    }

    /// Parses one expression and requires the input to end after it
    /// (trailing newlines permitted).
    ///
    /// ## Errors
    ///
    /// Returns the first lexical or syntax error.
    pub fn parse_standalone_expression(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;
        while self.check(TokenKind::Newline) {
            self.skip()?;
        }
        if !self.check(TokenKind::Eof) {
            return Err(self.unexpected());
        }
        Ok(expr)
    }
}
