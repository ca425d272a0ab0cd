//! File-level parsing: the statement loop and the comment attacher.
//!
//! Statements are separated by newlines (trailing semicolons are accepted and
//! discarded). The comment attacher runs inline in the statement loop and
//! keeps a single piece of state, the most recent statement-producing node:
//!
//! - a blank line resets it, severing comment flow across paragraph breaks;
//! - a full-line comment lands in its `after` set, synthesizing a
//!   free-standing comment block when nothing is open;
//! - a new statement adopts the comments that ended up immediately before it
//!   as its `before` set.
//!
//! Attachment is total: every comment token ends up in exactly one node's
//! comment set, in the worst case a comment block at file scope.

use std::path::PathBuf;

use bzl_ast::{ASTNode, Comment, CommentBlock, Expr, File, PythonBlock};

use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parses a whole BUILD file.
    ///
    /// ## Errors
    ///
    /// Returns the first lexical or syntax error; the partial tree is
    /// discarded.
    pub fn parse_file(mut self, path: Option<PathBuf>) -> ParseResult<File> {
        let mut stmts: Vec<Expr> = Vec::new();
        // The most recent statement-producing node, as an index into `stmts`
        let mut last_rule: Option<usize> = None;

        loop {
            match self.current.kind {
                TokenKind::Eof => break,

                // A newline in statement position is a blank line
                TokenKind::Newline => {
                    self.skip()?;
                    last_rule = None;
                }

                TokenKind::Comment => {
                    let tok = self.advance()?;
                    let comment = Comment::new(tok.start, tok.lexeme.to_string());
                    let idx = match last_rule {
                        Some(idx) => idx,
                        None => {
                            stmts.push(Expr::CommentBlock(Box::new(CommentBlock::new(tok.start))));
                            stmts.len() - 1
                        }
                    };
                    last_rule = Some(idx);
                    stmts[idx].comments_mut().after.push(comment);
                    // The newline ending the comment's own line is not blank
                    if self.check(TokenKind::Newline) {
                        self.skip()?;
                    }
                }

                _ => {
                    let mut stmt = self.parse_statement()?;

                    // Optional semicolons are accepted, not preserved
                    let mut semi = false;
                    while self.check(TokenKind::Semicolon) {
                        self.skip()?;
                        semi = true;
                    }

                    // Same-line trailing comments
                    while self.check(TokenKind::Comment) && self.current.suffix {
                        let tok = self.advance()?;
                        stmt.comments_mut()
                            .suffix
                            .push(Comment::new(tok.start, tok.lexeme.to_string()));
                    }

                    match self.current.kind {
                        TokenKind::Newline => {
                            self.skip()?;
                        }
                        TokenKind::Eof => {}
                        // After a semicolon the next statement may share the line
                        _ if semi => {}
                        _ => return Err(self.unexpected()),
                    }

                    // Comments that ended up immediately before this
                    // statement belong to it as `before` comments.
                    if let Some(idx) = last_rule {
                        if matches!(stmts[idx], Expr::CommentBlock(_)) {
                            // The comment block was really a prelude
                            let mut block = stmts.remove(idx);
                            let after = std::mem::take(&mut block.comments_mut().after);
                            stmt.comments_mut().before.extend(after);
                        } else {
                            let after = std::mem::take(&mut stmts[idx].comments_mut().after);
                            stmt.comments_mut().before.extend(after);
                        }
                    }

                    stmts.push(stmt);
                    last_rule = Some(stmts.len() - 1);
                }
            }
        }

        Ok(File::new(path, stmts))
    }

    /// A statement is an expression or an uninterpreted Python block.
    fn parse_statement(&mut self) -> ParseResult<Expr> {
        if self.check(TokenKind::Python) {
            let tok = self.advance()?;
            return Ok(Expr::Python(Box::new(PythonBlock::new(
                tok.start,
                tok.end,
                tok.lexeme.to_string(),
            ))));
        }

        self.parse_expression()
    }
}
