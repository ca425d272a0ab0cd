//! # Lexer module for BUILD files.
//!
//! This module converts source text into the token stream the parser
//! consumes. Token recognition is done by `logos`; a hand-written driver
//! around it supplies the context-sensitive parts:
//!
//! - Absolute positions (line, column, byte offset) for every token, via a
//!   precomputed line-start table
//! - Implicit line continuation: newlines inside `()`, `[]` and `{}` are
//!   suppressed, so only statement-separating newlines reach the parser
//! - Comment classification: each `#` comment is tagged with whether code
//!   precedes it on its line (a *suffix* comment) or not (a full-line one)
//! - Python-block capture: a top-level line starting with a Python statement
//!   keyword swallows its whole indented block into one verbatim token
//! - Eager string validation, so a bad escape is a lexical error at the
//!   string's position

mod strings;
mod token;

use bzl_source::Source;
use logos::{Lexer as LogosLexer, Logos};
pub use token::{StringValue, Token, TokenKind};

use self::strings::{UnquoteError, unquote};
use crate::diagnostics::LexError;

/// Python statement keywords that open an uninterpreted block when they start
/// a top-level line.
const PYTHON_KEYWORDS: &[&str] = &[
    "assert", "break", "continue", "def", "del", "elif", "else", "except", "finally", "for",
    "from", "global", "if", "import", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Keywords that continue an open Python block when they appear unindented.
const PYTHON_CONTINUATIONS: &[&str] = &["elif", "else", "except", "finally"];

/// Byte offset just past the line containing `offset` (exclusive of the
/// newline).
fn line_end(source: &str, offset: usize) -> usize {
    source[offset..].find('\n').map_or(source.len(), |i| offset + i)
}

fn is_python_keyword(word: &str) -> bool { PYTHON_KEYWORDS.contains(&word) }

fn continues_python_block(line: &str) -> bool {
    PYTHON_CONTINUATIONS
        .iter()
        .any(|kw| line.strip_prefix(kw).is_some_and(|rest| !rest.starts_with(is_ident_char)))
}

fn is_ident_char(c: char) -> bool { c.is_ascii_alphanumeric() || c == '_' }

/// The lexer: a logos recognizer plus the line/bracket state that BUILD
/// syntax needs.
#[derive(Debug)]
pub struct Lexer<'src> {
    /// The inner logos lexer
    inner: LogosLexer<'src, TokenKind>,
    /// Source code
    source: &'src str,
    /// Line-start table for position lookup
    lines: Source<'src>,
    /// Bracket nesting depth; newlines are suppressed when positive
    depth: usize,
    /// Whether a token has been produced on the current line
    line_has_token: bool,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
            lines: Source::new(source),
            depth: 0,
            line_has_token: false,
        }
    }

    /// Builds a token for the current logos match.
    fn token(&self, kind: TokenKind, span: std::ops::Range<usize>) -> Token<'src> {
        Token::new(
            kind,
            &self.source[span.clone()],
            self.lines.position_from_offset(span.start),
            self.lines.position_from_offset(span.end),
        )
    }

    /// Produces the next token.
    ///
    /// At end of input this returns an `Eof` token, repeatedly if called
    /// again.
    ///
    /// ## Errors
    ///
    /// Returns the first lexical error: an unterminated string, a bad escape,
    /// or a character no token can start with.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        loop {
            let Some(result) = self.inner.next() else {
                let pos = self.lines.position_from_offset(self.source.len());
                return Ok(Token::new(TokenKind::Eof, "", pos, pos));
            };

            let span = self.inner.span();
            let Ok(kind) = result else {
                let pos = self.lines.position_from_offset(span.start);
                let character = self.source[span.start..].chars().next().unwrap_or('\0');
                return Err(if character == '"' || character == '\'' {
                    LexError::UnterminatedString { pos }
                } else {
                    LexError::InvalidCharacter { character, pos }
                });
            };

            match kind {
                TokenKind::Newline => {
                    let token = self.token(kind, span);
                    self.line_has_token = false;
                    // Inside brackets a newline is not a statement separator
                    if self.depth > 0 {
                        continue;
                    }
                    return Ok(token);
                }
                TokenKind::Comment => {
                    let mut token = self.token(kind, span);
                    token.suffix = self.line_has_token;
                    return Ok(token);
                }
                _ => {}
            }

            let lexeme = &self.source[span.clone()];

            // A Python statement keyword opening a top-level line swallows
            // the whole block verbatim.
            if self.depth == 0 && !self.line_has_token && is_python_keyword(lexeme) {
                return Ok(self.python_block(span.start, span.end));
            }

            match kind {
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => self.depth += 1,
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    self.depth = self.depth.saturating_sub(1);
                }
                _ => {}
            }

            self.line_has_token = true;

            if kind == TokenKind::String {
                let decoded = unquote(lexeme).map_err(|err| {
                    let pos = self.lines.position_from_offset(span.start);
                    match err {
                        UnquoteError::InvalidEscape(escape) => LexError::InvalidEscape { escape, pos },
                        UnquoteError::TruncatedEscape => LexError::UnterminatedString { pos },
                    }
                })?;
                let mut token = self.token(kind, span);
                token.string = Some(decoded);
                return Ok(token);
            }

            return Ok(self.token(kind, span));
        }
    }

    /// Captures a Python block starting at the keyword at `start`.
    ///
    /// The block is the keyword line plus every following line that is blank,
    /// indented, or begins with a continuation keyword (`else`, `elif`,
    /// `except`, `finally`). Trailing blank lines stay outside the block so
    /// the comment attacher still sees them as blank-line barriers.
    fn python_block(&mut self, start: usize, keyword_end: usize) -> Token<'src> {
        let src = self.source;
        let mut scan_end = line_end(src, start);
        let mut block_end = scan_end;

        while scan_end < src.len() {
            let next_start = scan_end + 1; // past the newline
            if next_start >= src.len() {
                break;
            }

            let next_end = line_end(src, next_start);
            let line = &src[next_start..next_end];
            let trimmed = line.trim_start_matches([' ', '\t']);

            if trimmed.is_empty() {
                // Blank line: scan past it, but only keep it if more of the
                // block follows
                scan_end = next_end;
                continue;
            }

            if line.starts_with([' ', '\t']) || continues_python_block(line) {
                scan_end = next_end;
                block_end = next_end;
                continue;
            }

            break;
        }

        // Move logos past the block so lexing resumes at its final newline
        self.inner.bump(block_end - keyword_end);
        self.line_has_token = true;

        Token::new(
            TokenKind::Python,
            &src[start..block_end],
            self.lines.position_from_offset(start),
            self.lines.position_from_offset(block_end),
        )
    }
}
