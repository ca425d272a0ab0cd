//! Error types for the BUILD file parser.
//!
//! Two error kinds exist: lexical errors (bad string, bad escape, stray
//! character), surfaced unchanged from the token source, and syntax errors
//! (an unexpected token at a position). The parser reports whichever comes
//! first and aborts; the tree built up to that point is discarded.

use bzl_source::Position;
use thiserror::Error;

use crate::lexer::TokenKind;

/// An error found while tokenizing source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string literal without a closing quote (triple quotes included)
    #[error("{pos}: unterminated string literal")]
    UnterminatedString {
        /// Where the string starts
        pos: Position,
    },
    /// An escape sequence the string decoder does not recognize
    #[error("{pos}: invalid escape sequence '\\{escape}'")]
    InvalidEscape {
        /// The character following the backslash
        escape: char,
        /// Where the string starts
        pos: Position,
    },
    /// A character no token can start with
    #[error("{pos}: unexpected input character {character:?}")]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Where it occurs
        pos: Position,
    },
}

impl LexError {
    /// The position the error points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnterminatedString { pos }
            | Self::InvalidEscape { pos, .. }
            | Self::InvalidCharacter { pos, .. } => *pos,
        }
    }
}

/// An error found while parsing a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token that no grammar rule expects at this point
    #[error("{pos}: unexpected token '{token}'")]
    UnexpectedToken {
        /// The kind of the offending token
        kind: TokenKind,
        /// The token's text
        token: String,
        /// Where the token starts
        pos: Position,
    },
    /// Input ended where the grammar still expected something
    #[error("{pos}: unexpected end of file")]
    UnexpectedEof {
        /// The end of the input
        pos: Position,
    },
    /// A lexical error, surfaced unchanged from the token source
    #[error(transparent)]
    Lexical(#[from] LexError),
}

impl ParseError {
    /// Creates an unexpected-token error for `kind`/`token` at `pos`.
    #[must_use]
    pub const fn unexpected_token(kind: TokenKind, token: String, pos: Position) -> Self {
        Self::UnexpectedToken { kind, token, pos }
    }

    /// The position the error points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { pos, .. } | Self::UnexpectedEof { pos } => *pos,
            Self::Lexical(err) => err.position(),
        }
    }
}

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;
