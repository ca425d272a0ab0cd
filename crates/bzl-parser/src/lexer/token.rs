//! Token definitions for BUILD files.
//!
//! This module defines the token kinds recognized by the lexer and the token
//! structure handed to the parser. The kind set is closed: any token the
//! grammar never expects is a syntax error at parse time.

use std::fmt::{self, Display, Formatter};

use bzl_source::Position;
use logos::Logos;

/// The kind of a token in a BUILD file.
///
/// Keywords, operators and delimiters are literal; identifiers and numeric
/// literals share one kind because the tree folds both into a raw-text
/// literal node. `Python` and `Eof` are synthesized by the lexer driver.
#[derive(Logos, Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[logos(skip r"([ \t\r\f]+|\\\r?\n)+")] // Skip blanks and backslash continuations, not newlines
pub enum TokenKind {
    // Keywords
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("not")]
    Not,
    #[token("in")]
    In,
    #[token("is")]
    Is,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("lambda")]
    Lambda,

    // Identifiers and numeric literals; both carry raw text only
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    #[regex(r"0[oO][0-7]+")]
    Ident,

    // String literals, single- or triple-quoted
    #[regex(r#""([^"\\\n]|\\(.|\n))*""#)]
    #[regex(r#"'([^'\\\n]|\\(.|\n))*'"#)]
    #[regex(r#""{3}([^"]|"[^"]|""[^"])*"{3}"#)]
    #[regex(r#"'{3}([^']|'[^']|''[^'])*'{3}"#)]
    String,

    // Compound operators
    #[token("==")]
    EqEq,
    #[token("!=")]
    Ne,
    #[token("<=")]
    Le,
    #[token(">=")]
    Ge,
    #[token("+=")]
    PlusEq,

    // Single-character operators
    #[token("=")]
    Eq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(".")]
    Dot,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,

    // Whitespace and comments
    #[regex(r"\n")]
    Newline,
    #[regex(r"#[^\n]*")]
    Comment,

    // Synthetic tokens produced by the lexer driver
    /// An uninterpreted top-level Python block, kept verbatim
    Python,
    /// End of input
    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Not => write!(f, "not"),
            Self::In => write!(f, "in"),
            Self::Is => write!(f, "is"),
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::For => write!(f, "for"),
            Self::Lambda => write!(f, "lambda"),
            Self::Ident => write!(f, "<identifier>"),
            Self::String => write!(f, "<string>"),
            Self::EqEq => write!(f, "=="),
            Self::Ne => write!(f, "!="),
            Self::Le => write!(f, "<="),
            Self::Ge => write!(f, ">="),
            Self::PlusEq => write!(f, "+="),
            Self::Eq => write!(f, "="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Lt => write!(f, "<"),
            Self::Gt => write!(f, ">"),
            Self::Dot => write!(f, "."),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Comma => write!(f, ","),
            Self::Colon => write!(f, ":"),
            Self::Semicolon => write!(f, ";"),
            Self::Newline => write!(f, "<newline>"),
            Self::Comment => write!(f, "<comment>"),
            Self::Python => write!(f, "<python block>"),
            Self::Eof => write!(f, "<end of file>"),
        }
    }
}

/// The decoded payload of a string token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringValue {
    /// The decoded value, escapes resolved
    pub value: String,
    /// Whether the literal uses triple quotes
    pub triple: bool,
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// The kind of token
    pub kind: TokenKind,
    /// The raw text of the token (the whole block for `Python` tokens)
    pub lexeme: &'src str,
    /// Where the token starts
    pub start: Position,
    /// Just past the token's last byte
    pub end: Position,
    /// Decoded payload, populated for `String` tokens only
    pub string: Option<StringValue>,
    /// For `Comment` tokens: whether code precedes the comment on its line
    pub suffix: bool,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, lexeme: &'src str, start: Position, end: Position) -> Self {
        Self { kind, lexeme, start, end, string: None, suffix: false }
    }

    /// Checks if the token is of the specified kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool { self.kind == kind }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.start)
    }
}
