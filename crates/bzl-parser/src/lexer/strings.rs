//! String literal decoding.
//!
//! BUILD strings use Python's quoting: single or double quotes, triple-quoted
//! forms that may span lines, and backslash escapes. The decoder here runs at
//! lex time so a bad escape surfaces as a lexical error with the string's
//! position, and the decoded value rides on the token into the tree.

use super::token::StringValue;

/// A decoding failure inside an otherwise well-formed string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnquoteError {
    /// `\c` where `c` starts no recognized escape sequence
    InvalidEscape(char),
    /// A backslash with nothing after it
    TruncatedEscape,
}

/// Decodes a string literal as it appears in the source, quotes included.
///
/// Recognized escapes: `\a \b \f \n \r \t \v \\ \' \"`, octal (`\NNN`, up to
/// three digits), hex (`\xNN`), and an escaped newline (line continuation,
/// which contributes nothing to the value).
///
/// ## Errors
///
/// Returns [`UnquoteError`] for an escape sequence outside that set. The
/// lexer guarantees the quotes themselves are balanced before calling this.
pub(crate) fn unquote(lexeme: &str) -> Result<StringValue, UnquoteError> {
    let triple = lexeme.len() >= 6 && (lexeme.starts_with("\"\"\"") || lexeme.starts_with("'''"));
    let quote_len = if triple { 3 } else { 1 };
    let body = &lexeme[quote_len..lexeme.len() - quote_len];

    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }

        let Some(escape) = chars.next() else {
            return Err(UnquoteError::TruncatedEscape);
        };

        match escape {
            'a' => value.push('\x07'),
            'b' => value.push('\x08'),
            'f' => value.push('\x0C'),
            'n' => value.push('\n'),
            'r' => value.push('\r'),
            't' => value.push('\t'),
            'v' => value.push('\x0B'),
            '\\' => value.push('\\'),
            '\'' => value.push('\''),
            '"' => value.push('"'),
            // Escaped newline: continuation, contributes nothing
            '\n' => {}
            // Octal: up to three digits, first already seen
            '0'..='7' => {
                let mut code = escape as u32 - '0' as u32;
                for _ in 0..2 {
                    let Some(digit) = chars.clone().next().and_then(|d| d.to_digit(8)) else {
                        break;
                    };
                    code = code * 8 + digit;
                    let _ = chars.next();
                }
                value.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
            }
            // Hex: exactly two digits
            'x' => {
                let hi = chars.next().and_then(|d| d.to_digit(16));
                let lo = chars.next().and_then(|d| d.to_digit(16));
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        value.push(char::from_u32(hi * 16 + lo).unwrap_or('\u{FFFD}'));
                    }
                    _ => return Err(UnquoteError::InvalidEscape('x')),
                }
            }
            other => return Err(UnquoteError::InvalidEscape(other)),
        }
    }

    Ok(StringValue { value, triple })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_strings() {
        assert_eq!(unquote(r#""abc""#).unwrap().value, "abc");
        assert_eq!(unquote("'abc'").unwrap().value, "abc");
        assert_eq!(unquote(r#""""#).unwrap().value, "");
    }

    #[test]
    fn triple_quoted() {
        let decoded = unquote("\"\"\"a\nb\"\"\"").unwrap();
        assert_eq!(decoded.value, "a\nb");
        assert!(decoded.triple);

        let decoded = unquote("'''x'''").unwrap();
        assert!(decoded.triple);

        assert!(!unquote(r#""x""#).unwrap().triple);
    }

    #[test]
    fn simple_escapes() {
        assert_eq!(unquote(r#""a\nb""#).unwrap().value, "a\nb");
        assert_eq!(unquote(r#""a\tb""#).unwrap().value, "a\tb");
        assert_eq!(unquote(r#""\"quoted\"""#).unwrap().value, "\"quoted\"");
        assert_eq!(unquote(r#""back\\slash""#).unwrap().value, "back\\slash");
    }

    #[test]
    fn numeric_escapes() {
        assert_eq!(unquote(r#""\x41""#).unwrap().value, "A");
        assert_eq!(unquote(r#""\101""#).unwrap().value, "A");
        assert_eq!(unquote(r#""\0""#).unwrap().value, "\0");
        // Octal stops after three digits
        assert_eq!(unquote(r#""\1014""#).unwrap().value, "A4");
    }

    #[test]
    fn escaped_newline_is_continuation() {
        assert_eq!(unquote("\"a\\\nb\"").unwrap().value, "ab");
    }

    #[test]
    fn invalid_escapes() {
        assert_eq!(unquote(r#""\q""#), Err(UnquoteError::InvalidEscape('q')));
        assert_eq!(unquote(r#""\xg1""#), Err(UnquoteError::InvalidEscape('x')));
    }
}
