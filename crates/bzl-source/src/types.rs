//! Type definitions for source code representation.
//!
//! This module defines the types used for representing positions, spans and
//! source files in the `bzl` toolkit. They are the foundation for accurate
//! source tracking, which the parser relies on both for error messages and
//! for the positional metadata a round-tripping formatter needs.
//!
//! Key types include:
//!
//! - `Position`: a specific location in source code with line, column, and byte offset
//! - `Span`: a range between two positions
//! - `Source`: a complete source text with efficient position lookup

use std::fmt;

/// A position in a source file.
///
/// Positions are 1-indexed for line and column, following common editor
/// conventions. The `offset` is 0-indexed, representing the byte offset from
/// the start of the file.
///
/// A position with `line == 0` is the "absent" sentinel ([`Position::NONE`]),
/// used for optional syntax such as a trailing comma that does not appear in
/// the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-indexed; 0 means absent)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Byte offset from the start of the file (0-indexed)
    pub offset: usize,
}

impl Position {
    /// The absent position sentinel.
    pub const NONE: Self = Self { line: 0, column: 0, offset: 0 };

    /// Creates a new position with the given line, column, and byte offset.
    #[must_use]
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    /// Creates a new position at the start of a file (line 1, column 1, offset 0).
    #[must_use]
    pub const fn start_of_file() -> Self { Self { line: 1, column: 1, offset: 0 } }

    /// Returns true if this position is the absent sentinel.
    #[must_use]
    pub const fn is_none(&self) -> bool { self.line == 0 }

    /// Returns true if this position precedes the other position.
    #[must_use]
    pub const fn precedes(&self, other: &Self) -> bool { self.offset < other.offset }

    /// Returns the position `width` bytes further along the same line.
    ///
    /// Only valid for advancing past tokens that cannot contain a newline
    /// (punctuation, identifiers).
    #[must_use]
    pub const fn advance(&self, width: usize) -> Self {
        Self { line: self.line, column: self.column + width, offset: self.offset + width }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span in a source file, representing a range between two positions.
///
/// Spans track the location of language constructs in the source code. The
/// end position is exclusive. They are essential both for error reporting and
/// for the layout decisions a formatter makes (which constructs shared a
/// line, where line breaks occurred).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Starting position of the span
    pub start: Position,
    /// Ending position of the span (exclusive)
    pub end: Position,
}

impl Span {
    /// Creates a new span with the given start and end positions.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self { Self { start, end } }

    /// Creates a new span that encompasses both input spans.
    #[must_use]
    pub fn combine(&self, other: &Self) -> Self {
        let start = if self.start.precedes(&other.start) { self.start } else { other.start };
        let end = if self.end.precedes(&other.end) { other.end } else { self.end };

        Self { start, end }
    }
}

impl Default for Span {
    fn default() -> Self { Self { start: Position::NONE, end: Position::NONE } }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A source code representation that holds a reference to the code.
///
/// Contains the text plus precomputed line start offsets for efficient
/// line/column lookup.
#[derive(Debug)]
pub struct Source<'source> {
    /// The source code
    pub code: &'source str,
    /// Line start positions (in bytes)
    pub line_starts: Vec<usize>,
}

impl<'source> Source<'source> {
    /// Create a new source from a string
    #[must_use]
    pub fn new(code: &'source str) -> Self {
        let line_starts = Self::compute_line_starts(code);
        Self { code, line_starts }
    }

    /// Computes the byte offsets of all line starts in the content.
    fn compute_line_starts(content: &str) -> Vec<usize> {
        let mut line_starts = vec![0]; // First line always starts at byte 0

        for (i, c) in content.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }

        line_starts
    }

    /// Get a slice of the source code corresponding to the given span
    #[must_use]
    pub fn slice(&self, span: Span) -> &'source str {
        &self.code[span.start.offset..span.end.offset]
    }

    /// Calculate the line and column numbers from a byte offset
    ///
    /// ## Panics
    ///
    /// Panics if the offset is greater than the length of the code.
    #[must_use]
    pub fn get_line_column(&self, offset: usize) -> (usize, usize) {
        assert!(
            offset <= self.code.len(),
            "byte offset {} out of range for code with length {}",
            offset,
            self.code.len()
        );

        // Binary search to find which line this offset is in
        match self.line_starts.binary_search(&offset) {
            // Exact match means it's at the start of a line
            Ok(line) => (line + 1, 1),

            // No exact match, i is the insertion point (which means we're on line i-1)
            Err(line) => {
                let line = line - 1;
                let line_start_offset = self.line_starts[line];
                let column = offset - line_start_offset + 1;

                (line + 1, column)
            }
        }
    }

    /// Get a position from a byte offset
    #[must_use]
    pub fn position_from_offset(&self, offset: usize) -> Position {
        let (line, column) = self.get_line_column(offset);
        Position::new(line, column, offset)
    }

    /// Get the line of source code containing the given position
    ///
    /// ## Panics
    ///
    /// Panics if the line index is out of bounds.
    #[must_use]
    pub fn line_at_position(&self, position: Position) -> &'source str {
        let line_idx = position.line - 1;
        assert!(line_idx < self.line_starts.len(), "Line index out of bounds");

        let start_offset = self.line_starts[line_idx];

        let end_offset = if line_idx + 1 < self.line_starts.len() {
            self.line_starts[line_idx + 1] - 1 // Exclude the newline
        } else {
            self.code.len()
        };

        &self.code[start_offset..end_offset]
    }
}
