//! Comment representation.
//!
//! Every node in the tree carries a [`CommentSet`]; the parser's comment
//! attacher fills the three sequences so that no comment token from the input
//! is ever lost. A comment that cannot be tied to any real node ends up in a
//! `CommentBlock` pseudo-node at file scope.

use bzl_source::Position;

/// A single `#` comment, stored verbatim (including the leading `#`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Where the `#` starts in the source
    pub start: Position,
    /// The raw comment text, `#` included, without the trailing newline
    pub token: String,
}

impl Comment {
    /// Creates a new comment.
    #[must_use]
    pub const fn new(start: Position, token: String) -> Self { Self { start, token } }
}

/// The comments attached to one node.
///
/// - `before`: comments printed on their own lines before the node
/// - `suffix`: comments trailing the node on the same line
/// - `after`: comments on the lines following the node, up to the next
///   blank line or statement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentSet {
    /// Comments printed before the node
    pub before: Vec<Comment>,
    /// Same-line trailing comments
    pub suffix: Vec<Comment>,
    /// Comments between this node and the next
    pub after: Vec<Comment>,
}

impl CommentSet {
    /// Creates an empty comment set.
    #[must_use]
    pub const fn new() -> Self { Self { before: Vec::new(), suffix: Vec::new(), after: Vec::new() } }

    /// Returns true if no comments are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.suffix.is_empty() && self.after.is_empty()
    }

    /// Total number of attached comments.
    #[must_use]
    pub fn len(&self) -> usize { self.before.len() + self.suffix.len() + self.after.len() }
}
