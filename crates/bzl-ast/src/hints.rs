//! Layout-hint inference.
//!
//! Two booleans are computed per container node at construction time, from
//! nothing but the opening-bracket position, the element spans and the
//! closing-bracket position. Restricting the inputs to properties that
//! reformatting preserves ("bracket and first element share a line", "each
//! element starts on the line the previous one ended") keeps the hints stable
//! across round-trips, which is what makes the formatter idempotent.

use bzl_source::Position;

use crate::nodes::{ASTNode, Expr};

/// Whether a call or tuple should keep its elements on the opening line.
///
/// False for fewer than two elements (natural compactness applies). True iff
/// every element is a literal or string, each element starts on the line the
/// previous one ended (the first on the opening bracket's line), and the
/// closing bracket shares the last element's end line.
#[must_use]
pub fn force_compact(start: Position, elems: &[Expr], end: Position) -> bool {
    if elems.len() < 2 {
        return false;
    }

    let mut line = start.line;
    for elem in elems {
        let span = elem.span();
        if span.start.line != line {
            return false;
        }
        // Only scalar elements qualify; nested containers reformat freely.
        if !matches!(elem, Expr::Literal(_) | Expr::String(_)) {
            return false;
        }
        line = span.end.line;
    }

    end.line == line
}

/// Whether a container should break after its opening bracket.
///
/// With two or more elements the element count already implies multi-line
/// layout, so the hint stays false. An empty container is multi-line iff its
/// brackets sit on different lines; a one-element container iff either
/// bracket is on a different line than the element's matching edge.
#[must_use]
pub fn force_multi_line<N: ASTNode>(start: Position, elems: &[N], end: Position) -> bool {
    match elems {
        [] => start.line != end.line,
        [elem] => {
            let span = elem.span();
            start.line != span.start.line || end.line != span.end.line
        }
        _ => false,
    }
}
