//! Parse error types for message patterns.

use thiserror::Error;

use super::ast::{Location, Position};
use crate::skeleton::RangeError;

/// A grammar violation. Parsing stops at the first one; no partial AST is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at {}:{}: {message}", location.start.line, location.start.column)]
pub struct SyntaxError {
    /// Human-readable description.
    pub message: String,
    /// Tokens that would have been accepted at the failure point.
    pub expected: Vec<String>,
    /// The token actually found, or `None` at end of input.
    pub found: Option<String>,
    pub location: Location,
}

/// Semantic violations detected after a construct parsed successfully.
///
/// These travel through winnow as the external cause of a cut error and are
/// unwrapped into a [`SyntaxError`] at the top of the parse.
#[derive(Debug, Error)]
pub(crate) enum Violation {
    #[error("Duplicate option \"{selector}\" in {kind} element: \"{text}\"")]
    DuplicateOption {
        selector: String,
        kind: &'static str,
        text: String,
        span: (usize, usize),
    },

    #[error("Mismatched tag: <{open}> closed by </{close}>")]
    MismatchedTag {
        open: String,
        close: String,
        span: (usize, usize),
    },

    #[error("Invalid skeleton \"{skeleton}\": {source}")]
    InvalidSkeleton {
        skeleton: String,
        source: RangeError,
        span: (usize, usize),
    },
}

impl Violation {
    pub(crate) fn span(&self) -> (usize, usize) {
        match self {
            Violation::DuplicateOption { span, .. }
            | Violation::MismatchedTag { span, .. }
            | Violation::InvalidSkeleton { span, .. } => *span,
        }
    }
}

/// Line and column of a byte offset into `source`.
pub(crate) fn position_at(source: &str, offset: usize) -> Position {
    let consumed = &source[..offset];
    let line = consumed.matches('\n').count() + 1;
    let line_start = consumed.rfind('\n').map_or(0, |pos| pos + 1);
    let column = consumed[line_start..].chars().count() + 1;
    Position {
        offset,
        line,
        column,
    }
}

/// Location spanning two byte offsets into `source`.
pub(crate) fn location_between(source: &str, start: usize, end: usize) -> Location {
    Location {
        start: position_at(source, start),
        end: position_at(source, end),
    }
}
