//! Positioned lexer errors.
//!
//! Errors follow the WHERE+WHAT+WHY+HOW shape:
//! - WHERE: `line`, the display `column` and the line-relative byte `span`
//! - WHAT: `kind`
//! - WHY: `policy`, the error policy in force (which decides what the rest
//!   of the document looks like)
//! - HOW: [`LexError::suggestion`]

use neat_lexer_core::{ErrorPolicy, UnbalancedCloseBrace};

use crate::Span;

/// A lexer error with enough context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {}:{}", .line + 1, .column + 1)]
pub struct LexError {
    /// Zero-based line index.
    pub line: u32,
    /// Zero-based column in UTF-16 code units.
    pub column: u32,
    /// Byte range within the line.
    pub span: Span,
    pub kind: LexErrorKind,
    pub policy: ErrorPolicy,
}

/// What kind of lexer error occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A `}` with no open block to close.
    #[error("unbalanced `}}`: no open block to close")]
    UnbalancedCloseBrace,
}

impl LexError {
    pub fn unbalanced_close_brace(line: u32, err: UnbalancedCloseBrace, policy: ErrorPolicy) -> Self {
        LexError {
            line,
            column: err.column,
            span: Span::new(err.offset, err.offset + 1),
            kind: LexErrorKind::UnbalancedCloseBrace,
            policy,
        }
    }

    /// Short label for the offending text.
    pub fn label(&self) -> &'static str {
        match self.kind {
            LexErrorKind::UnbalancedCloseBrace => "this `}` has no matching `{`",
        }
    }

    /// Actionable fix.
    pub fn suggestion(&self) -> &'static str {
        match self.kind {
            LexErrorKind::UnbalancedCloseBrace => {
                "remove this `}` or add the `{` that should open its block"
            }
        }
    }

    /// What the error did to the rest of the document, if anything.
    pub fn consequence(&self) -> Option<&'static str> {
        match self.policy {
            ErrorPolicy::Sticky => Some("everything after this point is marked as an error"),
            ErrorPolicy::Resync => None,
        }
    }
}

#[cfg(test)]
mod tests;
