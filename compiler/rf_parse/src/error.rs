//! Parse error types.
//!
//! The first error aborts the parse; there is no recovery.

use rf_ir::{Span, TermError};
use rf_lexer::{Delim, LexError, LexErrorKind};
use thiserror::Error;

/// A parse failure and the source span it points at.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {span}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("{0}")]
    Lex(LexErrorKind),
    /// An opening delimiter with no matching close before end of input.
    #[error("unclosed `{}`", .0.open())]
    Unclosed(Delim),
    /// A closing delimiter with nothing open.
    #[error("unmatched `{}`", .0.close())]
    UnmatchedClose(Delim),
    /// A closing delimiter that does not match the innermost open one.
    #[error("expected `{}`, found `{}`", .expected.close(), .found.close())]
    MismatchedClose { expected: Delim, found: Delim },
    /// A token that cannot appear here.
    #[error("unexpected {found} {context}")]
    UnexpectedToken { found: String, context: &'static str },
    /// Input ended where more was required.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    /// `:` without a matching `;`.
    #[error("definition of `{name}` is missing its closing `;`")]
    UnterminatedDefinition { name: String },
    #[error("malformed stack effect: {reason}")]
    MalformedEffect { reason: &'static str },
    /// Definition name is a literal or delimiter rather than a word.
    #[error("cannot define {found}: not a word")]
    InvalidDefinitionName { found: String },
    #[error("array elements must be literal values, found {found}")]
    NonLiteralInArray { found: String },
    #[error("number literal `{digits}` does not fit in a 64-bit integer")]
    NumberOutOfRange { digits: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// Render as `line:col: message` against the source the error came from.
    pub fn render(&self, source: &str) -> String {
        let (line, col) = self.span.line_col(source);
        format!("{line}:{col}: {}", self.kind)
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::new(ParseErrorKind::Lex(err.kind), err.span)
    }
}

impl ParseErrorKind {
    /// Map a term construction failure found while reading a node.
    pub(crate) fn from_term_error(err: TermError) -> Self {
        match err {
            TermError::NumOutOfRange(digits) => ParseErrorKind::NumberOutOfRange { digits },
            TermError::InvalidNum(found) => ParseErrorKind::UnexpectedToken {
                found: format!("`{found}`"),
                context: "where a number was expected",
            },
            TermError::InvalidBool(found) => ParseErrorKind::UnexpectedToken {
                found: format!("`{found}`"),
                context: "where a boolean was expected",
            },
            TermError::MalformedEffect { reason, .. } => ParseErrorKind::MalformedEffect { reason },
        }
    }
}

#[cfg(test)]
mod tests;
