//! Lexer error types.

use rf_ir::Span;
use thiserror::Error;

/// A lexer error: what went wrong and where.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),
    /// Missing closing `"` on the same line.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// `\x` not followed by exactly two hex digits.
    #[error("invalid hex escape `{0}`: expected `\\x` followed by two hex digits")]
    InvalidHexEscape(String),
    /// Two tokens touch without whitespace between them.
    #[error("expected whitespace between tokens")]
    MissingWhitespace,
    /// Offsets no longer fit in a `Span`.
    #[error("source exceeds 4GiB")]
    SourceTooLarge,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }
}
