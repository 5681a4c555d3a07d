//! Construction errors for the term model.

use thiserror::Error;

/// A term constructor was handed malformed input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TermError {
    #[error("invalid boolean literal `{0}`: expected `t` or `f`")]
    InvalidBool(String),
    #[error("invalid number literal `{0}`: expected one or more digits")]
    InvalidNum(String),
    #[error("number literal `{0}` does not fit in a 64-bit integer")]
    NumOutOfRange(String),
    #[error("malformed stack effect `{text}`: {reason}")]
    MalformedEffect { text: String, reason: &'static str },
}
