//! Evaluation error types.
//!
//! `EvalErrorKind` gives each failure a typed category. The factory
//! functions (`stack_underflow()`, `unknown_name()`, ...) are the usual
//! way to build an [`EvalError`].

use std::fmt;

use rf_parse::ParseError;
use thiserror::Error;

use crate::value::Value;

/// Result of evaluating a term or running a primitive.
pub type EvalResult = Result<(), EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    /// Fewer values on the stack than an operation consumes.
    #[error("stack underflow: needed {needed} value(s), found {available}")]
    StackUnderflow { needed: usize, available: usize },

    /// A word that is neither a primitive nor defined.
    #[error("unknown word `{name}`")]
    UnknownName { name: String },

    /// `call` applied to something other than a quotation.
    #[error("not a quotation: {found}")]
    NotAQuotation { found: String },

    /// An array term holding a word, definition or program.
    #[error("array elements must be values, found {found}")]
    NonValueInArray { found: &'static str },

    #[error("call depth limit of {limit} exceeded")]
    CallDepthExceeded { limit: usize },

    /// Source handed to the interpreter failed to read.
    #[error("{0}")]
    Parse(ParseError),

    /// A primitive could not be registered.
    #[error("invalid primitive `{name}`: {reason}")]
    InvalidPrimitive { name: String, reason: String },
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Word name, or `call` for an anonymous quotation.
    pub name: String,
}

/// Snapshot of the call chain at an error site, most recent call first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Frame names, most recent first.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.frames.iter().map(|f| f.name.as_str())
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {}", frame.name)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Call chain at the error site, when raised inside a word or
    /// quotation call and backtraces are enabled.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        Self {
            kind,
            backtrace: None,
        }
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            EvalErrorKind::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> Self {
        EvalError::new(EvalErrorKind::Parse(err))
    }
}

#[cold]
pub fn stack_underflow(needed: usize, available: usize) -> EvalError {
    EvalError::new(EvalErrorKind::StackUnderflow { needed, available })
}

#[cold]
pub fn unknown_name(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UnknownName {
        name: name.to_owned(),
    })
}

/// `found` is described by type and rendering, e.g. ``number `37` ``.
#[cold]
pub fn not_a_quotation(found: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::NotAQuotation {
        found: format!("{} `{found}`", found.type_name()),
    })
}

#[cold]
pub fn non_value_in_array(found: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::NonValueInArray { found })
}

#[cold]
pub fn call_depth_exceeded(limit: usize) -> EvalError {
    EvalError::new(EvalErrorKind::CallDepthExceeded { limit })
}

#[cold]
pub fn invalid_primitive(name: &str, reason: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidPrimitive {
        name: name.to_owned(),
        reason: reason.into(),
    })
}
