//! Term model for Factor', a small concatenative language.
//!
//! The reader (`rf_parse`) builds these terms from source text and the
//! interpreter (`rf_eval`) walks them. Terms are plain immutable values:
//! structural equality and ordering, cheap clones, and a [`Display`]
//! rendering in concrete syntax.
//!
//! [`Display`]: std::fmt::Display

mod display;
mod effect;
mod error;
mod span;
mod term;

pub use display::write_escaped_str;
pub use effect::{Eff, EFFECT_SEPARATOR};
pub use error::TermError;
pub use span::{Span, SpanError};
pub use term::{Ary, Def, Prog, Quot, Term};
