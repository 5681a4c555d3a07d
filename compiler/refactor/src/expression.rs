//! Input accepted by [`crate::evaluate`].

use rf_eval::EvalError;
use rf_ir::Term;

/// Something to evaluate: source text still to be read, or a term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression<'a> {
    Source(&'a str),
    Term(Term),
}

impl Expression<'_> {
    /// Read the source if needed.
    pub fn into_term(self) -> Result<Term, EvalError> {
        match self {
            Expression::Source(source) => Ok(rf_parse::read(source)?),
            Expression::Term(term) => Ok(term),
        }
    }
}

impl<'a> From<&'a str> for Expression<'a> {
    fn from(source: &'a str) -> Self {
        Expression::Source(source)
    }
}

impl<'a> From<&'a String> for Expression<'a> {
    fn from(source: &'a String) -> Self {
        Expression::Source(source)
    }
}

impl From<Term> for Expression<'_> {
    fn from(term: Term) -> Self {
        Expression::Term(term)
    }
}

impl From<&Term> for Expression<'_> {
    fn from(term: &Term) -> Self {
        Expression::Term(term.clone())
    }
}
