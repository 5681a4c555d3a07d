//! Term model: the values the reader produces and the interpreter walks.
//!
//! Every term is immutable once built. Sequences of terms live in shared
//! `Arc<[Term]>` slices, so cloning a quotation or definition never copies
//! its body, and a definition's body can be handed out as a quotation
//! without aliasing hazards.

use std::sync::Arc;

use crate::{Eff, TermError};

/// A parsed program fragment.
///
/// Equality, hashing, and ordering are structural. Ordering is only
/// meaningful for tests and diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// Boolean literal, `t` or `f`.
    Bool(bool),
    /// Integer literal.
    Num(i64),
    /// String literal, already unescaped.
    Str(String),
    /// Literal array of literal terms.
    Ary(Ary),
    /// Reference to a primitive or user-defined word, resolved at run time.
    Word(String),
    /// Deferred block of terms.
    Quot(Quot),
    /// Named word definition.
    Def(Def),
    /// Top-level sequence of terms from one source unit.
    Prog(Prog),
}

impl Term {
    /// Build a boolean from its literal token.
    pub fn bool_from_token(token: &str) -> Result<Term, TermError> {
        match token {
            "t" => Ok(Term::Bool(true)),
            "f" => Ok(Term::Bool(false)),
            other => Err(TermError::InvalidBool(other.to_owned())),
        }
    }

    /// Build a number from a digit string.
    pub fn num_from_token(token: &str) -> Result<Term, TermError> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TermError::InvalidNum(token.to_owned()));
        }
        token
            .parse::<i64>()
            .map(Term::Num)
            .map_err(|_| TermError::NumOutOfRange(token.to_owned()))
    }

    pub fn str(value: impl Into<String>) -> Term {
        Term::Str(value.into())
    }

    pub fn word(name: impl Into<String>) -> Term {
        Term::Word(name.into())
    }

    pub fn ary(values: impl Into<Arc<[Term]>>) -> Term {
        Term::Ary(Ary::new(values))
    }

    pub fn quot(terms: impl Into<Arc<[Term]>>) -> Term {
        Term::Quot(Quot::new(terms))
    }

    /// Short variant name for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Term::Bool(_) => "boolean",
            Term::Num(_) => "number",
            Term::Str(_) => "string",
            Term::Ary(_) => "array",
            Term::Word(_) => "word",
            Term::Quot(_) => "quotation",
            Term::Def(_) => "definition",
            Term::Prog(_) => "program",
        }
    }
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        Term::Bool(value)
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Num(value)
    }
}

impl From<Quot> for Term {
    fn from(quot: Quot) -> Self {
        Term::Quot(quot)
    }
}

impl From<Def> for Term {
    fn from(def: Def) -> Self {
        Term::Def(def)
    }
}

impl From<Prog> for Term {
    fn from(prog: Prog) -> Self {
        Term::Prog(prog)
    }
}

/// Literal array `{ ... }`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ary {
    values: Arc<[Term]>,
}

impl Ary {
    pub fn new(values: impl Into<Arc<[Term]>>) -> Self {
        Ary {
            values: values.into(),
        }
    }

    pub fn values(&self) -> &[Term] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Quotation `[ ... ]`: an unevaluated block pushed as a value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quot {
    terms: Arc<[Term]>,
}

impl Quot {
    pub fn new(terms: impl Into<Arc<[Term]>>) -> Self {
        Quot {
            terms: terms.into(),
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Word definition `: name ( pre -- post ) body ;`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Def {
    name: String,
    eff: Eff,
    terms: Arc<[Term]>,
}

impl Def {
    pub fn new(name: impl Into<String>, eff: Eff, terms: impl Into<Arc<[Term]>>) -> Self {
        Def {
            name: name.into(),
            eff,
            terms: terms.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn eff(&self) -> &Eff {
        &self.eff
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The body as a quotation. Shares storage with the definition.
    pub fn body(&self) -> Quot {
        Quot {
            terms: Arc::clone(&self.terms),
        }
    }
}

/// A whole source unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prog {
    terms: Vec<Term>,
}

impl Prog {
    pub fn new(terms: Vec<Term>) -> Self {
        Prog { terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
