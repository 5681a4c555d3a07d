//! Runtime values held on the data stack.

use std::fmt;

use rf_ir::{write_escaped_str, Quot, Term};

/// A value on the data stack.
///
/// Quotations are values too: pushing one does not run it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
    Array(Vec<Value>),
    Quot(Quot),
}

impl Value {
    /// The value a literal term stands for, without evaluating anything.
    ///
    /// Arrays convert element by element. Returns `None` for words,
    /// definitions and programs.
    pub fn from_literal(term: &Term) -> Option<Value> {
        match term {
            Term::Bool(b) => Some(Value::Bool(*b)),
            Term::Num(n) => Some(Value::Int(*n)),
            Term::Str(s) => Some(Value::Str(s.clone())),
            Term::Ary(ary) => ary
                .values()
                .iter()
                .map(Value::from_literal)
                .collect::<Option<Vec<_>>>()
                .map(Value::Array),
            Term::Quot(quot) => Some(Value::Quot(quot.clone())),
            Term::Word(_) | Term::Def(_) | Term::Prog(_) => None,
        }
    }

    /// Human-readable name of this value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Int(_) => "number",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Quot(_) => "quotation",
        }
    }

    pub fn as_quot(&self) -> Option<&Quot> {
        match self {
            Value::Quot(quot) => Some(quot),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Quot> for Value {
    fn from(quot: Quot) -> Self {
        Value::Quot(quot)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(values)
    }
}

/// Renders in concrete syntax, so a literal value prints as the source
/// that would push it.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => f.write_str("t"),
            Value::Bool(false) => f.write_str("f"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write_escaped_str(f, s),
            Value::Array(values) => {
                f.write_str("{")?;
                for value in values {
                    write!(f, " {value}")?;
                }
                f.write_str(" }")
            }
            Value::Quot(quot) => quot.fmt(f),
        }
    }
}
