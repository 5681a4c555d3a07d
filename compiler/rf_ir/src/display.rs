//! Canonical rendering in concrete syntax.
//!
//! For literals, arrays of literals, and quotations of words, reading the
//! rendered text yields the same term back.

use std::fmt::{self, Write};

use crate::{Ary, Def, Prog, Quot, Term};

/// Write `s` as a double-quoted string literal with escapes applied.
pub fn write_escaped_str(f: &mut impl Write, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            '\0' => f.write_str("\\0")?,
            c if c.is_ascii_control() => write!(f, "\\x{:02x}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// Write `open t1 t2 ... close`, or `open close` when empty.
fn write_delimited<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    items: &[T],
    close: &str,
) -> fmt::Result {
    f.write_str(open)?;
    for item in items {
        write!(f, " {item}")?;
    }
    write!(f, " {close}")
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Bool(true) => f.write_str("t"),
            Term::Bool(false) => f.write_str("f"),
            Term::Num(n) => write!(f, "{n}"),
            Term::Str(s) => write_escaped_str(f, s),
            Term::Ary(ary) => ary.fmt(f),
            Term::Word(name) => f.write_str(name),
            Term::Quot(quot) => quot.fmt(f),
            Term::Def(def) => def.fmt(f),
            Term::Prog(prog) => prog.fmt(f),
        }
    }
}

impl fmt::Display for Ary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_delimited(f, "{", self.values(), "}")
    }
}

impl fmt::Display for Quot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_delimited(f, "[", self.terms(), "]")
    }
}

impl fmt::Display for Def {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ": {} {}", self.name(), self.eff())?;
        for term in self.terms() {
            write!(f, " {term}")?;
        }
        f.write_str(" ;")
    }
}

impl fmt::Display for Prog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms().iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
