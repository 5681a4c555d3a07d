//! Stack effect declarations.

use std::fmt;
use std::str::FromStr;

use crate::TermError;

/// Separator between the consumed and produced names of an effect.
pub const EFFECT_SEPARATOR: &str = "--";

/// A declared stack effect: names consumed (`pre`) and produced (`post`).
///
/// Effects are documentary. Nothing checks them against the stack at
/// evaluation time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Eff {
    pre: Vec<String>,
    post: Vec<String>,
}

impl Eff {
    pub fn new<I, J, S, T>(pre: I, post: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Eff {
            pre: pre.into_iter().map(Into::into).collect(),
            post: post.into_iter().map(Into::into).collect(),
        }
    }

    pub fn pre(&self) -> &[String] {
        &self.pre
    }

    pub fn post(&self) -> &[String] {
        &self.post
    }

    /// Net change in stack depth: `|post| - |pre|`.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "effect lists are written by hand and never approach isize::MAX"
    )]
    pub fn arity(&self) -> isize {
        self.post.len() as isize - self.pre.len() as isize
    }
}

/// Parses the registration form `"x y -- y x"`.
///
/// Names are whitespace separated and exactly one `--` must appear.
/// Surrounding parentheses are not accepted here; the reader handles the
/// `( .. -- .. )` source form.
impl FromStr for Eff {
    type Err = TermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| TermError::MalformedEffect {
            text: s.to_owned(),
            reason,
        };

        let mut tokens = s.split_whitespace();
        let pre: Vec<&str> = tokens
            .by_ref()
            .take_while(|tok| *tok != EFFECT_SEPARATOR)
            .collect();
        if pre.len() == s.split_whitespace().count() {
            return Err(malformed("missing `--`"));
        }
        let post: Vec<&str> = tokens.collect();
        if post.contains(&EFFECT_SEPARATOR) {
            return Err(malformed("more than one `--`"));
        }
        if pre.iter().chain(&post).any(|name| matches!(*name, "(" | ")")) {
            return Err(malformed("parentheses are not names"));
        }
        Ok(Eff::new(pre, post))
    }
}

impl fmt::Display for Eff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for name in &self.pre {
            write!(f, " {name}")?;
        }
        write!(f, " {EFFECT_SEPARATOR}")?;
        for name in &self.post {
            write!(f, " {name}")?;
        }
        f.write_str(" )")
    }
}
