//! Primitive registry: native words looked up by name.
//!
//! The registry maps names to [`Primitive`]s. A process-wide default
//! holding the built-ins is available through [`global_primitives`];
//! callers wanting a different set build their own [`Primitives`] and
//! hand it to the interpreter.

mod builtins;

use std::fmt;
use std::sync::OnceLock;

use rf_ir::{Eff, TermError, EFFECT_SEPARATOR};
use rustc_hash::FxHashMap;

use crate::errors::{invalid_primitive, EvalError, EvalResult};
use crate::interpreter::Interpreter;

/// Native behavior of a primitive. It gets the whole interpreter, so it
/// can reach the stack, the environment and evaluation itself.
pub type PrimitiveFn = fn(&mut Interpreter<'_>) -> EvalResult;

/// Global primitive table singleton.
static GLOBAL_PRIMITIVES: OnceLock<Primitives> = OnceLock::new();

/// A named native word with a documentary stack effect.
#[derive(Clone)]
pub struct Primitive {
    name: String,
    effect: Eff,
    func: PrimitiveFn,
}

impl Primitive {
    pub fn new(name: impl Into<String>, effect: Eff, func: PrimitiveFn) -> Self {
        Primitive {
            name: name.into(),
            effect,
            func,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn effect(&self) -> &Eff {
        &self.effect
    }

    /// Net change in stack depth, derived from the effect.
    pub fn arity(&self) -> isize {
        self.effect.arity()
    }

    pub fn func(&self) -> PrimitiveFn {
        self.func
    }
}

impl fmt::Debug for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Primitive")
            .field("name", &self.name)
            .field("effect", &self.effect.to_string())
            .finish_non_exhaustive()
    }
}

/// Registry of primitives, keyed by name.
#[derive(Clone, Debug, Default)]
pub struct Primitives {
    table: FxHashMap<String, Primitive>,
}

impl Primitives {
    /// An empty registry.
    pub fn new() -> Self {
        Primitives::default()
    }

    /// A fresh registry holding the built-in primitives.
    pub fn with_builtins() -> Self {
        let mut primitives = Primitives::new();
        builtins::register_builtins(&mut primitives);
        primitives
    }

    /// Register `func` as `name` with a stack effect written as
    /// `"x y -- y x"` (parentheses optional).
    ///
    /// Re-registering a name replaces the previous primitive, which is
    /// returned.
    pub fn register(
        &mut self,
        name: &str,
        effect: &str,
        func: PrimitiveFn,
    ) -> Result<Option<Primitive>, EvalError> {
        if let Some(reason) = invalid_word_name(name) {
            return Err(invalid_primitive(name, reason));
        }
        let effect = parse_effect(effect).map_err(|reason| invalid_primitive(name, reason))?;
        Ok(self.insert(Primitive::new(name, effect, func)))
    }

    fn insert(&mut self, primitive: Primitive) -> Option<Primitive> {
        self.table.insert(primitive.name.clone(), primitive)
    }

    pub fn get(&self, name: &str) -> Option<&Primitive> {
        self.table.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.table.keys().map(String::as_str)
    }
}

/// The process-wide registry of built-in primitives.
pub fn global_primitives() -> &'static Primitives {
    GLOBAL_PRIMITIVES.get_or_init(Primitives::with_builtins)
}

/// Accepts `x y -- y x` as well as `( x y -- y x )`.
fn parse_effect(text: &str) -> Result<Eff, String> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);
    inner.parse::<Eff>().map_err(|err| match err {
        TermError::MalformedEffect { reason, .. } => format!("malformed stack effect: {reason}"),
        other => other.to_string(),
    })
}

/// Why `name` could not be looked up as a word, if it couldn't.
fn invalid_word_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some("name is empty")
    } else if name.chars().any(char::is_whitespace) {
        Some("name contains whitespace")
    } else if name == "t" || name == "f" {
        Some("name reads as a boolean")
    } else if name.bytes().all(|b| b.is_ascii_digit()) {
        Some("name reads as a number")
    } else if matches!(name, "[" | "]" | "{" | "}" | "(" | ")" | ":" | ";")
        || name == EFFECT_SEPARATOR
    {
        Some("name is reserved syntax")
    } else {
        None
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
