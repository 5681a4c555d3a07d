//! Word definitions visible to the evaluator.

use rustc_hash::FxHashMap;

use rf_ir::Def;

/// Flat map from word name to its most recent definition.
///
/// There is no scoping: a definition stays visible for the rest of the
/// session, and redefining a word replaces it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    words: FxHashMap<String, Def>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Define (or redefine) a word. Returns the definition it replaced.
    pub fn define(&mut self, def: Def) -> Option<Def> {
        self.words.insert(def.name().to_owned(), def)
    }

    pub fn lookup(&self, name: &str) -> Option<&Def> {
        self.words.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.words.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Defined word names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.keys().map(String::as_str)
    }
}

impl FromIterator<Def> for Environment {
    fn from_iter<I: IntoIterator<Item = Def>>(iter: I) -> Self {
        let mut env = Environment::new();
        for def in iter {
            env.define(def);
        }
        env
    }
}

#[cfg(test)]
mod tests;
