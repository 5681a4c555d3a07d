//! `InterpreterBuilder` for creating Interpreter instances with various
//! configurations.

use super::Interpreter;
use crate::diagnostics::CallStack;
use crate::environment::Environment;
use crate::primitives::Primitives;
use crate::stack::Stack;

/// Runtime knobs for an interpreter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum nesting of word and quotation calls. `None` means the
    /// depth is bounded only by memory.
    pub max_call_depth: Option<usize>,
    /// Attach the call chain to errors raised inside calls.
    pub backtrace: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_call_depth: None,
            backtrace: true,
        }
    }
}

/// Builder for creating Interpreter instances.
///
/// Everything but the primitive table is optional: the stack and
/// environment start empty and the configuration is
/// [`EvalConfig::default`].
pub struct InterpreterBuilder<'p> {
    primitives: &'p Primitives,
    stack: Option<Stack>,
    env: Option<Environment>,
    config: EvalConfig,
}

impl<'p> InterpreterBuilder<'p> {
    pub fn new(primitives: &'p Primitives) -> Self {
        Self {
            primitives,
            stack: None,
            env: None,
            config: EvalConfig::default(),
        }
    }

    /// Set the initial data stack.
    #[must_use]
    pub fn stack(mut self, stack: Stack) -> Self {
        self.stack = Some(stack);
        self
    }

    /// Set the initial environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, limit: usize) -> Self {
        self.config.max_call_depth = Some(limit);
        self
    }

    #[must_use]
    pub fn backtrace(mut self, enabled: bool) -> Self {
        self.config.backtrace = enabled;
        self
    }

    pub fn build(self) -> Interpreter<'p> {
        Interpreter {
            primitives: self.primitives,
            stack: self.stack.unwrap_or_default(),
            env: self.env.unwrap_or_default(),
            calls: CallStack::new(self.config.max_call_depth),
            config: self.config,
        }
    }
}
