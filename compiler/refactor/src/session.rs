//! REPL-style evaluation state.

use rf_eval::{global_primitives, EvalError, Environment, Interpreter, Stack};

use crate::expression::Expression;

/// One stack and one environment threaded through successive
/// evaluations, the way an interactive listener keeps them.
///
/// A failed evaluation keeps whatever the stack and environment held when
/// the error was raised.
pub struct Session<'p> {
    interp: Interpreter<'p>,
}

impl Session<'static> {
    /// A session with the built-in primitives and empty state.
    pub fn new() -> Self {
        Session {
            interp: Interpreter::new(global_primitives()),
        }
    }
}

impl Default for Session<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'p> Session<'p> {
    /// A session around a pre-configured interpreter.
    pub fn with_interpreter(interp: Interpreter<'p>) -> Self {
        Session { interp }
    }

    /// Evaluate `expr` and return the stack as it stands afterwards.
    pub fn eval<'a>(&mut self, expr: impl Into<Expression<'a>>) -> Result<&Stack, EvalError> {
        let term = expr.into().into_term()?;
        self.interp.eval(&term)?;
        Ok(self.interp.stack())
    }

    pub fn stack(&self) -> &Stack {
        self.interp.stack()
    }

    pub fn env(&self) -> &Environment {
        self.interp.env()
    }

    /// Drop every value, keeping the definitions.
    pub fn clear_stack(&mut self) {
        *self.interp.stack_mut() = Stack::new();
    }

    pub fn into_parts(self) -> (Stack, Environment) {
        self.interp.into_parts()
    }
}
