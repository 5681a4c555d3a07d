//! Tree-walking interpreter for Factor' terms.
//!
//! Dispatch is by term variant:
//!
//! | Term              | Effect                                          |
//! |-------------------|-------------------------------------------------|
//! | `Bool`/`Num`/`Str`| push the value                                  |
//! | `Ary`             | push an array of its element values             |
//! | `Quot`            | push the quotation unevaluated                  |
//! | `Word`            | primitive, else user definition, else error     |
//! | `Def`             | bind the word in the environment                |
//! | `Prog`            | evaluate each term left to right                |

mod builder;

use rf_ir::{Quot, Term};
use rf_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

pub use builder::{EvalConfig, InterpreterBuilder};

use crate::diagnostics::{CallFrame, CallStack};
use crate::environment::Environment;
use crate::errors::{
    non_value_in_array, not_a_quotation, stack_underflow, unknown_name, EvalError, EvalResult,
};
use crate::primitives::Primitives;
use crate::stack::Stack;
use crate::value::Value;

/// Evaluates terms against a data stack and an environment.
///
/// Errors abort the evaluation in progress; whatever the stack and
/// environment hold at that point is left as is.
pub struct Interpreter<'p> {
    primitives: &'p Primitives,
    stack: Stack,
    env: Environment,
    calls: CallStack,
    config: EvalConfig,
}

impl<'p> Interpreter<'p> {
    /// An interpreter with an empty stack, an empty environment and the
    /// default configuration.
    pub fn new(primitives: &'p Primitives) -> Self {
        InterpreterBuilder::new(primitives).build()
    }

    pub fn builder(primitives: &'p Primitives) -> InterpreterBuilder<'p> {
        InterpreterBuilder::new(primitives)
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Current call depth (word and quotation calls in progress).
    pub fn call_depth(&self) -> usize {
        self.calls.depth()
    }

    /// Give back the stack and environment.
    pub fn into_parts(self) -> (Stack, Environment) {
        (self.stack, self.env)
    }

    /// Read `source` and evaluate the resulting term.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn eval_source(&mut self, source: &str) -> EvalResult {
        let term = rf_parse::read(source)?;
        self.eval(&term)
    }

    /// Evaluate one term.
    pub fn eval(&mut self, term: &Term) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(term))
    }

    fn eval_inner(&mut self, term: &Term) -> EvalResult {
        trace!(kind = term.kind_name(), depth = self.calls.depth(), "eval");
        match term {
            Term::Bool(b) => self.stack.push(*b),
            Term::Num(n) => self.stack.push(*n),
            Term::Str(s) => self.stack.push(s.as_str()),
            Term::Ary(ary) => {
                let values = ary
                    .values()
                    .iter()
                    .map(|t| Value::from_literal(t).ok_or_else(|| non_value_in_array(t.kind_name())))
                    .collect::<Result<Vec<_>, _>>()?;
                self.stack.push(values);
            }
            Term::Quot(quot) => self.stack.push(quot.clone()),
            Term::Word(name) => return self.eval_word(name),
            Term::Def(def) => {
                debug!(name = def.name(), effect = %def.eff(), "define");
                self.env.define(def.clone());
            }
            Term::Prog(prog) => {
                for term in prog.terms() {
                    self.eval(term)?;
                }
            }
        }
        Ok(())
    }

    /// Primitive first, then user definition.
    fn eval_word(&mut self, name: &str) -> EvalResult {
        if let Some(primitive) = self.primitives.get(name) {
            trace!(name, "primitive");
            return (primitive.func())(self);
        }
        if let Some(def) = self.env.lookup(name) {
            debug!(name, depth = self.calls.depth(), "invoke word");
            let body = def.body();
            return self.run_quot(&body, CallFrame::word(name));
        }
        Err(unknown_name(name))
    }

    /// Pop the quotation on top of the stack and evaluate its terms in a
    /// new call frame.
    ///
    /// The stack is untouched when the top is missing or not a quotation,
    /// or when the call depth limit is reached.
    pub(crate) fn call_top(&mut self, frame: CallFrame) -> EvalResult {
        let quot = match self.stack.peek() {
            Some(top) => top.as_quot().cloned().ok_or_else(|| not_a_quotation(top))?,
            None => return Err(stack_underflow(1, 0)),
        };
        self.calls.push(frame)?;
        if let Err(err) = self.stack.pop() {
            self.calls.pop();
            return Err(err);
        }
        self.run_body(&quot)
    }

    /// Evaluate `quot` in a new call frame without touching the stack first.
    fn run_quot(&mut self, quot: &Quot, frame: CallFrame) -> EvalResult {
        self.calls.push(frame)?;
        self.run_body(quot)
    }

    /// Runs inside a frame already pushed; pops it on the way out.
    fn run_body(&mut self, quot: &Quot) -> EvalResult {
        let result = quot.terms().iter().try_for_each(|term| self.eval(term));
        let result = result.map_err(|err| self.attach_backtrace(err));
        self.calls.pop();
        result
    }

    fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if !self.config.backtrace || err.backtrace.is_some() {
            return err;
        }
        self.calls.attach_backtrace(err)
    }
}
