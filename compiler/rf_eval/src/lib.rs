//! Tree-walking evaluator for Factor' terms.
//!
//! An [`Interpreter`] executes a [`rf_ir::Term`] against a [`Stack`] of
//! [`Value`]s and an [`Environment`] of user definitions. Words resolve
//! first against a [`Primitives`] table, then against the environment.
//!
//! ```text
//! Term ──eval──► Interpreter { Primitives, Stack, Environment, CallStack }
//!                     │
//!                     └── into_parts() ──► (Stack, Environment)
//! ```

mod diagnostics;
mod environment;
mod errors;
mod interpreter;
mod primitives;
mod stack;
mod value;

pub use diagnostics::{CallFrame, CallStack};
pub use environment::Environment;
pub use errors::{
    call_depth_exceeded, invalid_primitive, non_value_in_array, not_a_quotation,
    stack_underflow, unknown_name, BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind,
    EvalResult,
};
pub use interpreter::{EvalConfig, Interpreter, InterpreterBuilder};
pub use primitives::{global_primitives, Primitive, PrimitiveFn, Primitives};
pub use stack::Stack;
pub use value::Value;
