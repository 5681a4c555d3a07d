//! Reader and tree-walking interpreter for Factor', a small subset of the
//! Factor concatenative language.
//!
//! ```text
//! source ──read──► Term ──evaluate──► Stack (+ Environment, updated in place)
//! ```
//!
//! [`evaluate`] runs one expression against a stack and environment the
//! caller owns. [`Session`] keeps both between evaluations.
//!
//! Enable logging with `RUST_LOG=rf_eval=debug` (or `trace`) after calling
//! [`init_tracing`].

mod expression;
mod session;

use std::sync::Once;

use tracing::debug;

pub use expression::Expression;
pub use session::Session;

pub use rf_eval::{
    global_primitives, BacktraceFrame, EvalBacktrace, EvalConfig, EvalError, EvalErrorKind,
    Environment, Interpreter, InterpreterBuilder, Primitive, PrimitiveFn, Primitives, Stack, Value,
};
pub use rf_ir::{Ary, Def, Eff, Prog, Quot, Span, Term, TermError};
pub use rf_parse::{read_effect, read_program, ParseError, ParseErrorKind, ParsedProgram};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times. Does nothing
/// unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Parse `source` into a spanned parse tree without building terms.
pub fn parse(source: &str) -> Result<ParsedProgram, ParseError> {
    rf_parse::parse(source)
}

/// Read `source` into a term: the term itself when the source holds
/// exactly one, otherwise a [`Term::Prog`].
pub fn read(source: &str) -> Result<Term, ParseError> {
    rf_parse::read(source)
}

/// Evaluate `expr` (source text or an already-read [`Term`]) on `stack`
/// with the built-in primitives.
///
/// Definitions made by `expr` land in `env`, including those made before
/// an error aborted the evaluation. Returns the final stack.
///
/// ```
/// use refactor::{evaluate, Environment, Stack, Value};
///
/// let mut env = Environment::new();
/// let stack = evaluate("37 [ 42 swap ] call", Stack::new(), &mut env).unwrap();
/// assert_eq!(stack.as_slice(), &[Value::Int(42), Value::Int(37)]);
/// ```
pub fn evaluate<'a>(
    expr: impl Into<Expression<'a>>,
    stack: Stack,
    env: &mut Environment,
) -> Result<Stack, EvalError> {
    evaluate_with(global_primitives(), EvalConfig::default(), expr, stack, env)
}

/// [`evaluate`] with an explicit primitive table and configuration.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate_with<'a>(
    primitives: &Primitives,
    config: EvalConfig,
    expr: impl Into<Expression<'a>>,
    stack: Stack,
    env: &mut Environment,
) -> Result<Stack, EvalError> {
    let term = expr.into().into_term()?;
    let mut interp = Interpreter::builder(primitives)
        .config(config)
        .stack(stack)
        .env(std::mem::take(env))
        .build();
    let result = interp.eval(&term);
    let (stack, updated) = interp.into_parts();
    *env = updated;
    debug!(depth = stack.len(), words = env.len(), ok = result.is_ok(), "evaluated");
    result.map(|()| stack)
}
