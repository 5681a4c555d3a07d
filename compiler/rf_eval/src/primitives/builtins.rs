//! Built-in primitives.

use rf_ir::Eff;

use super::{Primitive, Primitives};
use crate::diagnostics::CallFrame;
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;

pub(super) fn register_builtins(primitives: &mut Primitives) {
    primitives.insert(Primitive::new(
        "call",
        Eff::new(["callable"], std::iter::empty::<&str>()),
        call,
    ));
    primitives.insert(Primitive::new("swap", Eff::new(["x", "y"], ["y", "x"]), swap));
}

/// `( callable -- )`: run the quotation on top of the stack.
fn call(interp: &mut Interpreter<'_>) -> EvalResult {
    interp.call_top(CallFrame::quotation())
}

/// `( x y -- y x )`
fn swap(interp: &mut Interpreter<'_>) -> EvalResult {
    let stack = interp.stack_mut();
    let [x, y] = stack.pop_array::<2>()?;
    stack.push(y);
    stack.push(x);
    Ok(())
}
