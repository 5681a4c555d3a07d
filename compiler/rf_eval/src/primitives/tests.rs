use super::*;
use crate::errors::EvalErrorKind;
use crate::value::Value;
use pretty_assertions::assert_eq;

fn drop_top(interp: &mut Interpreter<'_>) -> EvalResult {
    interp.stack_mut().pop().map(|_| ())
}

fn noop(_: &mut Interpreter<'_>) -> EvalResult {
    Ok(())
}

#[test]
fn global_registry_has_builtins() {
    let primitives = global_primitives();
    assert!(primitives.contains("call"));
    assert!(primitives.contains("swap"));
    assert!(!primitives.contains("dup"));
    assert_eq!(primitives.len(), 2);
}

#[test]
fn global_registry_is_shared() {
    assert!(std::ptr::eq(global_primitives(), global_primitives()));
}

#[test]
fn builtin_effects() {
    let primitives = Primitives::with_builtins();
    let swap = primitives.get("swap").unwrap();
    assert_eq!(swap.name(), "swap");
    assert_eq!(swap.effect().to_string(), "( x y -- y x )");
    assert_eq!(swap.arity(), 0);
    assert_eq!(primitives.get("call").unwrap().arity(), -1);
}

#[test]
fn register_custom_primitive() {
    let mut primitives = Primitives::new();
    assert!(primitives.is_empty());
    let replaced = primitives.register("drop", "x --", drop_top).unwrap();
    assert!(replaced.is_none());
    assert_eq!(primitives.get("drop").unwrap().arity(), -1);

    let mut interp = Interpreter::new(&primitives);
    interp.stack_mut().push(1_i64);
    interp.eval_source("drop").unwrap();
    assert!(interp.stack().is_empty());
}

#[test]
fn register_accepts_parenthesized_effect() {
    let mut primitives = Primitives::new();
    primitives.register("nop", "( -- )", noop).unwrap();
    assert_eq!(primitives.get("nop").unwrap().effect(), &Eff::default());
}

#[test]
fn reregistering_replaces() {
    let mut primitives = Primitives::with_builtins();
    let old = primitives.register("swap", "x y -- x y", noop).unwrap();
    assert_eq!(old.map(|p| p.effect().to_string()), Some("( x y -- y x )".to_owned()));
    assert_eq!(primitives.len(), 2);

    let mut interp = Interpreter::new(&primitives);
    interp.eval_source("1 2 swap").unwrap();
    assert_eq!(interp.stack().as_slice(), &[Value::Int(1), Value::Int(2)]);
}

#[test]
fn invalid_effect_is_rejected() {
    let mut primitives = Primitives::new();
    let err = primitives.register("bad", "x y", noop).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidPrimitive {
            name: "bad".to_owned(),
            reason: "malformed stack effect: missing `--`".to_owned(),
        }
    );
    assert!(primitives.register("bad", "-- --", noop).is_err());
    assert!(!primitives.contains("bad"));
}

#[test]
fn invalid_names_are_rejected() {
    let mut primitives = Primitives::new();
    for name in ["", "t", "f", "42", "[", ";", "--", "a b"] {
        assert!(
            primitives.register(name, "--", noop).is_err(),
            "`{name}` should be rejected"
        );
    }
    assert!(primitives.is_empty());
}

#[test]
fn names_lists_registered() {
    let primitives = Primitives::with_builtins();
    let mut names: Vec<_> = primitives.names().collect();
    names.sort_unstable();
    assert_eq!(names, ["call", "swap"]);
}

#[test]
fn debug_shows_name_and_effect() {
    let primitives = Primitives::with_builtins();
    let debug = format!("{:?}", primitives.get("swap").unwrap());
    assert!(debug.contains("swap"));
    assert!(debug.contains("( x y -- y x )"));
}
