use crate::{Ary, Def, Eff, Prog, Quot, Term};
use pretty_assertions::assert_eq;

#[test]
fn renders_literals() {
    assert_eq!(Term::Bool(true).to_string(), "t");
    assert_eq!(Term::Bool(false).to_string(), "f");
    assert_eq!(Term::Num(37).to_string(), "37");
    assert_eq!(Term::word("swap").to_string(), "swap");
}

#[test]
fn renders_strings_with_escapes() {
    assert_eq!(Term::str("foo\"bar").to_string(), r#""foo\"bar""#);
    assert_eq!(Term::str("a\\b").to_string(), r#""a\\b""#);
    assert_eq!(Term::str("line\nnext\t!").to_string(), r#""line\nnext\t!""#);
    assert_eq!(Term::str("\u{1b}[0m").to_string(), r#""\x1b[0m""#);
    assert_eq!(Term::str("héllo").to_string(), "\"héllo\"");
}

#[test]
fn renders_empty_collections() {
    assert_eq!(Ary::new(Vec::<Term>::new()).to_string(), "{ }");
    assert_eq!(Quot::new(Vec::<Term>::new()).to_string(), "[ ]");
    assert_eq!(Prog::default().to_string(), "");
}

#[test]
fn renders_nested() {
    let quot = Term::quot(vec![
        Term::Num(42),
        Term::word("swap"),
        Term::ary(vec![Term::Bool(true), Term::ary(Vec::<Term>::new())]),
    ]);
    assert_eq!(quot.to_string(), "[ 42 swap { t { } } ]");
    assert_eq!(Term::quot(vec![Term::word("x")]).to_string(), "[ x ]");
}

#[test]
fn renders_definition() {
    let def = Def::new("foo", Eff::new(["x"], ["y", "z"]), vec![Term::Num(42)]);
    assert_eq!(def.to_string(), ": foo ( x -- y z ) 42 ;");

    let empty = Def::new("nop", Eff::default(), Vec::<Term>::new());
    assert_eq!(empty.to_string(), ": nop ( -- ) ;");
}

#[test]
fn renders_program() {
    let prog = Prog::new(vec![
        Term::Num(37),
        Term::quot(vec![Term::Num(42), Term::word("swap")]),
        Term::word("call"),
    ]);
    assert_eq!(prog.to_string(), "37 [ 42 swap ] call");
}
