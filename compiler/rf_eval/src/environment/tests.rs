use super::*;
use pretty_assertions::assert_eq;
use rf_ir::{Eff, Term};

fn def(name: &str, body: Vec<Term>) -> Def {
    Def::new(name, Eff::default(), body)
}

#[test]
fn define_and_lookup() {
    let mut env = Environment::new();
    assert!(env.is_empty());
    assert_eq!(env.define(def("answer", vec![Term::Num(42)])), None);
    assert!(env.contains("answer"));
    assert_eq!(env.lookup("answer").map(Def::terms), Some(&[Term::Num(42)][..]));
    assert_eq!(env.lookup("question"), None);
}

#[test]
fn redefinition_replaces() {
    let mut env = Environment::new();
    env.define(def("x", vec![Term::Num(1)]));
    let old = env.define(def("x", vec![Term::Num(2)]));
    assert_eq!(old.map(|d| d.terms().to_vec()), Some(vec![Term::Num(1)]));
    assert_eq!(env.len(), 1);
    assert_eq!(env.lookup("x").map(|d| d.terms().to_vec()), Some(vec![Term::Num(2)]));
}

#[test]
fn names_lists_every_word() {
    let env: Environment = [def("a", vec![]), def("b", vec![])].into_iter().collect();
    let mut names: Vec<_> = env.names().collect();
    names.sort_unstable();
    assert_eq!(names, ["a", "b"]);
}
