use super::*;
use rf_ir::Span;
use pretty_assertions::assert_eq;

fn read_all(source: &str) -> Result<Prog, ParseError> {
    read_tree(&crate::parse(source)?)
}

fn terms(source: &str) -> Vec<Term> {
    read_all(source).unwrap().into_terms()
}

#[test]
fn literals() {
    assert_eq!(
        terms(r#"t f 0 42 "hi""#),
        vec![
            Term::Bool(true),
            Term::Bool(false),
            Term::Num(0),
            Term::Num(42),
            Term::str("hi"),
        ]
    );
}

#[test]
fn leading_zeros_are_decimal() {
    assert_eq!(terms("007"), vec![Term::Num(7)]);
}

#[test]
fn number_out_of_range() {
    let err = read_all("1 99999999999999999999").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::NumberOutOfRange {
            digits: "99999999999999999999".to_owned()
        }
    );
    assert_eq!(err.span, Span::new(2, 22));
}

#[test]
fn max_number_fits() {
    assert_eq!(terms("9223372036854775807"), vec![Term::Num(i64::MAX)]);
}

#[test]
fn arrays_nest() {
    assert_eq!(
        terms(r#"{ 1 { t } "x" }"#),
        vec![Term::ary(vec![
            Term::Num(1),
            Term::ary(vec![Term::Bool(true)]),
            Term::str("x"),
        ])]
    );
}

#[test]
fn quotation_preserves_order() {
    assert_eq!(
        terms("[ 42 swap [ ] ]"),
        vec![Term::quot(vec![
            Term::Num(42),
            Term::word("swap"),
            Term::quot(Vec::<Term>::new()),
        ])]
    );
}

#[test]
fn definition_reads_effect_and_body() {
    let read: [Term; 1] = terms(": sw ( x y -- y x ) swap ;").try_into().unwrap();
    let [Term::Def(def)] = read else {
        panic!("expected a definition");
    };
    assert_eq!(def.name(), "sw");
    assert_eq!(def.eff(), &Eff::new(["x", "y"], ["y", "x"]));
    assert_eq!(def.terms(), &[Term::word("swap")]);
}

#[test]
fn effect_node_conversion() {
    let effect = EffectNode {
        pre: vec!["a".to_owned()],
        post: Vec::new(),
        span: Span::DUMMY,
    };
    let eff = read_effect_node(&effect);
    assert_eq!(eff.pre().to_vec(), vec!["a".to_owned()]);
    assert!(eff.post().is_empty());
}
