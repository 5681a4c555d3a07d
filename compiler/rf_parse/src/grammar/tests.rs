use super::*;
use pretty_assertions::assert_eq;

fn parse(source: &str) -> Result<ParsedProgram, ParseError> {
    let tokens = rf_lexer::lex(source)?;
    Parser::new(&tokens).parse_program()
}

fn kinds(source: &str) -> Vec<NodeKind> {
    parse(source)
        .unwrap()
        .nodes
        .into_iter()
        .map(|n| n.kind)
        .collect()
}

fn err_kind(source: &str) -> ParseErrorKind {
    parse(source).unwrap_err().kind
}

fn word(s: &str) -> NodeKind {
    NodeKind::Word(s.to_owned())
}

fn num(s: &str) -> NodeKind {
    NodeKind::Num(s.to_owned())
}

fn strip(nodes: Vec<Node>) -> Vec<NodeKind> {
    nodes.into_iter().map(|n| n.kind).collect()
}

#[test]
fn empty_program() {
    assert_eq!(kinds(""), Vec::<NodeKind>::new());
    assert_eq!(kinds(" \n "), Vec::<NodeKind>::new());
}

#[test]
fn classifies_symbols() {
    assert_eq!(
        kinds("t f 42 swap 4x -- t2"),
        vec![
            NodeKind::Bool(true),
            NodeKind::Bool(false),
            num("42"),
            word("swap"),
            word("4x"),
            word("--"),
            word("t2"),
        ]
    );
}

#[test]
fn quotation_keeps_order_and_spans() {
    let program = parse("37 [ 42 swap ] call").unwrap();
    assert_eq!(program.nodes.len(), 3);
    assert_eq!(program.nodes[1].span, Span::new(3, 14));
    let NodeKind::Quotation(body) = program.nodes[1].kind.clone() else {
        panic!("expected quotation");
    };
    assert_eq!(strip(body), vec![num("42"), word("swap")]);
}

#[test]
fn nested_arrays_and_quotations() {
    let nodes = kinds(r#"{ 1 { t "s" } } [ [ ] x ]"#);
    let NodeKind::Array(outer) = &nodes[0] else {
        panic!("expected array");
    };
    assert_eq!(outer.len(), 2);
    assert!(matches!(&outer[1].kind, NodeKind::Array(inner) if inner.len() == 2));
    let NodeKind::Quotation(body) = &nodes[1] else {
        panic!("expected quotation");
    };
    assert!(matches!(&body[0].kind, NodeKind::Quotation(inner) if inner.is_empty()));
    assert_eq!(body[1].kind, word("x"));
}

#[test]
fn definition() {
    let nodes = kinds(": foo ( x -- y z ) 42 ;");
    let [NodeKind::Definition(def)] = nodes.as_slice() else {
        panic!("expected one definition");
    };
    assert_eq!(def.name, "foo");
    assert_eq!(def.name_span, Span::new(2, 5));
    assert_eq!(def.effect.pre, vec!["x".to_owned()]);
    assert_eq!(def.effect.post, vec!["y".to_owned(), "z".to_owned()]);
    assert_eq!(strip(def.body.clone()), vec![num("42")]);
}

#[test]
fn effect_names_may_look_like_literals() {
    let nodes = kinds(": n ( t 1 -- f ) ;");
    let [NodeKind::Definition(def)] = nodes.as_slice() else {
        panic!("expected one definition");
    };
    assert_eq!(def.effect.pre, vec!["t".to_owned(), "1".to_owned()]);
    assert_eq!(def.effect.post, vec!["f".to_owned()]);
}

#[test]
fn definitions_and_terms_mix() {
    let nodes = kinds(": sq ( -- ) [ swap ] call ; 1 2 sq");
    assert_eq!(nodes.len(), 4);
    assert!(matches!(nodes[0], NodeKind::Definition(_)));
    assert_eq!(nodes[3], word("sq"));
}

#[test]
fn unbalanced_delimiters() {
    assert_eq!(err_kind("[ 1 2"), ParseErrorKind::Unclosed(Delim::Bracket));
    assert_eq!(err_kind("{ 1"), ParseErrorKind::Unclosed(Delim::Brace));
    assert_eq!(err_kind("1 ]"), ParseErrorKind::UnmatchedClose(Delim::Bracket));
    assert_eq!(err_kind("}"), ParseErrorKind::UnmatchedClose(Delim::Brace));
    assert_eq!(
        err_kind("[ 1 }"),
        ParseErrorKind::MismatchedClose {
            expected: Delim::Bracket,
            found: Delim::Brace,
        }
    );
    assert_eq!(
        err_kind("{ 1 ]"),
        ParseErrorKind::MismatchedClose {
            expected: Delim::Brace,
            found: Delim::Bracket,
        }
    );
}

#[test]
fn unclosed_error_points_at_opener() {
    let err = parse("1 [ [ ] 2").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Unclosed(Delim::Bracket));
    assert_eq!(err.span, Span::new(2, 3));
}

#[test]
fn arrays_only_hold_values() {
    assert!(matches!(
        err_kind("{ 1 swap }"),
        ParseErrorKind::NonLiteralInArray { .. }
    ));
    assert!(matches!(
        err_kind("{ [ ] }"),
        ParseErrorKind::NonLiteralInArray { .. }
    ));
}

#[test]
fn malformed_effects() {
    assert!(matches!(
        err_kind(": foo ( x ) ;"),
        ParseErrorKind::MalformedEffect { reason: "missing `--`" }
    ));
    assert!(matches!(
        err_kind(": foo ( -- -- ) ;"),
        ParseErrorKind::MalformedEffect {
            reason: "more than one `--`"
        }
    ));
    assert!(matches!(
        err_kind(": foo 42 ;"),
        ParseErrorKind::MalformedEffect { reason: "expected `(`" }
    ));
    assert!(matches!(
        err_kind(": foo ( [ -- ) ;"),
        ParseErrorKind::MalformedEffect { .. }
    ));
    assert_eq!(err_kind(": foo ( x --"), ParseErrorKind::Unclosed(Delim::Paren));
}

#[test]
fn definition_errors() {
    assert_eq!(
        err_kind(": foo ( -- ) 1 2"),
        ParseErrorKind::UnterminatedDefinition {
            name: "foo".to_owned()
        }
    );
    assert!(matches!(
        err_kind(": t ( -- ) ;"),
        ParseErrorKind::InvalidDefinitionName { .. }
    ));
    assert!(matches!(
        err_kind(": 12 ( -- ) ;"),
        ParseErrorKind::InvalidDefinitionName { .. }
    ));
    assert!(matches!(
        err_kind(":"),
        ParseErrorKind::UnexpectedEof { .. }
    ));
    assert!(matches!(
        err_kind(": a ( -- ) : b ( -- ) ; ;"),
        ParseErrorKind::UnexpectedToken { .. }
    ));
    assert!(matches!(
        err_kind("[ : a ( -- ) ; ]"),
        ParseErrorKind::UnexpectedToken { .. }
    ));
}

#[test]
fn stray_tokens() {
    assert!(matches!(err_kind("1 ;"), ParseErrorKind::UnexpectedToken { .. }));
    assert!(matches!(
        err_kind("( x -- )"),
        ParseErrorKind::UnexpectedToken { .. }
    ));
}

#[test]
fn deeply_nested_quotations() {
    let depth = 1_000;
    let source = format!("{}{}", "[ ".repeat(depth), "] ".repeat(depth));
    let program = parse(&source).unwrap();
    assert_eq!(program.nodes.len(), 1);
}
