use super::*;

#[test]
fn lex_errors_convert() {
    let lex = LexError::new(LexErrorKind::UnterminatedString, Span::new(3, 9));
    let err = ParseError::from(lex);
    assert_eq!(err.kind, ParseErrorKind::Lex(LexErrorKind::UnterminatedString));
    assert_eq!(err.span, Span::new(3, 9));
}

#[test]
fn messages() {
    let err = ParseError::new(ParseErrorKind::Unclosed(Delim::Bracket), Span::new(0, 1));
    assert_eq!(err.to_string(), "unclosed `[` at 0..1");

    let kind = ParseErrorKind::MismatchedClose {
        expected: Delim::Brace,
        found: Delim::Bracket,
    };
    assert_eq!(kind.to_string(), "expected `}`, found `]`");

    let kind = ParseErrorKind::UnmatchedClose(Delim::Paren);
    assert_eq!(kind.to_string(), "unmatched `)`");
}

#[test]
fn render_uses_line_and_column() {
    let source = "1 2\n  ] swap";
    let err = ParseError::new(ParseErrorKind::UnmatchedClose(Delim::Bracket), Span::new(6, 7));
    assert_eq!(err.render(source), "2:3: unmatched `]`");
}

#[test]
fn term_errors_map_to_parse_errors() {
    assert_eq!(
        ParseErrorKind::from_term_error(TermError::NumOutOfRange("9".repeat(30))),
        ParseErrorKind::NumberOutOfRange {
            digits: "9".repeat(30)
        }
    );
    assert!(matches!(
        ParseErrorKind::from_term_error(TermError::InvalidBool("x".to_owned())),
        ParseErrorKind::UnexpectedToken { .. }
    ));
}
