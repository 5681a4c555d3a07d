use super::*;
use pretty_assertions::assert_eq;

fn cook(content: &str) -> Result<String, LexError> {
    cook_string(content, 1)
}

#[test]
fn no_escapes_is_verbatim() {
    assert_eq!(cook("hello world").unwrap(), "hello world");
    assert_eq!(cook("").unwrap(), "");
}

#[test]
fn named_escapes() {
    assert_eq!(cook(r"a\nb\tc\rd\0").unwrap(), "a\nb\tc\rd\0");
}

#[test]
fn arbitrary_escapes_stand_for_themselves() {
    assert_eq!(cook(r#"foo\"bar"#).unwrap(), "foo\"bar");
    assert_eq!(cook(r"back\\slash").unwrap(), "back\\slash");
    assert_eq!(cook(r"\q\[\ ").unwrap(), "q[ ");
}

#[test]
fn hex_escapes() {
    assert_eq!(cook(r"\x41\x62").unwrap(), "Ab");
    assert_eq!(cook(r"\x1b[0m").unwrap(), "\u{1b}[0m");
    assert_eq!(cook(r"\xff").unwrap(), "\u{ff}");
    assert_eq!(cook(r"\x4142").unwrap(), "A42");
}

#[test]
fn invalid_hex_escape() {
    let err = cook(r"ab\xZZ").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidHexEscape(r"\xZZ".to_owned()));
    // Content starts at offset 1; the escape sits at content offset 2.
    assert_eq!(err.span, Span::new(3, 7));
}

#[test]
fn truncated_hex_escape() {
    let err = cook(r"\x4").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidHexEscape(r"\x4".to_owned()));

    let err = cook(r"\x").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidHexEscape(r"\x".to_owned()));
}

#[test]
fn unicode_content_passes_through() {
    assert_eq!(cook(r"héllo\n").unwrap(), "héllo\n");
}
