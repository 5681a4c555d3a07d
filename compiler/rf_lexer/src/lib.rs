//! Lexer for Factor' source text, built on logos.
//!
//! Tokens are whitespace delimited: a run of symbol characters, a string
//! literal, `:` or `;`. Touching tokens (`foo"bar"`, `:foo`) are rejected.
//! Bracket symbols are cooked into [`TokenKind::Open`]/[`TokenKind::Close`];
//! everything else made of symbol characters stays a [`TokenKind::Symbol`]
//! for the parser to classify.

mod cook_escape;
mod lex_error;
mod token;

use logos::Logos;
use rf_ir::Span;

pub use lex_error::{LexError, LexErrorKind};
pub use token::{Delim, Token, TokenKind, TokenList};

/// Raw token from logos (before cooking).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    Str,

    // Longest match prefers `Str` whenever the closing quote exists.
    #[regex(r#""([^"\\\n]|\\[^\n])*"#)]
    UnterminatedStr,

    #[regex(r"[A-Za-z0-9!@#$%^&*()\-_=+\[\]{}|<>,.?/']+")]
    Symbol,
}

/// Lex `source` into tokens, stopping at the first error.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut raw = RawToken::lexer(source);

    while let Some(result) = raw.next() {
        let range = raw.span();
        let span = Span::try_from_range(range.clone())
            .map_err(|_| LexError::new(LexErrorKind::SourceTooLarge, Span::DUMMY))?;

        let Ok(raw_token) = result else {
            let c = source
                .get(range.start..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or('\0');
            return Err(LexError::new(LexErrorKind::UnexpectedChar(c), span));
        };
        let slice = raw.slice();

        if let Some(prev) = tokens.last() {
            if prev.span.end == span.start {
                return Err(LexError::new(
                    LexErrorKind::MissingWhitespace,
                    Span::new(prev.span.start, span.end),
                ));
            }
        }

        let kind = match raw_token {
            RawToken::Colon => TokenKind::Colon,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Str => {
                let content = &slice[1..slice.len() - 1];
                TokenKind::Str(cook_escape::cook_string(content, span.start + 1)?)
            }
            RawToken::Symbol => cook_symbol(slice),
            RawToken::UnterminatedStr => {
                return Err(LexError::new(LexErrorKind::UnterminatedString, span));
            }
        };
        tokens.push(Token::new(kind, span));
    }

    let eof = u32::try_from(source.len())
        .map_err(|_| LexError::new(LexErrorKind::SourceTooLarge, Span::DUMMY))?;
    tokens.push(Token::new(TokenKind::Eof, Span::point(eof)));
    Ok(TokenList::new(tokens))
}

fn cook_symbol(slice: &str) -> TokenKind {
    match slice {
        "[" => TokenKind::Open(Delim::Bracket),
        "]" => TokenKind::Close(Delim::Bracket),
        "{" => TokenKind::Open(Delim::Brace),
        "}" => TokenKind::Close(Delim::Brace),
        "(" => TokenKind::Open(Delim::Paren),
        ")" => TokenKind::Close(Delim::Paren),
        other => TokenKind::Symbol(other.to_owned()),
    }
}
