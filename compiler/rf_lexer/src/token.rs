//! Cooked tokens.

use std::fmt;

use rf_ir::Span;

/// Bracket pairs. They are reserved: never words, never effect names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Delim {
    /// `[ ]` quotation.
    Bracket,
    /// `{ }` array.
    Brace,
    /// `( )` stack effect.
    Paren,
}

impl Delim {
    pub fn open(self) -> char {
        match self {
            Delim::Bracket => '[',
            Delim::Brace => '{',
            Delim::Paren => '(',
        }
    }

    pub fn close(self) -> char {
        match self {
            Delim::Bracket => ']',
            Delim::Brace => '}',
            Delim::Paren => ')',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Open(Delim),
    Close(Delim),
    /// `:` starting a definition.
    Colon,
    /// `;` ending a definition.
    Semicolon,
    /// Any other run of symbol characters: words, numbers, `t`/`f`, `--`.
    Symbol(String),
    /// String literal, escapes already cooked.
    Str(String),
    Eof,
}

impl TokenKind {
    /// Short description for "expected X, found Y" messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Open(d) => format!("`{}`", d.open()),
            TokenKind::Close(d) => format!("`{}`", d.close()),
            TokenKind::Colon => "`:`".to_owned(),
            TokenKind::Semicolon => "`;`".to_owned(),
            TokenKind::Symbol(s) => format!("`{s}`"),
            TokenKind::Str(_) => "string literal".to_owned(),
            TokenKind::Eof => "end of input".to_owned(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lexer output. Always ends with an `Eof` token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
