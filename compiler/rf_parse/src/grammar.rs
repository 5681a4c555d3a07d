//! Recursive-descent grammar over the token stream.
//!
//! ```text
//! program  := (word_def | term)*
//! word_def := ":" word effect term* ";"
//! effect   := "(" name* "--" name* ")"
//! term     := quotation | value | word
//! quotation:= "[" term* "]"
//! value    := boolean | number | string | array
//! array    := "{" value* "}"
//! ```
//!
//! Symbols are classified here: `t`/`f` are booleans, all-digit symbols
//! are numbers, anything else is a word. Booleans therefore shadow words
//! named `t` or `f`.

use rf_ir::{Span, EFFECT_SEPARATOR};
use rf_lexer::{Delim, TokenKind, TokenList};
use rf_stack::ensure_sufficient_stack;

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};
use crate::node::{DefinitionNode, EffectNode, Node, NodeKind, ParsedProgram};

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
}

/// What a symbol token means in term position.
enum SymbolClass {
    Bool(bool),
    Num,
    Word,
}

fn classify(symbol: &str) -> SymbolClass {
    match symbol {
        "t" => SymbolClass::Bool(true),
        "f" => SymbolClass::Bool(false),
        s if s.bytes().all(|b| b.is_ascii_digit()) => SymbolClass::Num,
        _ => SymbolClass::Word,
    }
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// `program := (word_def | term)*`
    pub(crate) fn parse_program(&mut self) -> Result<ParsedProgram, ParseError> {
        let mut nodes = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::Eof => break,
                TokenKind::Colon => nodes.push(self.parse_definition()?),
                TokenKind::Semicolon => {
                    return Err(self.unexpected("outside of a definition"));
                }
                TokenKind::Close(delim) => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnmatchedClose(*delim),
                        self.cursor.current_span(),
                    ));
                }
                _ => nodes.push(self.parse_term()?),
            }
        }
        Ok(ParsedProgram { nodes })
    }

    /// `term := quotation | value | word`
    fn parse_term(&mut self) -> Result<Node, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Open(Delim::Bracket) => self.parse_quotation(),
            TokenKind::Open(Delim::Paren) => {
                Err(self.unexpected("outside of a definition header"))
            }
            TokenKind::Colon => Err(self.unexpected("inside a quotation or definition")),
            TokenKind::Symbol(symbol) if matches!(classify(symbol), SymbolClass::Word) => {
                let token = self.cursor.advance();
                let TokenKind::Symbol(name) = token.kind else {
                    return Err(ParseError::new(
                        ParseErrorKind::UnexpectedEof { expected: "a word" },
                        token.span,
                    ));
                };
                Ok(Node::new(NodeKind::Word(name), token.span))
            }
            _ => self.parse_value(),
        }
    }

    /// `value := boolean | number | string | array`
    fn parse_value(&mut self) -> Result<Node, ParseError> {
        let span = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::Open(Delim::Brace) => self.parse_array(),
            TokenKind::Str(_) | TokenKind::Symbol(_) => {
                let token = self.cursor.advance();
                let kind = match token.kind {
                    TokenKind::Str(s) => NodeKind::Str(s),
                    TokenKind::Symbol(s) => match classify(&s) {
                        SymbolClass::Bool(b) => NodeKind::Bool(b),
                        SymbolClass::Num => NodeKind::Num(s),
                        SymbolClass::Word => {
                            return Err(ParseError::new(
                                ParseErrorKind::NonLiteralInArray {
                                    found: format!("word `{s}`"),
                                },
                                token.span,
                            ));
                        }
                    },
                    _ => return Err(self.unexpected("where a value was expected")),
                };
                Ok(Node::new(kind, span))
            }
            TokenKind::Eof => Err(ParseError::new(
                ParseErrorKind::UnexpectedEof {
                    expected: "a value",
                },
                span,
            )),
            _ => Err(self.unexpected("where a value was expected")),
        }
    }

    /// `array := "{" value* "}"`
    fn parse_array(&mut self) -> Result<Node, ParseError> {
        let open = self.cursor.advance().span;
        let mut values = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::Close(Delim::Brace) => break,
                TokenKind::Close(found) => {
                    return Err(self.mismatched(Delim::Brace, *found));
                }
                TokenKind::Eof => {
                    return Err(ParseError::new(ParseErrorKind::Unclosed(Delim::Brace), open));
                }
                TokenKind::Open(Delim::Bracket) => {
                    return Err(ParseError::new(
                        ParseErrorKind::NonLiteralInArray {
                            found: "a quotation".to_owned(),
                        },
                        self.cursor.current_span(),
                    ));
                }
                _ => values.push(ensure_sufficient_stack(|| self.parse_value())?),
            }
        }
        let close = self.cursor.advance().span;
        Ok(Node::new(NodeKind::Array(values), open.merge(close)))
    }

    /// `quotation := "[" term* "]"`
    fn parse_quotation(&mut self) -> Result<Node, ParseError> {
        let open = self.cursor.advance().span;
        let (body, close) = self.parse_body(Delim::Bracket, open)?;
        Ok(Node::new(NodeKind::Quotation(body), open.merge(close)))
    }

    /// Terms up to the closing `delim` (consumed). Returns the close span.
    fn parse_body(&mut self, delim: Delim, open: Span) -> Result<(Vec<Node>, Span), ParseError> {
        let mut body = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::Close(found) if *found == delim => break,
                TokenKind::Close(found) => return Err(self.mismatched(delim, *found)),
                TokenKind::Eof => {
                    return Err(ParseError::new(ParseErrorKind::Unclosed(delim), open));
                }
                TokenKind::Semicolon => {
                    return Err(self.unexpected("inside a quotation"));
                }
                _ => body.push(ensure_sufficient_stack(|| self.parse_term())?),
            }
        }
        let close = self.cursor.advance().span;
        Ok((body, close))
    }

    /// `word_def := ":" word effect term* ";"`
    fn parse_definition(&mut self) -> Result<Node, ParseError> {
        let colon = self.cursor.advance().span;

        let name_token = self.cursor.advance();
        let name = match name_token.kind {
            TokenKind::Symbol(s) if matches!(classify(&s), SymbolClass::Word) => s,
            TokenKind::Eof => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedEof {
                        expected: "a word name after `:`",
                    },
                    name_token.span,
                ));
            }
            other => {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidDefinitionName {
                        found: other.describe(),
                    },
                    name_token.span,
                ));
            }
        };

        let effect = self.parse_effect()?;

        let mut body = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::Semicolon => break,
                TokenKind::Eof => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnterminatedDefinition { name },
                        colon.merge(name_token.span),
                    ));
                }
                TokenKind::Close(delim) => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnmatchedClose(*delim),
                        self.cursor.current_span(),
                    ));
                }
                TokenKind::Colon => {
                    return Err(self.unexpected("inside a definition"));
                }
                _ => body.push(self.parse_term()?),
            }
        }
        let semicolon = self.cursor.advance().span;

        Ok(Node::new(
            NodeKind::Definition(DefinitionNode {
                name,
                name_span: name_token.span,
                effect,
                body,
            }),
            colon.merge(semicolon),
        ))
    }

    /// `effect := "(" name* "--" name* ")"`
    pub(crate) fn parse_effect(&mut self) -> Result<EffectNode, ParseError> {
        let open = match self.cursor.current_kind() {
            TokenKind::Open(Delim::Paren) => self.cursor.advance().span,
            TokenKind::Eof => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedEof {
                        expected: "a stack effect",
                    },
                    self.cursor.current_span(),
                ));
            }
            _ => {
                return Err(ParseError::new(
                    ParseErrorKind::MalformedEffect {
                        reason: "expected `(`",
                    },
                    self.cursor.current_span(),
                ));
            }
        };

        let mut pre = Vec::new();
        let mut post = Vec::new();
        let mut seen_separator = false;
        let close = loop {
            let token = self.cursor.advance();
            match token.kind {
                TokenKind::Close(Delim::Paren) if seen_separator => break token.span,
                TokenKind::Close(Delim::Paren) => {
                    return Err(ParseError::new(
                        ParseErrorKind::MalformedEffect {
                            reason: "missing `--`",
                        },
                        open.merge(token.span),
                    ));
                }
                TokenKind::Symbol(s) if s == EFFECT_SEPARATOR => {
                    if seen_separator {
                        return Err(ParseError::new(
                            ParseErrorKind::MalformedEffect {
                                reason: "more than one `--`",
                            },
                            token.span,
                        ));
                    }
                    seen_separator = true;
                }
                TokenKind::Symbol(s) if seen_separator => post.push(s),
                TokenKind::Symbol(s) => pre.push(s),
                TokenKind::Eof => {
                    return Err(ParseError::new(ParseErrorKind::Unclosed(Delim::Paren), open));
                }
                _ => {
                    return Err(ParseError::new(
                        ParseErrorKind::MalformedEffect {
                            reason: "stack effect names must be plain symbols",
                        },
                        token.span,
                    ));
                }
            }
        };

        Ok(EffectNode {
            pre,
            post,
            span: open.merge(close),
        })
    }

    /// Require that all input has been consumed.
    pub(crate) fn expect_end(&mut self) -> Result<(), ParseError> {
        if self.cursor.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected("after the end of the stack effect"))
        }
    }

    fn unexpected(&self, context: &'static str) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                found: self.cursor.current_kind().describe(),
                context,
            },
            self.cursor.current_span(),
        )
    }

    fn mismatched(&self, expected: Delim, found: Delim) -> ParseError {
        ParseError::new(
            ParseErrorKind::MismatchedClose { expected, found },
            self.cursor.current_span(),
        )
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
