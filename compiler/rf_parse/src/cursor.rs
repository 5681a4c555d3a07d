//! Token cursor for navigating the token stream.

use rf_ir::Span;
use rf_lexer::{Token, TokenKind, TokenList};
use tracing::trace;

/// Cursor over a lexed token list.
///
/// Invariant: the list ends with `Eof` and the position never moves past
/// it, so [`Cursor::current`] is always valid.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    /// Current token, or a synthetic `Eof` if the list was empty.
    #[inline]
    pub(crate) fn current(&self) -> Token {
        self.tokens
            .get(self.pos)
            .cloned()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, self.end_span()))
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &TokenKind {
        static EOF: TokenKind = TokenKind::Eof;
        self.tokens.get(self.pos).map_or(&EOF, |t| &t.kind)
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.tokens.get(self.pos).map_or_else(|| self.end_span(), |t| t.span)
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Consume and return the current token. Stays put on `Eof`.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current();
        trace!(pos = self.pos, kind = ?token.kind, "advance");
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn end_span(&self) -> Span {
        self.tokens.last().map_or(Span::DUMMY, |t| Span::point(t.span.end))
    }
}
