//! The token view (spec.md §4.2): a non-destructive cursor over the scanned
//! token sequence with configurable trivia skipping.
//!
//! The teacher's `ParserContext` keeps a reversed `Vec` it `pop()`s and a
//! `token`/`prev_token` pair, retaining comments out up front since Leo's
//! grammar never needs them. This language's parser needs `WHITESPACE` to
//! disambiguate unary/binary (§4.4) and implicit calls (§4.8), so trivia
//! stays in the vector and the skip amount is chosen per call instead.

use crate::span::Span;
use crate::token::{Token, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark(pub(super) usize);

pub struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
    eof: Token,
}

impl Cursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof = Self::make_eof(&tokens);
        Cursor {
            tokens,
            pos: 0,
            eof,
        }
    }

    pub fn reset(&mut self, tokens: Vec<Token>) {
        self.eof = Self::make_eof(&tokens);
        self.tokens = tokens;
        self.pos = 0;
    }

    fn make_eof(tokens: &[Token]) -> Token {
        let span = tokens
            .last()
            .map(|t| Span::new(t.span.hi, t.span.hi))
            .unwrap_or_else(Span::dummy);
        Token::eof(span)
    }

    fn at(&self, index: usize) -> &Token {
        self.tokens.get(index).unwrap_or(&self.eof)
    }

    /// Index of the first token at or after `from` that is not trivia, and
    /// (if `through_newlines`) not `NEWLINE` either.
    fn skip_from(&self, from: usize, through_newlines: bool) -> usize {
        let mut i = from;
        loop {
            let kind = self.at(i).kind;
            if kind.is_trivia() || (through_newlines && kind == TokenKind::Newline) {
                i += 1;
            } else {
                return i;
            }
        }
    }

    /// Next non-trivia token, stopping at (not skipping) `NEWLINE`.
    pub fn peek(&self) -> &Token {
        self.at(self.skip_from(self.pos, false))
    }

    /// Next non-trivia, non-newline token.
    pub fn peek_through_newlines(&self) -> &Token {
        self.at(self.skip_from(self.pos, true))
    }

    /// `true` iff the raw token at the cursor (before any trivia skip) is
    /// `WHITESPACE` — used to tell `foo(2)` from `foo (2)` and to gate
    /// unary/binary disambiguation (§4.4).
    pub fn peek_space(&self) -> bool {
        self.at(self.pos).kind == TokenKind::Whitespace
    }

    /// `true` iff `peek()` would return a `NEWLINE`.
    pub fn peek_newline(&self) -> bool {
        self.peek().kind == TokenKind::Newline
    }

    /// Returns the next non-trivia token and advances the cursor past it.
    pub fn take(&mut self) -> Token {
        let idx = self.skip_from(self.pos, false);
        self.pos = idx + 1;
        self.at(idx).clone()
    }

    /// The raw token directly at `index`, with no skipping at all. Used by
    /// `move_to_next_line` to walk trivia one token at a time while
    /// accumulating indent.
    pub fn raw_at(&self, index: usize) -> &Token {
        self.at(index)
    }

    pub fn raw_pos(&self) -> usize {
        self.pos
    }

    pub fn set_raw_pos(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    pub fn restore(&mut self, mark: Mark) {
        self.pos = mark.0;
    }

    pub fn eof_span(&self) -> Span {
        self.eof.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;

    #[test]
    fn peek_skips_trivia_but_not_newline() {
        let tokens = scan("foo  # c\nbar").unwrap();
        let cursor = Cursor::new(tokens);
        assert_eq!(cursor.peek().kind, TokenKind::Identifier);
        assert_eq!(&*cursor.peek().value, "foo");
    }

    #[test]
    fn take_advances_past_trivia() {
        let tokens = scan("foo bar").unwrap();
        let mut cursor = Cursor::new(tokens);
        assert_eq!(&*cursor.take().value, "foo");
        assert_eq!(&*cursor.take().value, "bar");
        assert_eq!(cursor.peek().kind, TokenKind::Eof);
    }

    #[test]
    fn mark_and_restore_roundtrip() {
        let tokens = scan("a b c").unwrap();
        let mut cursor = Cursor::new(tokens);
        let _a = cursor.take();
        let mark = cursor.mark();
        let _b = cursor.take();
        cursor.restore(mark);
        assert_eq!(&*cursor.take().value, "b");
    }

    #[test]
    fn peek_through_newlines_skips_newline() {
        let tokens = scan("foo\nbar").unwrap();
        let mut cursor = Cursor::new(tokens);
        assert!(!cursor.peek_newline());
        let _foo = cursor.take();
        assert!(cursor.peek_newline());
        assert_eq!(&*cursor.peek_through_newlines().value, "bar");
    }
}
