//! The recursive-descent / Pratt parser (spec.md §4.3-§4.13).
//!
//! Mirrors the teacher's `ParserContext` shape (a cursor plus a handful of
//! mode flags, `bump`/`expect`/`eat` helpers) generalized from Leo's
//! single `disallow_circuit_construction` flag to this grammar's three
//! interacting flags (`in_f_call`, `in_parens`, the indent stack) and its
//! heavier backtracking needs (§4.9's parenthesized-call rewind, §4.7's
//! unbracketed-object probe).

pub mod block;
pub mod call;
pub mod cursor;
pub mod expression;
pub mod function;
pub mod indent;
pub mod object;
pub mod statement;

use crate::ast::Block;
use crate::error::ParseError;
use crate::token::{Token, TokenKind};
use cursor::{Cursor, Mark};
use indent::IndentStack;

/// A full snapshot of parser state, taken before any rule that may fail
/// softly (spec.md §4.3, §9 "Backtracking primitive"). Restoring one rewinds
/// the cursor and every mode flag together, since they can all be mutated
/// by a rule that ultimately backs out.
#[derive(Clone, Debug)]
pub struct Checkpoint {
    mark: Mark,
    in_f_call: u32,
    in_parens: u32,
    indent_stack: IndentStack,
    eof: bool,
}

pub struct ParserContext {
    cursor: Cursor,
    pub(crate) in_f_call: u32,
    pub(crate) in_parens: u32,
    pub(crate) indent_stack: IndentStack,
    pub(crate) eof: bool,
}

/// Extra state threaded through expression rules without living on
/// `ParserContext` itself (spec.md §4.3.2's `ParseExpressionState`).
#[derive(Clone, Copy, Debug, Default)]
pub struct ExprState {
    pub expr_indent: Option<u32>,
    pub implicit_fcall_arg: bool,
}

impl ParserContext {
    pub fn new(tokens: Vec<Token>) -> Self {
        ParserContext {
            cursor: Cursor::new(tokens),
            in_f_call: 0,
            in_parens: 0,
            indent_stack: IndentStack::new(),
            eof: false,
        }
    }

    pub fn reset(&mut self, tokens: Vec<Token>) {
        self.cursor.reset(tokens);
        self.in_f_call = 0;
        self.in_parens = 0;
        self.indent_stack = IndentStack::new();
        self.eof = false;
    }

    /// Entry point: parses the entire token stream as a root block
    /// (spec.md §4.12, §6).
    pub fn parse(&mut self) -> Result<Block, ParseError> {
        block::parse_root_block(self)
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            mark: self.cursor.mark(),
            in_f_call: self.in_f_call,
            in_parens: self.in_parens,
            indent_stack: self.indent_stack.clone(),
            eof: self.eof,
        }
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor.restore(checkpoint.mark);
        self.in_f_call = checkpoint.in_f_call;
        self.in_parens = checkpoint.in_parens;
        self.indent_stack = checkpoint.indent_stack;
        self.eof = checkpoint.eof;
    }

    /// Runs a speculative rule: on `Ok`, keeps its effects; on `Err`, rewinds
    /// to the pre-call state and returns `None` instead of propagating the
    /// error. Used at every rule boundary spec.md §9 calls out as
    /// "speculative" (unbracketed object probe, parenthesized-call rewind).
    pub(crate) fn speculate<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Option<T> {
        let checkpoint = self.checkpoint();
        match f(self) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!(?err, "speculative rule backtracked");
                self.restore(checkpoint);
                None
            }
        }
    }

    pub fn peek(&self) -> &Token {
        self.cursor.peek()
    }

    pub fn peek_through_newlines(&self) -> &Token {
        self.cursor.peek_through_newlines()
    }

    pub fn peek_space(&self) -> bool {
        self.cursor.peek_space()
    }

    pub fn peek_newline(&self) -> bool {
        self.cursor.peek_newline()
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes and returns the next non-trivia token unconditionally.
    pub fn bump(&mut self) -> Token {
        self.cursor.take()
    }

    /// Consumes the next non-trivia token if it has kind `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.bump())
        } else {
            None
        }
    }

    /// Consumes the next non-trivia token, requiring it to be `kind`.
    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.bump())
        } else {
            Err(ParseError::expected(expected, self.peek()))
        }
    }

    /// Advances past the current `NEWLINE`, updating `self.eof` when
    /// `in_block` and input runs out (spec.md §4.3.1).
    pub fn move_to_next_line(&mut self, in_block: bool) -> Result<u32, ParseError> {
        match indent::move_to_next_line(&mut self.cursor, &self.indent_stack, in_block)? {
            Some(width) => Ok(width),
            None => {
                self.eof = true;
                Ok(0)
            }
        }
    }

    pub fn raw_pos(&self) -> usize {
        self.cursor.raw_pos()
    }

    pub fn set_raw_pos(&mut self, pos: usize) {
        self.cursor.set_raw_pos(pos);
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }
}

/// Parses a complete token stream, per spec.md §6's `Parser::parse` contract.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Block, ParseError> {
    ParserContext::new(tokens).parse()
}
