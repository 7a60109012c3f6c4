//! Token kinds and the scanned [`Token`] type.
//!
//! Mirrors `leo-parser`'s `tokenizer/token.rs`: a flat enum of everything the
//! scanner can produce, plus a `Display` impl used in error messages. Unlike
//! Leo — whose lexer drops whitespace before the parser ever sees it — this
//! kind set keeps trivia (spec.md §3.1) because significant-indentation
//! decisions live in the parser, not the scanner.

use crate::span::Span;
use std::fmt;

/// The class of a scanned token. See spec.md §3.1 for the full partition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Trivia
    Whitespace,
    Comment,

    // Structural
    Newline,
    /// Reserved for an alternate scanner mode; the main parser computes
    /// indentation itself and never produces or consumes these.
    BlockStart,
    BlockEnd,

    // Atoms
    Identifier,
    Number,
    String,

    // Keyword / operator classes
    Operator,
    AssignOperator,
    Unary,
    UnaryMath,
    Func,
    Return,
    If,
    Unless,
    Then,
    Else,
    For,
    Until,
    Loop,
    In,
    Of,
    Break,
    Continue,
    BuiltinPrimary,
    ShortThis,
    LongThis,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
    DotDotDot,

    /// Sentinel returned by the token view once the real tokens are
    /// exhausted; never produced by the scanner itself.
    Eof,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

/// A single scanned token: its class, and the exact source slice it covers.
///
/// Invariant (spec.md §3.1): concatenating `value` across a full scan
/// reproduces the input exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Box<str>,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<Box<str>>, span: Span) -> Self {
        Token {
            kind,
            value: value.into(),
            span,
        }
    }

    pub fn eof(at: Span) -> Self {
        Token {
            kind: TokenKind::Eof,
            value: "".into(),
            span: Span::new(at.hi, at.hi),
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "<{:?}>", self.kind)
        } else {
            write!(f, "'{}'", self.value)
        }
    }
}
