//! Error taxonomy for the scanner and parser.
//!
//! The teacher splits this across a `leo-errors` crate with a `Handler`
//! that side-channels diagnostics past `Result`. That split earns its keep
//! in a multi-crate workspace with a warnings channel; at this crate's scope
//! (one crate, no recoverable diagnostics to accumulate) it collapses to a
//! plain `thiserror` enum per spec.md §7's taxonomy, returned directly from
//! `Result`.

use crate::span::Span;
use crate::token::Token;
use thiserror::Error;

/// Errors raised while turning source text into tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("no token rule matched at byte {pos}")]
    NoMatch { pos: u32, span: Span },

    #[error("unterminated string literal starting at byte {pos}")]
    UnterminatedString { pos: u32, span: Span },
}

impl ScanError {
    pub fn span(&self) -> Span {
        match self {
            ScanError::NoMatch { span, .. } => *span,
            ScanError::UnterminatedString { span, .. } => *span,
        }
    }
}

/// Errors raised while building the AST from a token stream.
///
/// Mirrors spec.md §7's kinds exactly: `UnexpectedToken`, `ExpectedToken`,
/// `IndentError` (split into its three named cases so messages stay
/// specific), `EmptyBlock`, `PrecedenceError`, `Leftover`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected token {found}")]
    UnexpectedToken { found: String, span: Span },

    #[error("expected {expected}, found {found}")]
    ExpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("missing indent")]
    MissingIndent { span: Span },

    #[error("unexpected indent")]
    UnexpectedIndent { span: Span },

    #[error("missing indentation in root block")]
    MissingIndentInRoot { span: Span },

    #[error("empty block in an '{construct}'")]
    EmptyBlock { construct: &'static str, span: Span },

    #[error("undefined operator priority for '{operator}'")]
    UndefinedPriority { operator: String, span: Span },

    #[error("unexpected after expression: {found}")]
    Leftover { found: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::ExpectedToken { span, .. }
            | ParseError::MissingIndent { span }
            | ParseError::UnexpectedIndent { span }
            | ParseError::MissingIndentInRoot { span }
            | ParseError::EmptyBlock { span, .. }
            | ParseError::UndefinedPriority { span, .. }
            | ParseError::Leftover { span, .. } => *span,
        }
    }

    pub(crate) fn unexpected(found: &Token) -> Self {
        ParseError::UnexpectedToken {
            found: found.to_string(),
            span: found.span,
        }
    }

    pub(crate) fn expected(expected: impl Into<String>, found: &Token) -> Self {
        ParseError::ExpectedToken {
            expected: expected.into(),
            found: found.to_string(),
            span: found.span,
        }
    }
}

/// Top-level error returned by the crate's [`crate::parse`] convenience
/// function, composing the scan and parse stages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
