//! The scanner's common literal table (spec.md §4.1 rule 1) and keyword set.
//!
//! Entries are matched in order by exact prefix, and the table is ordered by
//! **descending literal length** so that a multi-character form is always
//! tried before any single-character form it shares a prefix with (`++`
//! before `+`, `>>>` before `>>` before `>`). The teacher's
//! `tokenizer/lexer.rs` encodes the same rule ad hoc with
//! `followed_by`/`three_cases` closures per symbol; here it's one flat,
//! order-sensitive table since this language's symbol set is larger.
//!
//! Table entries whose literal starts with a letter are *word* entries: a
//! match only counts if the following character is not an identifier
//! continuation. This implements the fix spec.md §4.1 rule 2 and §9 ask for
//! the known `return1` defect (a bare prefix-based table would scan `return`
//! out of `return1` and leave `1` as a stray `NUMBER`).

use crate::char_class::is_ident_continue;
use crate::token::TokenKind;

pub(super) struct Entry {
    pub text: &'static str,
    pub kind: TokenKind,
}

const fn e(text: &'static str, kind: TokenKind) -> Entry {
    Entry { text, kind }
}

/// Ordered by descending `text.len()`. Keep new entries inserted in the
/// length bucket matching their literal's length; within a bucket, order is
/// irrelevant since same-length literals can't be prefixes of one another.
pub(super) const COMMON_TABLE: &[Entry] = &[
    // len 9
    e("undefined", TokenKind::BuiltinPrimary),
    // len 8
    e("continue", TokenKind::Continue),
    // len 6
    e("unless", TokenKind::Unless),
    e("return", TokenKind::Return),
    // len 5
    e("break", TokenKind::Break),
    e("false", TokenKind::BuiltinPrimary),
    e("until", TokenKind::Until),
    // len 4
    e("isnt", TokenKind::Operator),
    e("then", TokenKind::Then),
    e("else", TokenKind::Else),
    e("true", TokenKind::BuiltinPrimary),
    e("this", TokenKind::LongThis),
    e("null", TokenKind::BuiltinPrimary),
    e("loop", TokenKind::Loop),
    // len 3
    e(">>>", TokenKind::Operator),
    e("...", TokenKind::DotDotDot),
    e("for", TokenKind::For),
    // len 2
    e("if", TokenKind::If),
    e("in", TokenKind::In),
    e("of", TokenKind::Of),
    e("is", TokenKind::Operator),
    e("->", TokenKind::Func),
    e("=>", TokenKind::Func),
    e("++", TokenKind::Unary),
    e("--", TokenKind::Unary),
    e("==", TokenKind::Operator),
    e("!=", TokenKind::Operator),
    e(">=", TokenKind::Operator),
    e("<=", TokenKind::Operator),
    e("<<", TokenKind::Operator),
    e(">>", TokenKind::Operator),
    e("+=", TokenKind::AssignOperator),
    e("-=", TokenKind::AssignOperator),
    e("*=", TokenKind::AssignOperator),
    e("/=", TokenKind::AssignOperator),
    e("^=", TokenKind::AssignOperator),
    e("|=", TokenKind::AssignOperator),
    // len 1
    e("@", TokenKind::ShortThis),
    e("+", TokenKind::Operator),
    e("-", TokenKind::Operator),
    e("*", TokenKind::Operator),
    e("/", TokenKind::Operator),
    e(">", TokenKind::Operator),
    e("<", TokenKind::Operator),
    e("|", TokenKind::Operator),
    e("^", TokenKind::Operator),
    e("&", TokenKind::Operator),
    e("!", TokenKind::UnaryMath),
    e("~", TokenKind::UnaryMath),
    e("=", TokenKind::AssignOperator),
    e("(", TokenKind::LParen),
    e(")", TokenKind::RParen),
    e("{", TokenKind::LBrace),
    e("}", TokenKind::RBrace),
    e("[", TokenKind::LBracket),
    e("]", TokenKind::RBracket),
    e(",", TokenKind::Comma),
    e(";", TokenKind::Semicolon),
    e(":", TokenKind::Colon),
    e(".", TokenKind::Dot),
    e("\n", TokenKind::Newline),
];

/// `true` for table entries whose literal text is a word (starts with an
/// ASCII letter) and therefore needs the non-identifier-boundary check.
pub(super) fn is_word_entry(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// Returns `true` if matching `text` at `rest` would be a false positive
/// because the character right after it continues an identifier (the
/// `return1` defect fix, spec.md §4.1/§9).
pub(super) fn boundary_ok(rest: &str, matched_len: usize) -> bool {
    match rest[matched_len..].chars().next() {
        Some(c) => !is_ident_continue(c),
        None => true,
    }
}
