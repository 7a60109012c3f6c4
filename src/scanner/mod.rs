//! The lexical scanner (spec.md §4.1).
//!
//! Structurally this is `leo-parser`'s `tokenizer/lexer.rs` (`Token::eat`, a
//! single `match`-driven longest-match dispatcher over the next character)
//! generalized from Leo's fixed symbol set to this language's common-table +
//! identifier/number/string/comment/whitespace rule order (spec.md §4.1
//! rules 1-6), plus a `stash`/`rewind` checkpoint (spec.md §6) that Leo's
//! own lexer has no need for — grounded instead on
//! `perl-lexer/src/checkpoint.rs`'s checkpoint/restore shape, reduced to
//! the one field (`position`) that matters to a non-incremental scanner.

mod tables;

use crate::char_class::*;
use crate::error::ScanError;
use crate::span::Span;
use crate::token::{Token, TokenKind};
use tables::{boundary_ok, is_word_entry, COMMON_TABLE};

/// An opaque position a [`Scanner`] can be rewound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Scans a complete source string into a flat token vector.
///
/// One `Scanner` is used per source string (`reset` re-initializes it for
/// reuse). Output order matches source order exactly; see spec.md §3.1's
/// reconstruction invariant, checked in `tests/scanner_tests.rs`.
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner { source, pos: 0 }
    }

    /// Re-initializes the scanner over a new source string.
    pub fn reset(&mut self, source: &'a str) {
        self.source = source;
        self.pos = 0;
    }

    /// Captures the current scan position.
    pub fn stash(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    /// Restores a previously captured position.
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0;
    }

    /// Scans the entire remaining source into a token vector.
    pub fn scan(&mut self) -> Result<Vec<Token>, ScanError> {
        let mut tokens = Vec::new();
        while self.pos < self.source.len() {
            tokens.push(self.next_token()?);
        }
        Ok(tokens)
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn advance(&mut self, kind: TokenKind, len: usize) -> Token {
        let lo = self.pos as u32;
        let value = &self.source[self.pos..self.pos + len];
        self.pos += len;
        Token::new(kind, value, Span::new(lo, self.pos as u32))
    }

    fn next_token(&mut self) -> Result<Token, ScanError> {
        tracing::trace!(pos = self.pos, "scanning next token");

        // Rule 1: the common literal table, longest-match-first, with a
        // non-identifier-continuation boundary check for word entries (the
        // `return1` defect fix, spec.md §4.1 rule 2 / §9).
        if let Some(tok) = self.try_common_table() {
            return Ok(tok);
        }

        let rest = self.rest();
        let first = rest.chars().next().expect("pos < source.len()");

        // Rule 2: identifier.
        if is_ident_start(first) {
            return Ok(self.scan_identifier());
        }

        // Rule 3: number.
        if is_digit(first) {
            return Ok(self.scan_number());
        }

        // Rule 4: string literal.
        if is_quote(first) {
            return self.scan_string(first);
        }

        // Rule 5: comment.
        if first == '#' {
            return Ok(self.scan_comment());
        }

        // Rule 6: whitespace.
        if is_horizontal_whitespace(first) {
            return Ok(self.scan_whitespace());
        }

        let lo = self.pos as u32;
        Err(ScanError::NoMatch {
            pos: lo,
            span: Span::new(lo, lo + first.len_utf8() as u32),
        })
    }

    fn try_common_table(&mut self) -> Option<Token> {
        let rest = self.rest();
        for entry in COMMON_TABLE {
            if let Some(candidate) = rest.get(..entry.text.len()) {
                if candidate != entry.text {
                    continue;
                }
            } else {
                continue;
            }
            if is_word_entry(entry.text) && !boundary_ok(rest, entry.text.len()) {
                continue;
            }
            return Some(self.advance(entry.kind, entry.text.len()));
        }
        None
    }

    fn scan_identifier(&mut self) -> Token {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(i, c)| {
                if i == 0 {
                    !is_ident_start(c)
                } else {
                    !is_ident_continue(c)
                }
            })
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.advance(TokenKind::Identifier, len)
    }

    fn scan_number(&mut self) -> Token {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !is_digit(c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.advance(TokenKind::Number, len)
    }

    fn scan_string(&mut self, quote: char) -> Result<Token, ScanError> {
        let lo = self.pos as u32;
        let rest = self.rest();
        let mut chars = rest.char_indices();
        chars.next(); // the opening quote
        let mut escaped = false;
        for (i, c) in chars {
            if escaped {
                escaped = false;
                continue;
            }
            match c {
                '\\' => escaped = true,
                '\n' => {
                    let hi = self.pos as u32 + i as u32;
                    return Err(ScanError::UnterminatedString {
                        pos: lo,
                        span: Span::new(lo, hi),
                    });
                }
                c if c == quote => {
                    let len = i + c.len_utf8();
                    return Ok(self.advance(TokenKind::String, len));
                }
                _ => {}
            }
        }
        Err(ScanError::UnterminatedString {
            pos: lo,
            span: Span::new(lo, self.source.len() as u32),
        })
    }

    fn scan_comment(&mut self) -> Token {
        let rest = self.rest();
        let len = rest.find('\n').unwrap_or(rest.len());
        self.advance(TokenKind::Comment, len)
    }

    fn scan_whitespace(&mut self) -> Token {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !is_horizontal_whitespace(c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.advance(TokenKind::Whitespace, len)
    }
}

/// Scans a complete source string, per spec.md §6's `Scanner::scan` contract.
pub fn scan(source: &str) -> Result<Vec<Token>, ScanError> {
    Scanner::new(source).scan()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(tokens: &[Token]) -> String {
        tokens.iter().map(|t| &*t.value).collect::<Vec<_>>().concat()
    }

    #[test]
    fn totality_reconstructs_source() {
        let inputs = [
            "1 + 2 * 3",
            "foo = () ->\n  hello()\nhi()",
            "a =\n  hello :\n    world : 2\n  hi:\n    welt: 3",
            "x for x in xs for xs in list",
            "if friday then jack else jill",
            "# comment\nfoo.bar",
            "\"a string with \\\" an escape\"",
        ];
        for input in inputs {
            let tokens = scan(input).unwrap();
            assert_eq!(values(&tokens), input, "input: {input:?}");
        }
    }

    #[test]
    fn keyword_boundary_defect_is_fixed() {
        let tokens = scan("return1").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(&*tokens[0].value, "return1");
    }

    #[test]
    fn keyword_still_matches_at_boundary() {
        let tokens = scan("return 1").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Return);
    }

    #[test]
    fn multichar_operators_not_split() {
        let tokens = scan("a++ - b").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert!(kinds.contains(&TokenKind::Unary));
    }

    #[test]
    fn shift_vs_unsigned_shift() {
        let tokens = scan(">>>").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(&*tokens[0].value, ">>>");
        let tokens = scan(">>").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(&*tokens[0].value, ">>");
    }

    #[test]
    fn unterminated_string_errors() {
        let err = scan("\"no closing quote").unwrap_err();
        assert!(matches!(err, ScanError::UnterminatedString { .. }));
    }

    #[test]
    fn string_across_newline_errors() {
        let err = scan("\"line one\nline two\"").unwrap_err();
        assert!(matches!(err, ScanError::UnterminatedString { .. }));
    }

    #[test]
    fn stash_and_rewind() {
        let mut scanner = Scanner::new("foo bar");
        let first = scanner.next_token().unwrap();
        assert_eq!(&*first.value, "foo");
        let checkpoint = scanner.stash();
        let _ws = scanner.next_token().unwrap();
        let _second = scanner.next_token().unwrap();
        scanner.rewind(checkpoint);
        let replay = scanner.next_token().unwrap();
        assert_eq!(&*replay.value, " ");
    }
}
