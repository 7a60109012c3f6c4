//! Single-character predicates used by the scanner (spec.md §2 "Character
//! classifier"). Kept as free functions, not methods, since none of them
//! carry state — the teacher's lexer inlines these as closures per-call
//! site; pulling them out here keeps the identifier/number rules in
//! `scanner/mod.rs` readable without duplicating the character classes.

/// `^(?!\d)[$\w\x7f-￿]+` start class, spec.md §4.1 rule 2.
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_ascii_alphabetic() || (c as u32) >= 0x7f
}

/// Continuation class for the same identifier rule (adds digits).
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

pub fn is_horizontal_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}
