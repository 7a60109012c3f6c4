//! The indent tracker (spec.md §4.3.1, §4.12): the stack of active block
//! indents and `move_to_next_line`, the only place indentation is measured.
//!
//! Grounded on the same "snapshot the whole struct, restore on failure"
//! discipline the teacher's `ParserContext` uses for `disallow_circuit_construction`
//! and similar flags — here the indent stack is a plain `Vec<u32>` cloned
//! into every [`crate::parser::Checkpoint`] rather than a persistent
//! structure, per spec.md §9's "simplest correct model" note.

use crate::error::ParseError;
use crate::parser::cursor::Cursor;
use crate::token::TokenKind;

#[derive(Clone, Debug, Default)]
pub struct IndentStack {
    widths: Vec<u32>,
}

impl IndentStack {
    pub fn new() -> Self {
        IndentStack { widths: vec![0] }
    }

    pub fn top(&self) -> u32 {
        *self.widths.last().expect("root indent always present")
    }

    pub fn push(&mut self, width: u32) {
        self.widths.push(width);
    }

    pub fn pop(&mut self) {
        if self.widths.len() > 1 {
            self.widths.pop();
        }
    }

    pub fn depth(&self) -> usize {
        self.widths.len()
    }

    pub fn truncate(&mut self, depth: usize) {
        self.widths.truncate(depth.max(1));
    }
}

/// Advances past the current `NEWLINE`, accumulating the indent of the line
/// it lands on. Must be called with the cursor sitting on a `NEWLINE` (raw
/// position), or with `in_block` true at raw position 0 of an empty input.
///
/// Returns the accumulated indent (the `WHITESPACE` length on the landed
/// line), or `Ok(None)` if `in_block` and the walk ran off the end of input
/// (the caller sets its own `eof` flag from that).
pub fn move_to_next_line(
    cursor: &mut Cursor,
    indent_stack: &IndentStack,
    in_block: bool,
) -> Result<Option<u32>, ParseError> {
    let mut pos = cursor.raw_pos();
    let mut indent: u32 = 0;

    loop {
        let tok = cursor.raw_at(pos).clone();
        match tok.kind {
            TokenKind::Newline => {
                indent = 0;
                pos += 1;
            }
            TokenKind::Whitespace => {
                indent += tok.value.len() as u32;
                pos += 1;
            }
            TokenKind::Comment => {
                pos += 1;
            }
            TokenKind::Eof => {
                if in_block {
                    cursor.set_raw_pos(pos);
                    return Ok(None);
                }
                cursor.set_raw_pos(pos);
                return Ok(Some(indent));
            }
            _ => {
                cursor.set_raw_pos(pos);
                if !in_block && indent < indent_stack.top() {
                    return Err(ParseError::MissingIndent { span: tok.span });
                }
                return Ok(Some(indent));
            }
        }
    }
}
