//! Object literals (§4.7) — both surface forms (`{ ... }` and unbracketed)
//! share one body-parsing loop; only entry/exit and the braced-vs-not
//! variants of a few indent checks differ.
//!
//! This is the single hardest invariant in the grammar to reproduce
//! (spec.md calls it out explicitly). The loop below tracks `last_indent`/
//! `min_indent` exactly as spec.md §4.7 names them rather than folding them
//! into a more "elegant" shape, since the spec's error messages and edge
//! cases are defined in terms of those two values.

use crate::ast::*;
use crate::error::ParseError;
use crate::parser::{ExprState, ParserContext};
use crate::token::TokenKind;

pub(super) fn parse_bracketed_object(p: &mut ParserContext) -> Result<Expression, ParseError> {
    let lbrace = p.expect(TokenKind::LBrace, "{")?;
    let floor = p.indent_stack.top();
    let mut last_indent = floor;
    if p.peek_newline() {
        let landed = p.move_to_next_line(true)?;
        if landed < last_indent {
            return Err(ParseError::MissingIndent { span: p.peek().span });
        }
        last_indent = landed;
    }
    let properties = parse_object_body(p, &mut last_indent, floor, true)?;
    let rbrace = p.expect(TokenKind::RBrace, "}")?;
    if properties.is_empty() {
        return Err(ParseError::EmptyBlock {
            construct: "object literal",
            span: lbrace.span + rbrace.span,
        });
    }
    Ok(Expression::ObjectLiteral(ObjectLiteral {
        properties,
        span: lbrace.span + rbrace.span,
    }))
}

/// Speculative probe (§4.7): `IDENTIFIER | NUMBER | STRING` then `:`. Called
/// from `expression::parse_primary` only in contexts the spec allows one
/// to start (assignment RHS, call argument, object value) — callers gate on
/// `ExprState` before invoking this.
pub(super) fn probe_unbracketed_key(p: &ParserContext) -> bool {
    if !matches!(
        p.peek().kind,
        TokenKind::Identifier | TokenKind::Number | TokenKind::String
    ) {
        return false;
    }
    // A single lookahead token is enough here without mutating state: the
    // token right after the key, skipping only trivia, must be `:`.
    let mut idx = p.raw_pos();
    // Walk past the key itself plus any immediately-following trivia.
    // `ParserContext` doesn't expose raw token slices publicly beyond
    // `cursor()`, which is enough for a read-only scan.
    let cursor = p.cursor();
    // Skip to the key token first.
    while cursor.raw_at(idx).kind.is_trivia() {
        idx += 1;
    }
    idx += 1; // past the key token itself
    while cursor.raw_at(idx).kind.is_trivia() {
        idx += 1;
    }
    cursor.raw_at(idx).kind == TokenKind::Colon
}

pub(super) fn parse_unbracketed_object(
    p: &mut ParserContext,
    expr_indent: u32,
) -> Result<Expression, ParseError> {
    let floor = p.indent_stack.top();
    let mut last_indent = expr_indent;
    let start_span = p.peek().span;
    let properties = parse_object_body(p, &mut last_indent, floor, false)?;
    if properties.is_empty() {
        return Err(ParseError::EmptyBlock {
            construct: "object literal",
            span: start_span,
        });
    }
    let span = properties
        .iter()
        .fold(start_span, |acc, (_, v)| acc + v.span());
    Ok(Expression::ObjectLiteral(ObjectLiteral {
        properties,
        span,
    }))
}

type Properties = Vec<(ObjectKey, Expression)>;

fn parse_object_body(
    p: &mut ParserContext,
    last_indent: &mut u32,
    min_indent: u32,
    braced: bool,
) -> Result<Properties, ParseError> {
    let mut properties: Properties = Vec::new();

    loop {
        if braced && p.check(TokenKind::RBrace) {
            break;
        }
        if !matches!(
            p.peek().kind,
            TokenKind::Identifier | TokenKind::Number | TokenKind::String
        ) {
            break;
        }
        let key = parse_object_key(p)?;
        p.expect(TokenKind::Colon, ":")?;

        let mut value_state = ExprState::default();
        if p.peek_newline() {
            let landed = p.move_to_next_line(false)?;
            if landed <= *last_indent {
                return Err(ParseError::UnexpectedIndent { span: p.peek().span });
            }
            value_state.expr_indent = Some(landed);
        } else {
            value_state.expr_indent = Some(*last_indent);
        }
        let value = super::expression::parse_expression(p, value_state)?;
        properties.push((key, value));

        let comma_inline = p.eat(TokenKind::Comma).is_some();

        if !p.peek_newline() {
            if comma_inline {
                continue;
            }
            break;
        }

        let checkpoint = p.checkpoint();
        let landed = p.move_to_next_line(true)?;

        if landed < min_indent {
            if braced {
                return Err(ParseError::UnexpectedIndent { span: p.peek().span });
            }
            p.restore(checkpoint);
            break;
        }

        if !comma_inline && p.check(TokenKind::Comma) && landed < *last_indent {
            // A comma on its own line brings the working indent back
            // (§4.7): accept it as the new floor for subsequent pairs.
            *last_indent = landed;
            p.bump();
            if p.peek_newline() {
                p.move_to_next_line(true)?;
            }
            continue;
        }

        if landed > *last_indent {
            return Err(ParseError::UnexpectedIndent { span: p.peek().span });
        }
        if landed < *last_indent {
            if braced {
                return Err(ParseError::UnexpectedIndent { span: p.peek().span });
            }
            p.restore(checkpoint);
            break;
        }

        if !comma_inline {
            p.eat(TokenKind::Comma);
        }
    }

    Ok(properties)
}

fn parse_object_key(p: &mut ParserContext) -> Result<ObjectKey, ParseError> {
    let tok = p.peek().clone();
    match tok.kind {
        TokenKind::Identifier => {
            p.bump();
            Ok(ObjectKey::Name(Identifier {
                name: tok.value,
                span: tok.span,
            }))
        }
        TokenKind::String => {
            p.bump();
            Ok(ObjectKey::String(StringLiteral {
                value: tok.value,
                span: tok.span,
            }))
        }
        TokenKind::Number => {
            p.bump();
            Ok(ObjectKey::Number(NumberLiteral {
                value: tok.value,
                span: tok.span,
            }))
        }
        _ => Err(ParseError::expected("an object key", &tok)),
    }
}
