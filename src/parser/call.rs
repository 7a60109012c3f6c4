//! Function calls (§4.8) and parenthesized expressions (§4.9).
//!
//! `try_call` is one iteration of the "chained calls" loop spec.md §4.8
//! describes: given an already-parsed target, it recognizes at most one
//! parenthesized or implicit argument list and returns the wrapped call, or
//! `None` if neither applies (a normal, non-error stop condition — the
//! caller's loop in `expression::parse_postfix` just breaks).

use crate::ast::*;
use crate::error::ParseError;
use crate::parser::{ExprState, ParserContext};
use crate::token::TokenKind;
use smallvec::SmallVec;

/// A function-call target per §4.8: an identifier, an `@name`/`this`
/// property access, a parenthesized expression, or (as a natural extension
/// of the same rule — see DESIGN.md) a property-access chain built from one.
/// A bare number, string, or other primary is never a target.
fn is_call_target(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::Identifier(_)
            | Expression::ThisExpression(_)
            | Expression::Parens(_, _)
            | Expression::PropertyAccess(_)
    )
}

pub(super) fn try_call(
    p: &mut ParserContext,
    state: ExprState,
    target: Expression,
) -> Result<Option<Expression>, ParseError> {
    if !is_call_target(&target) {
        return Ok(None);
    }
    // A space before `(` (spec.md:102) rules out the direct-call reading —
    // `foo (x).y` is `foo((x).y)` via the implicit-arg path below, not
    // `foo(x).y` (the call's own arg list, postfix-chained afterward).
    if !p.peek_space() && p.check(TokenKind::LParen) {
        return Ok(Some(parse_parenthesized_args(p, target)?));
    }
    if p.peek_space() && starts_implicit_argument(p) {
        return Ok(p.speculate(|p| parse_implicit_args(p, state, target.clone())));
    }
    Ok(None)
}

/// A crude "does an argument start here" lookahead: anything that can begin
/// a primary, minus tokens that would make `target NEXT` ambiguous with a
/// binary continuation (handled instead by `expression::parse_unary`'s
/// whitespace carve-out once we're committed to the attempt).
fn starts_implicit_argument(p: &ParserContext) -> bool {
    matches!(
        p.peek().kind,
        TokenKind::Number
            | TokenKind::String
            | TokenKind::Identifier
            | TokenKind::BuiltinPrimary
            | TokenKind::ShortThis
            | TokenKind::LongThis
            | TokenKind::LParen
            | TokenKind::LBrace
            | TokenKind::Func
            | TokenKind::Unary
            | TokenKind::UnaryMath
            | TokenKind::Operator
            | TokenKind::If
            | TokenKind::Unless
            | TokenKind::Loop
            | TokenKind::Until
    )
}

fn parse_parenthesized_args(
    p: &mut ParserContext,
    target: Expression,
) -> Result<Expression, ParseError> {
    let lparen = p.expect(TokenKind::LParen, "(")?;
    p.in_parens += 1;
    let mut arguments = SmallVec::new();
    if p.peek_newline() {
        p.move_to_next_line(true)?;
    }
    if !p.check(TokenKind::RParen) {
        loop {
            let arg = super::expression::parse_expression(p, ExprState::default())?;
            arguments.push(super::expression::maybe_splat(p, arg));
            if p.peek_newline() {
                p.move_to_next_line(true)?;
            }
            if p.eat(TokenKind::Comma).is_some() {
                if p.peek_newline() {
                    p.move_to_next_line(true)?;
                }
                continue;
            }
            break;
        }
    }
    let rparen = p.expect(TokenKind::RParen, ")")?;
    p.in_parens -= 1;
    let span = target.span() + rparen.span;
    let _ = lparen;
    Ok(Expression::FunctionCall(FunctionCall {
        callee: Box::new(target),
        arguments,
        span,
    }))
}

/// Implicit (parenthesis-less) argument list (§4.8). Requires whitespace
/// before the first argument (checked by the caller) and threads
/// `implicit_fcall_arg` into every argument's expression parse.
fn parse_implicit_args(
    p: &mut ParserContext,
    _state: ExprState,
    target: Expression,
) -> Result<Expression, ParseError> {
    let arg_state = ExprState {
        implicit_fcall_arg: true,
        ..ExprState::default()
    };

    let first = super::expression::parse_expression(p, arg_state)?;
    let mut arguments: SmallVec<[Expression; 4]> = SmallVec::new();
    arguments.push(super::expression::maybe_splat(p, first));

    if !p.check(TokenKind::Comma) {
        let span = target.span() + arguments.last().unwrap().span();
        return Ok(Expression::FunctionCall(FunctionCall {
            callee: Box::new(target),
            arguments,
            span,
        }));
    }

    let block_indent = p.indent_stack.top();
    let mut imp_block_indent: Option<u32> = None;

    loop {
        p.bump(); // the comma
        if p.peek_newline() {
            let landed = p.move_to_next_line(false)?;
            if landed < block_indent {
                return Err(ParseError::MissingIndent { span: p.peek().span });
            }
        }
        let arg = super::expression::parse_expression(p, arg_state)?;
        arguments.push(super::expression::maybe_splat(p, arg));

        if !p.peek_newline() {
            if p.check(TokenKind::Comma) {
                continue;
            }
            break;
        }

        let checkpoint = p.checkpoint();
        let landed = p.move_to_next_line(true)?;
        let still_open = match imp_block_indent {
            None => landed > block_indent,
            Some(floor) => landed > floor,
        };
        if !still_open {
            p.restore(checkpoint);
            break;
        }
        if imp_block_indent.is_none() {
            imp_block_indent = Some(landed);
        }
        if !p.check(TokenKind::Comma) {
            break;
        }
    }

    let span = target.span() + arguments.last().unwrap().span();
    Ok(Expression::FunctionCall(FunctionCall {
        callee: Box::new(target),
        arguments,
        span,
    }))
}

/// `(` as a primary: a grouped expression (§4.9), with the "parenthesized
/// call" backtrack — if the inner expression doesn't land on `)` while
/// we're in the middle of recognizing *this* parenthesized form as some
/// outer call's target (`in_f_call > 0`), soft-fail so the caller can
/// re-enter and read the whole `(...)` as a parenthesized expression whose
/// inner content is itself a (possibly implicit-call-bearing) expression.
pub(super) fn parse_parens_expression(p: &mut ParserContext) -> Result<Expression, ParseError> {
    let lparen = p.expect(TokenKind::LParen, "(")?;
    p.in_parens += 1;
    let was_f_call = p.in_f_call;
    p.in_f_call += 1;
    let inner_result = (|| -> Result<Expression, ParseError> {
        if p.peek_newline() {
            p.move_to_next_line(true)?;
        }
        super::expression::parse_expression(p, ExprState::default())
    })();
    p.in_f_call = was_f_call;

    let inner = match inner_result {
        Ok(inner) => inner,
        Err(err) => {
            p.in_parens -= 1;
            return Err(err);
        }
    };

    if p.peek_newline() {
        p.move_to_next_line(true)?;
    }

    if !p.check(TokenKind::RParen) && was_f_call > 0 {
        p.in_parens -= 1;
        return Err(ParseError::unexpected(p.peek()));
    }

    let rparen = p.expect(TokenKind::RParen, ")")?;
    p.in_parens -= 1;
    let span = lparen.span + rparen.span;
    Ok(Expression::Parens(Box::new(inner), span))
}
