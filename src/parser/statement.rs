//! `if`/`unless`/`loop`/`until`/`for` (§4.10) and `return` (§4.13).
//!
//! All five admit a block form (newline + indented body) and a `then` form
//! (`then` + same-line body); both land in the same `Block` shape so the
//! rest of the parser never has to know which surface form was used.

use crate::ast::*;
use crate::error::ParseError;
use crate::parser::{ExprState, ParserContext};
use crate::token::TokenKind;

fn parse_body(p: &mut ParserContext, construct: &'static str) -> Result<Block, ParseError> {
    if p.eat(TokenKind::Then).is_some() {
        return super::block::parse_inline_block(p, p.peek().span);
    }
    if p.peek_newline() {
        let indent = p.move_to_next_line(true)?;
        if p.eof || indent <= p.indent_stack.top() {
            return Err(ParseError::EmptyBlock {
                construct,
                span: p.peek().span,
            });
        }
        return super::block::parse_nested_block(p, indent);
    }
    Err(ParseError::EmptyBlock {
        construct,
        span: p.peek().span,
    })
}

/// `if cond then body [else (body|ifExpr)]` / `unless cond ...` (§4.10).
/// Also reached as a primary, since `IfExpression` is embeddable.
pub(super) fn parse_if(p: &mut ParserContext, state: ExprState) -> Result<Expression, ParseError> {
    let head = p.bump();
    let unless = head.kind == TokenKind::Unless;
    let construct = if unless { "unless" } else { "if" };

    let cond_state = ExprState {
        implicit_fcall_arg: false,
        ..state
    };
    let condition = super::expression::parse_expression(p, cond_state)?;

    // §4.10: an empty body is normally a hard error, except in
    // implicit-fcall-arg position, where this whole primary attempt is
    // already wrapped in `speculate` by the call-argument parser — an
    // `Err` here cleanly rewinds the construct into a postfix `if` instead.
    let then_block = parse_body(p, construct)?;

    let else_part = if p.check(TokenKind::Else) {
        p.bump();
        if p.check(TokenKind::If) || p.check(TokenKind::Unless) {
            let nested = parse_if(p, state)?;
            match nested {
                Expression::IfExpression(inner) => Some(ElsePart::If(Box::new(inner))),
                _ => unreachable!("parse_if always returns IfExpression"),
            }
        } else {
            let block = parse_body(p, "else")?;
            let part = ElsePart::Block(Box::new(block));
            if p.check(TokenKind::Else) {
                return Err(ParseError::unexpected(p.peek()));
            }
            Some(part)
        }
    } else {
        None
    };

    let span = head.span + else_part.as_ref().map(span_of_else).unwrap_or(then_block.span);
    Ok(Expression::IfExpression(IfExpression {
        unless,
        condition: Box::new(condition),
        then_block: Box::new(then_block),
        else_part,
        span,
    }))
}

fn span_of_else(part: &ElsePart) -> crate::span::Span {
    match part {
        ElsePart::Block(b) => b.span,
        ElsePart::If(i) => i.span,
    }
}

/// `loop body` / `until cond body` (§4.10). `LOOP` forbids a condition;
/// `UNTIL` requires one.
pub(super) fn parse_loop(p: &mut ParserContext) -> Result<Expression, ParseError> {
    let head = p.bump();
    let until = head.kind == TokenKind::Until;
    let condition = if until {
        Some(Box::new(super::expression::parse_expression(
            p,
            ExprState::default(),
        )?))
    } else {
        None
    };
    let construct = if until { "until" } else { "loop" };
    let body = parse_body(p, construct)?;
    let span = head.span + body.span;
    Ok(Expression::LoopExpression(LoopExpression {
        until,
        condition,
        body: Box::new(body),
        span,
    }))
}

/// `for <iter1>[, <iter2>] (in|of) <iterable> [then body | body]` (§4.10).
/// `inner` is `Some` when this is the `ForExpression2` postfix-comprehension
/// reading (`x for x in xs`): the loop's own body is then absent.
pub(super) fn parse_for(
    p: &mut ParserContext,
    inner: Option<Expression>,
) -> Result<Expression, ParseError> {
    let head = p.expect(TokenKind::For, "'for'")?;

    // `parse_expression_core` here, not `parse_expression`: these three
    // sub-expressions must not themselves absorb a trailing postfix `for`
    // that belongs to an enclosing comprehension (§3.2's left-associative
    // chaining, e.g. `x for x in xs for xs in list`).
    let iter1 = super::expression::parse_expression_core(p, ExprState::default())?;
    if !iter1.is_lvalue() {
        return Err(ParseError::expected("a left-hand value", p.peek()));
    }
    let iter2 = if p.eat(TokenKind::Comma).is_some() {
        let iter2 = super::expression::parse_expression_core(p, ExprState::default())?;
        if !iter2.is_lvalue() {
            return Err(ParseError::expected("a left-hand value", p.peek()));
        }
        Some(Box::new(iter2))
    } else {
        None
    };

    let of = if p.eat(TokenKind::In).is_some() {
        false
    } else if p.eat(TokenKind::Of).is_some() {
        true
    } else {
        return Err(ParseError::expected("'in' or 'of'", p.peek()));
    };

    let iterable = super::expression::parse_expression_core(p, ExprState::default())?;

    let (body, span) = match &inner {
        Some(inner_expr) => {
            let span = head.span + inner_expr.span() + iterable.span();
            (None, span)
        }
        None => {
            let body = parse_body(p, "for")?;
            let span = head.span + body.span;
            (Some(Box::new(body)), span)
        }
    };

    let loop_ = ForExpression {
        iter1: Box::new(iter1),
        iter2,
        of,
        iterable: Box::new(iterable),
        body,
        span,
    };

    match inner {
        Some(inner_expr) => {
            let span = inner_expr.span() + loop_.span;
            Ok(Expression::ForExpression2(ForExpression2 {
                inner: Box::new(inner_expr),
                loop_: Box::new(loop_),
                span,
            }))
        }
        None => Ok(Expression::ForExpression(loop_)),
    }
}

/// `return [expr]` (§4.13).
pub(super) fn parse_return(p: &mut ParserContext) -> Result<Statement, ParseError> {
    let head = p.expect(TokenKind::Return, "'return'")?;
    let can_have_argument = !p.peek_newline()
        && !p.check(TokenKind::Semicolon)
        && !p.check(TokenKind::Eof)
        && !(p.in_parens > 0 && p.check(TokenKind::RParen));
    let argument = if can_have_argument {
        Some(Box::new(super::expression::parse_expression(
            p,
            ExprState::default(),
        )?))
    } else {
        None
    };
    let span = argument.as_ref().map(|a| head.span + a.span()).unwrap_or(head.span);
    Ok(Statement::Return(ReturnStatement { argument, span }))
}
