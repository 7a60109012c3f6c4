//! Function literals (§4.11): `(params?) ("->"|"=>") body?`.

use crate::ast::*;
use crate::error::ParseError;
use crate::parser::{ExprState, ParserContext};
use crate::token::TokenKind;

/// Parses `(params)? ("->"|"=>") body?`. Called speculatively from
/// `expression::parse_primary` whenever a `(` could equally start a plain
/// grouped expression — failure (no `->`/`=>` after the parameter list)
/// lets the caller fall back to `call::parse_parens_expression`.
pub(super) fn parse_function(
    p: &mut ParserContext,
    params: Option<Vec<FunctionParam>>,
) -> Result<Expression, ParseError> {
    let (params, params_span) = match params {
        Some(params) => (params, None),
        None => {
            if p.check(TokenKind::LParen) {
                let (params, span) = parse_param_list(p)?;
                (params, Some(span))
            } else {
                (Vec::new(), None)
            }
        }
    };

    let arrow = p.expect(TokenKind::Func, "'->' or '=>'")?;
    let bind_this = &*arrow.value == "=>";

    let body = if p.peek_newline() {
        let block_indent = p.move_to_next_line(true)?;
        if p.eof || block_indent <= p.indent_stack.top() {
            Block {
                statements: Vec::new(),
                indent: p.indent_stack.top(),
                span: arrow.span,
            }
        } else {
            super::block::parse_nested_block(p, block_indent)?
        }
    } else if p.check(TokenKind::Eof) {
        Block {
            statements: Vec::new(),
            indent: p.indent_stack.top(),
            span: arrow.span,
        }
    } else {
        super::block::parse_inline_block(p, arrow.span)?
    };

    let span = params_span
        .map(|s| s + arrow.span)
        .unwrap_or(arrow.span)
        + body.span;
    Ok(Expression::Function(Function {
        params,
        body: Box::new(body),
        bind_this,
        span,
    }))
}

fn parse_param_list(
    p: &mut ParserContext,
) -> Result<(Vec<FunctionParam>, crate::span::Span), ParseError> {
    let lparen = p.expect(TokenKind::LParen, "(")?;
    let mut params = Vec::new();
    if p.peek_newline() {
        p.move_to_next_line(true)?;
    }
    if !p.check(TokenKind::RParen) {
        loop {
            params.push(parse_param(p)?);
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
    Ok((params, lparen.span + rparen.span))
}

fn parse_param(p: &mut ParserContext) -> Result<FunctionParam, ParseError> {
    let name_tok = p.expect(TokenKind::Identifier, "a parameter name")?;
    let name = Identifier {
        name: name_tok.value,
        span: name_tok.span,
    };

    if p.check(TokenKind::DotDotDot) {
        let dots = p.bump();
        return Ok(FunctionParam {
            span: name.span + dots.span,
            name,
            default: None,
            splat: true,
        });
    }

    if let Some(eq) = p.eat(TokenKind::AssignOperator).filter(|t| &*t.value == "=") {
        let default = super::expression::parse_expression(p, ExprState::default())?;
        let span = name.span + eq.span + default.span();
        return Ok(FunctionParam {
            span,
            name,
            default: Some(default),
            splat: false,
        });
    }

    Ok(FunctionParam {
        span: name.span,
        name,
        default: None,
        splat: false,
    })
}
