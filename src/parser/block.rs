//! Blocks (§4.12) and statements (§4.13).
//!
//! Root and nested blocks share one body loop; they differ only in how
//! they decide to stop (§4.12's "Termination" bullet) and in what a
//! de-indent before the end of input means (fatal for the root, a normal
//! terminator for a nested block).

use crate::ast::*;
use crate::error::ParseError;
use crate::parser::{ExprState, ParserContext};
use crate::span::Span;
use crate::token::TokenKind;

pub fn parse_root_block(p: &mut ParserContext) -> Result<Block, ParseError> {
    let indent = if p.peek_newline() {
        p.move_to_next_line(true)?
    } else {
        0
    };
    p.indent_stack.push(indent);
    let start = p.peek().span;
    let statements = parse_statements(p)?;
    p.indent_stack.pop();

    if !p.eof && !p.check(TokenKind::Eof) {
        // A de-indent before end-of-input in the root block is fatal
        // (§4.12's last bullet) rather than a normal block terminator.
        return Err(ParseError::MissingIndentInRoot { span: p.peek().span });
    }

    let span = statements
        .last()
        .map(|s| start + statement_span(s))
        .unwrap_or(start);
    Ok(Block {
        statements,
        indent,
        span,
    })
}

pub(super) fn parse_nested_block(p: &mut ParserContext, indent: u32) -> Result<Block, ParseError> {
    let depth = p.indent_stack.depth();
    p.indent_stack.push(indent);
    let start = p.peek().span;
    let statements = parse_statements(p)?;
    p.indent_stack.truncate(depth);

    let span = statements
        .last()
        .map(|s| start + statement_span(s))
        .unwrap_or(start);
    Ok(Block {
        statements,
        indent,
        span,
    })
}

/// A same-line body for the `then`/inline forms (§4.10): one or more
/// `;`-separated statements with no newline between them.
pub(super) fn parse_inline_block(p: &mut ParserContext, at: Span) -> Result<Block, ParseError> {
    let mut statements = Vec::new();
    loop {
        if block_terminates_here(p) {
            break;
        }
        statements.push(parse_statement(p)?);
        if p.eat(TokenKind::Semicolon).is_some() {
            while p.eat(TokenKind::Semicolon).is_some() {}
            continue;
        }
        break;
    }
    let span = statements
        .last()
        .map(|s| at + statement_span(s))
        .unwrap_or(at);
    Ok(Block {
        statements,
        indent: p.indent_stack.top(),
        span,
    })
}

fn block_terminates_here(p: &ParserContext) -> bool {
    p.peek_newline()
        || p.check(TokenKind::Eof)
        || (p.in_parens > 0 && p.check(TokenKind::RParen))
        || p.check(TokenKind::Else)
}

/// The statement loop common to root and nested blocks (§4.12's "Body"
/// bullet): `statement (';' statement)*`, newline-separated otherwise,
/// until a termination condition is met.
fn parse_statements(p: &mut ParserContext) -> Result<Vec<Statement>, ParseError> {
    let mut statements = Vec::new();
    let block_indent = p.indent_stack.top();

    loop {
        if p.check(TokenKind::Semicolon) && statements.is_empty() {
            return Err(ParseError::unexpected(p.peek()));
        }

        if terminates_block(p) {
            break;
        }

        statements.push(parse_statement(p)?);

        if p.eat(TokenKind::Semicolon).is_some() {
            while p.eat(TokenKind::Semicolon).is_some() {}
            if terminates_block(p) {
                break;
            }
            if !p.peek_newline() {
                continue;
            }
        }

        if terminates_block(p) {
            break;
        }

        if !p.peek_newline() {
            return Err(ParseError::Leftover {
                found: p.peek().to_string(),
                span: p.peek().span,
            });
        }

        let checkpoint = p.checkpoint();
        let landed = p.move_to_next_line(true)?;
        if p.eof {
            break;
        }
        if landed < block_indent {
            p.restore(checkpoint);
            break;
        }
        if landed > block_indent {
            return Err(ParseError::UnexpectedIndent { span: p.peek().span });
        }
    }

    Ok(statements)
}

fn terminates_block(p: &ParserContext) -> bool {
    p.check(TokenKind::Eof)
        || p.eof
        || (p.in_parens > 0 && p.check(TokenKind::RParen))
        || p.check(TokenKind::Else)
}

fn parse_statement(p: &mut ParserContext) -> Result<Statement, ParseError> {
    if p.check(TokenKind::Return) {
        return super::statement::parse_return(p);
    }
    let expr = super::expression::parse_expression(p, ExprState::default())?;
    Ok(Statement::Expression(expr))
}

fn statement_span(statement: &Statement) -> Span {
    match statement {
        Statement::Expression(e) => e.span(),
        Statement::Return(r) => r.span,
    }
}
