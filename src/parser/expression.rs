//! Expression parsing: unary/binary disambiguation (§4.4), Pratt precedence
//! (§4.5), assignment (§4.6), and the primary/postfix chain that calls,
//! property access, object literals, and control-flow expressions hang off
//! of.
//!
//! The teacher's `parser/expression.rs` walks a fixed `parse_primary_expression`
//! → `parse_conditional_expression` → `parse_binary_expression` ladder with one
//! function per precedence tier. This grammar's priorities are data (a table
//! keyed by operator spelling), so precedence climbing replaces the ladder —
//! same recursive-descent shape, table-driven instead of tier-per-function.

use crate::ast::*;
use crate::error::ParseError;
use crate::parser::{ExprState, ParserContext};
use crate::token::{Token, TokenKind};

pub fn parse_expression(p: &mut ParserContext, state: ExprState) -> Result<Expression, ParseError> {
    let mut expr = parse_expression_core(p, state)?;
    // Postfix comprehension (§3.2 `ForExpression2`, §4.10): `expr for x in
    // xs`. Suppressed in implicit-call-argument position (§4.3.2(c)):
    // `foo x for x in arr` is `foo(x) for x in arr`, not an argument that
    // is itself a comprehension. Looped, left-associatively, so a chain
    // like `x for x in xs for xs in list` reads as `(x for x in xs) for xs
    // in list` rather than the `for`'s iterable swallowing the next one.
    while !state.implicit_fcall_arg && p.check(TokenKind::For) {
        expr = super::statement::parse_for(p, Some(expr))?;
    }
    Ok(expr)
}

/// `parse_expression` minus the trailing postfix-`for` absorption — used by
/// `statement::parse_for` to parse `iter1`/`iter2`/`iterable` without those
/// sub-expressions themselves eagerly consuming a `for` that belongs to an
/// enclosing comprehension.
pub(crate) fn parse_expression_core(
    p: &mut ParserContext,
    state: ExprState,
) -> Result<Expression, ParseError> {
    let target = parse_binary(p, state, 0)?;
    parse_assignment_tail(p, state, target)
}

fn parse_assignment_tail(
    p: &mut ParserContext,
    state: ExprState,
    target: Expression,
) -> Result<Expression, ParseError> {
    if p.check(TokenKind::AssignOperator) && target.is_lvalue() {
        let op_tok = p.bump();
        let mut rhs_state = state;
        if p.peek_newline() {
            let indent = p.move_to_next_line(false)?;
            if indent >= p.indent_stack.top() {
                rhs_state.expr_indent = Some(indent);
            }
        }
        // Right-associative (spec.md §4.6's open question, resolved in
        // DESIGN.md): the value itself may be another assignment.
        let value = parse_expression(p, rhs_state)?;
        let span = target.span() + value.span();
        return Ok(Expression::Assign(Assign {
            operator: op_tok.value,
            target: Box::new(target),
            value: Box::new(value),
            span,
        }));
    }
    Ok(target)
}

/// Operator priority table (spec.md §4.5, with the open-question bitwise/
/// shift priorities resolved per DESIGN.md). Higher binds tighter.
fn binary_operator(token: &Token) -> Option<(BinaryOperator, u32)> {
    use BinaryOperator::*;
    match token.kind {
        TokenKind::If => Some((If, 1)),
        TokenKind::Unless => Some((Unless, 1)),
        TokenKind::Operator => match &*token.value {
            "is" => Some((Is, 10)),
            "isnt" => Some((IsNot, 10)),
            "==" => Some((Eq, 10)),
            "!=" => Some((NotEq, 10)),
            ">=" => Some((GtEq, 10)),
            "<=" => Some((LtEq, 10)),
            ">" => Some((Gt, 10)),
            "<" => Some((Lt, 10)),
            "|" => Some((BitOr, 8)),
            "^" => Some((BitXor, 8)),
            "&" => Some((BitAnd, 8)),
            "<<" => Some((ShiftLeft, 75)),
            ">>" => Some((ShiftRight, 75)),
            ">>>" => Some((UnsignedShiftRight, 75)),
            "+" => Some((Add, 50)),
            "-" => Some((Sub, 50)),
            "*" => Some((Mul, 100)),
            "/" => Some((Div, 100)),
            _ => None,
        },
        _ => None,
    }
}

/// Standard precedence climbing: `left` accumulates a left-leaning tree,
/// rebuilt tighter on the right whenever the next operator outranks
/// `min_priority` — the in-place rotation spec.md §4.5 describes.
fn parse_binary(
    p: &mut ParserContext,
    state: ExprState,
    min_priority: u32,
) -> Result<Expression, ParseError> {
    let mut left = parse_unary(p, state)?;

    // A postfix `if`/`unless` is suppressed while collecting an implicit
    // call's arguments (§4.3.2(a)): `foo x if y` is `foo(x) if y`, not
    // `foo(x if y)`.
    loop {
        let tok = p.peek().clone();
        let Some((op, priority)) = binary_operator(&tok) else {
            break;
        };
        if priority < min_priority {
            break;
        }
        if state.implicit_fcall_arg && matches!(op, BinaryOperator::If | BinaryOperator::Unless) {
            break;
        }
        p.bump();
        let right = parse_binary(p, state, priority + 1)?;
        let span = left.span() + right.span();
        left = Expression::BinaryExpression(BinaryExpression {
            operator: op,
            left: Box::new(left),
            right: Box::new(right),
            span,
        });
    }
    Ok(left)
}

fn prefix_operator(token: &Token) -> Option<PrefixOperator> {
    match token.kind {
        TokenKind::Unary if &*token.value == "++" => Some(PrefixOperator::Increment),
        TokenKind::Unary if &*token.value == "--" => Some(PrefixOperator::Decrement),
        TokenKind::UnaryMath if &*token.value == "!" => Some(PrefixOperator::Not),
        TokenKind::UnaryMath if &*token.value == "~" => Some(PrefixOperator::BitNot),
        TokenKind::Operator if &*token.value == "+" => Some(PrefixOperator::Plus),
        TokenKind::Operator if &*token.value == "-" => Some(PrefixOperator::Neg),
        _ => None,
    }
}

/// Prefix unary (§4.4). In `implicit_fcall_arg` context, `+`/`-` bind as a
/// prefix only with no whitespace before the operand — `foo -2` is
/// `foo(-2)`, but `foo - 2` is never read as `foo(-2)` (§4.3.2(b)); this
/// function soft-fails so the implicit-call attempt that's probing for an
/// argument backs out and the whole thing is re-read as a binary `-`.
fn parse_unary(p: &mut ParserContext, state: ExprState) -> Result<Expression, ParseError> {
    let tok = p.peek().clone();
    let Some(op) = prefix_operator(&tok) else {
        return parse_postfix(p, state);
    };

    let space_sensitive = state.implicit_fcall_arg && tok.kind == TokenKind::Operator;
    p.bump();
    if space_sensitive && p.peek_space() {
        return Err(ParseError::unexpected(&tok));
    }
    if p.peek_newline() {
        p.move_to_next_line(false)?;
    }
    let argument = parse_unary(p, state)?;
    let span = tok.span + argument.span();
    Ok(Expression::PrefixUnaryExpression(PrefixUnaryExpression {
        operator: op,
        argument: Box::new(argument),
        span,
    }))
}

/// Primary expression plus its postfix chain: property access (`.member`,
/// `::member`), calls (delegated to [`crate::parser::call`]), and a
/// directly-adjacent postfix `++`/`--` (§4.4: no whitespace permitted
/// before it).
fn parse_postfix(p: &mut ParserContext, state: ExprState) -> Result<Expression, ParseError> {
    let mut expr = parse_primary(p, state)?;

    loop {
        if p.check(TokenKind::Dot) {
            p.bump();
            let name = parse_member_name(p)?;
            let span = expr.span() + name.span;
            expr = Expression::PropertyAccess(PropertyAccess {
                object: Box::new(expr),
                member: name,
                prototype: false,
                span,
            });
            continue;
        }
        if let Some(new_expr) = try_prototype_access(p, &expr)? {
            expr = new_expr;
            continue;
        }
        if let Some(new_expr) = crate::parser::call::try_call(p, state, expr.clone())? {
            expr = new_expr;
            continue;
        }
        break;
    }

    if !p.peek_space() && p.check(TokenKind::Unary) {
        let op_tok = p.bump();
        let op = match &*op_tok.value {
            "++" => PostfixOperator::Increment,
            "--" => PostfixOperator::Decrement,
            _ => return Err(ParseError::unexpected(&op_tok)),
        };
        let span = expr.span() + op_tok.span;
        expr = Expression::PostfixUnaryExpression(PostfixUnaryExpression {
            operator: op,
            argument: Box::new(expr),
            span,
        });
    }

    Ok(expr)
}

/// `a::b` / `@::b` (§9's prototype-access open question). The scanner has
/// no dedicated `::` literal (spec.md §3.1's punctuation list doesn't carry
/// one), so this is two adjacent `:` tokens with no space between — probed
/// speculatively since a single `:` also starts an object-literal pair.
fn try_prototype_access(
    p: &mut ParserContext,
    object: &Expression,
) -> Result<Option<Expression>, ParseError> {
    if !p.check(TokenKind::Colon) {
        return Ok(None);
    }
    let checkpoint = p.checkpoint();
    let first = p.bump();
    if p.peek_space() || !p.check(TokenKind::Colon) {
        p.restore(checkpoint);
        return Ok(None);
    }
    p.bump();
    let name = parse_member_name(p)?;
    let span = object.span() + name.span + first.span;
    Ok(Some(Expression::PropertyAccess(PropertyAccess {
        object: Box::new(object.clone()),
        member: name,
        prototype: true,
        span,
    })))
}

fn parse_member_name(p: &mut ParserContext) -> Result<Identifier, ParseError> {
    let tok = p.expect(TokenKind::Identifier, "a member name")?;
    Ok(Identifier {
        name: tok.value,
        span: tok.span,
    })
}

fn parse_primary(p: &mut ParserContext, state: ExprState) -> Result<Expression, ParseError> {
    // Unbracketed object literals may only open where the spec names:
    // assignment RHS / call argument / object value, all of which arrive
    // here with `expr_indent` set, or inside an implicit call's arguments.
    if (state.expr_indent.is_some() || state.implicit_fcall_arg)
        && crate::parser::object::probe_unbracketed_key(p)
    {
        let indent = state.expr_indent.unwrap_or(p.indent_stack.top());
        if let Some(obj) = p.speculate(|p| crate::parser::object::parse_unbracketed_object(p, indent)) {
            return Ok(obj);
        }
    }

    let tok = p.peek().clone();
    match tok.kind {
        TokenKind::Number => {
            p.bump();
            Ok(Expression::Number(NumberLiteral {
                value: tok.value,
                span: tok.span,
            }))
        }
        TokenKind::String => {
            p.bump();
            Ok(Expression::StringLiteral(StringLiteral {
                value: tok.value,
                span: tok.span,
            }))
        }
        TokenKind::Identifier => {
            p.bump();
            Ok(Expression::Identifier(Identifier {
                name: tok.value,
                span: tok.span,
            }))
        }
        TokenKind::BuiltinPrimary => {
            p.bump();
            Ok(Expression::BuiltinPrimary(BuiltinPrimary {
                value: tok.value,
                span: tok.span,
            }))
        }
        TokenKind::ShortThis | TokenKind::LongThis => {
            p.bump();
            Ok(Expression::ThisExpression(ThisExpression {
                short: tok.kind == TokenKind::ShortThis,
                span: tok.span,
            }))
        }
        TokenKind::LParen => {
            // `(params) -> body` and a plain grouped expression both start
            // with `(`; try the function-literal reading first and fall
            // back to grouping (§4.9) if no `->`/`=>` follows the params.
            if let Some(func) = p.speculate(|p| crate::parser::function::parse_function(p, None)) {
                Ok(func)
            } else {
                crate::parser::call::parse_parens_expression(p)
            }
        }
        TokenKind::Func => crate::parser::function::parse_function(p, None),
        TokenKind::LBrace => crate::parser::object::parse_bracketed_object(p),
        TokenKind::If | TokenKind::Unless => crate::parser::statement::parse_if(p, state),
        TokenKind::Loop | TokenKind::Until => crate::parser::statement::parse_loop(p),
        TokenKind::For => crate::parser::statement::parse_for(p, None),
        _ => Err(ParseError::unexpected(&tok)),
    }
}

/// Wraps a fully-parsed argument expression in a [`SplatExpression`] if
/// immediately followed by `...` (§4.8: "Any argument may have a trailing
/// `...` making it a splat").
pub(crate) fn maybe_splat(p: &mut ParserContext, expr: Expression) -> Expression {
    if p.check(TokenKind::DotDotDot) {
        let tok = p.bump();
        let span = expr.span() + tok.span;
        Expression::SplatExpression(Box::new(expr), span)
    } else {
        expr
    }
}

