//! Canonical re-emission (spec.md §3.2, §6, §8.2).
//!
//! The teacher has no full-tree pretty-printer to ground this on — Leo's
//! `Display` impls cover tokens and diagnostics, never a whole AST — so this
//! module is new, shaped directly by spec.md §8.2's literal expected strings
//! rather than adapted from an existing printer. `emit` is the one format;
//! `debug_emit_common` is the same function under the name spec.md §6 and
//! §8.1 use for it, kept as a separate public name since downstream test
//! code is written against that name as a test oracle.

use crate::ast::*;

/// Re-emits a parsed [`Block`] as the canonical bracket-annotated string
/// spec.md §8.2's scenarios are defined in terms of.
pub fn emit(block: &Block) -> String {
    emit_statements(&block.statements)
}

/// Alias for [`emit`] under the name spec.md §6/§8.1 use for the normalized
/// form its round-trip and idempotence properties are checked against.
pub fn debug_emit_common(block: &Block) -> String {
    emit(block)
}

fn emit_statements(statements: &[Statement]) -> String {
    statements
        .iter()
        .map(emit_statement)
        .collect::<Vec<_>>()
        .join(";")
}

fn emit_statement(statement: &Statement) -> String {
    match statement {
        Statement::Expression(e) => emit_expr(e),
        Statement::Return(r) => match &r.argument {
            Some(value) => format!("return {}", emit_expr(value)),
            None => "return".to_string(),
        },
    }
}

fn emit_expr(expr: &Expression) -> String {
    match expr {
        Expression::Number(n) => n.value.to_string(),
        Expression::StringLiteral(s) => s.value.to_string(),
        Expression::Identifier(i) => i.name.to_string(),
        Expression::BuiltinPrimary(b) => b.value.to_string(),
        Expression::ThisExpression(t) => if t.short { "@" } else { "this" }.to_string(),
        Expression::Parens(inner, _) => format!("({})", emit_expr(inner)),
        Expression::Block(b) => emit_statements(&b.statements),
        Expression::ObjectLiteral(o) => emit_object(o),
        Expression::Function(f) => emit_function(f),
        Expression::FunctionCall(c) => emit_call(c),
        Expression::PropertyAccess(p) => emit_property_access(p),
        Expression::SplatExpression(inner, _) => format!("{}...", emit_expr(inner)),
        Expression::BinaryExpression(b) => format!(
            "{} {} {}",
            emit_expr(&b.left),
            binary_operator_text(b.operator),
            emit_expr(&b.right)
        ),
        Expression::PrefixUnaryExpression(p) => {
            format!("{}{}", prefix_operator_text(p.operator), emit_expr(&p.argument))
        }
        Expression::PostfixUnaryExpression(p) => {
            format!("{}{}", emit_expr(&p.argument), postfix_operator_text(p.operator))
        }
        Expression::Assign(a) => format!(
            "{} {} {}",
            emit_expr(&a.target),
            a.operator,
            emit_expr(&a.value)
        ),
        Expression::IfExpression(i) => emit_if(i),
        Expression::LoopExpression(l) => emit_loop(l),
        Expression::ForExpression(f) => emit_for(f),
        Expression::ForExpression2(f) => format!("{} {}", emit_expr(&f.inner), emit_for(&f.loop_)),
    }
}

fn binary_operator_text(op: BinaryOperator) -> &'static str {
    use BinaryOperator::*;
    match op {
        If => "if",
        Unless => "unless",
        Is => "is",
        IsNot => "isnt",
        Eq => "==",
        NotEq => "!=",
        Gt => ">",
        Lt => "<",
        GtEq => ">=",
        LtEq => "<=",
        Add => "+",
        Sub => "-",
        Mul => "*",
        Div => "/",
        BitOr => "|",
        BitXor => "^",
        BitAnd => "&",
        ShiftLeft => "<<",
        ShiftRight => ">>",
        UnsignedShiftRight => ">>>",
    }
}

fn prefix_operator_text(op: PrefixOperator) -> &'static str {
    match op {
        PrefixOperator::Plus => "+",
        PrefixOperator::Neg => "-",
        PrefixOperator::Increment => "++",
        PrefixOperator::Decrement => "--",
        PrefixOperator::Not => "!",
        PrefixOperator::BitNot => "~",
    }
}

fn postfix_operator_text(op: PostfixOperator) -> &'static str {
    match op {
        PostfixOperator::Increment => "++",
        PostfixOperator::Decrement => "--",
    }
}

fn emit_property_access(p: &PropertyAccess) -> String {
    let sep = if p.prototype { "::" } else { "." };
    format!("{}{}{}", emit_expr(&p.object), sep, p.member.name)
}

fn emit_call(c: &FunctionCall) -> String {
    let args = c
        .arguments
        .iter()
        .map(emit_expr)
        .collect::<Vec<_>>()
        .join(",");
    format!("{}({})", emit_expr(&c.callee), args)
}

fn emit_object(o: &ObjectLiteral) -> String {
    let props = o
        .properties
        .iter()
        .map(|(key, value)| format!("{}: {}", object_key_text(key), emit_expr(value)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", props)
}

fn object_key_text(key: &ObjectKey) -> &str {
    match key {
        ObjectKey::Name(i) => &i.name,
        ObjectKey::String(s) => &s.value,
        ObjectKey::Number(n) => &n.value,
    }
}

fn emit_function(f: &Function) -> String {
    let params = f
        .params
        .iter()
        .map(emit_param)
        .collect::<Vec<_>>()
        .join(",");
    let arrow = if f.bind_this { "=>" } else { "->" };
    format!(
        "({}) {} {{{}}}",
        params,
        arrow,
        emit_statements(&f.body.statements)
    )
}

fn emit_param(param: &FunctionParam) -> String {
    if param.splat {
        format!("{}...", param.name.name)
    } else if let Some(default) = &param.default {
        format!("{}={}", param.name.name, emit_expr(default))
    } else {
        param.name.name.to_string()
    }
}

fn emit_if(i: &IfExpression) -> String {
    let head = if i.unless { "unless" } else { "if" };
    let mut out = format!(
        "{} ({}) {{ {} }}",
        head,
        emit_expr(&i.condition),
        emit_statements(&i.then_block.statements)
    );
    match &i.else_part {
        Some(ElsePart::Block(b)) => {
            out.push_str(&format!(" else {{ {} }}", emit_statements(&b.statements)));
        }
        Some(ElsePart::If(nested)) => {
            out.push_str(&format!(" else {}", emit_if(nested)));
        }
        None => {}
    }
    out
}

fn emit_loop(l: &LoopExpression) -> String {
    match &l.condition {
        Some(cond) => format!(
            "until ({}) {{ {} }}",
            emit_expr(cond),
            emit_statements(&l.body.statements)
        ),
        None => format!("loop {{ {} }}", emit_statements(&l.body.statements)),
    }
}

fn emit_for(f: &ForExpression) -> String {
    let mut out = format!("for {}", emit_expr(&f.iter1));
    if let Some(iter2) = &f.iter2 {
        out.push_str(&format!(", {}", emit_expr(iter2)));
    }
    out.push_str(if f.of { " of " } else { " in " });
    out.push_str(&emit_expr(&f.iterable));
    if let Some(body) = &f.body {
        out.push_str(&format!(" {{ {} }}", emit_statements(&body.statements)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_source(source: &str) -> String {
        emit(&crate::parse(source).unwrap())
    }

    #[test]
    fn arithmetic_precedence() {
        assert_eq!(emit_source("1 + 2 * 3"), "1 + 2 * 3");
    }

    #[test]
    fn parens_preserved() {
        assert_eq!(emit_source("(1 + 2) * 3"), "(1 + 2) * 3");
    }

    #[test]
    fn implicit_call_chain_with_prefix_and_binary_args() {
        assert_eq!(emit_source("foo +2, b +3 | 0"), "foo(+2,b(+3 | 0))");
    }

    #[test]
    fn function_literal_then_call_statement() {
        assert_eq!(
            emit_source("foo = () ->\n  hello()\nhi()"),
            "foo = () -> {hello()};hi()"
        );
    }

    #[test]
    fn nested_unbracketed_object_literal() {
        assert_eq!(
            emit_source("a =\n  hello :\n    world : 2\n  hi:\n    welt: 3"),
            "a = {hello: {world: 2}, hi: {welt: 3}}"
        );
    }

    #[test]
    fn chained_postfix_comprehension() {
        assert_eq!(
            emit_source("x for x in xs for xs in list"),
            "x for x in xs for xs in list"
        );
    }

    #[test]
    fn if_then_else() {
        assert_eq!(
            emit_source("if friday then jack else jill"),
            "if (friday) { jack } else { jill }"
        );
    }
}
