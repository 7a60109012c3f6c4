//! The abstract syntax tree (spec.md §3.2).
//!
//! The teacher represents expressions as a trait-object hierarchy
//! (`Box<dyn ExpressionNode>` wrapping per-kind structs gathered into an
//! `Expression` enum in `leo-ast`). Since that crate's source isn't part of
//! this workspace (see DESIGN.md), this follows the same tagged-variant
//! shape directly: one `Expression` enum, one `Statement` enum, boxing only
//! where a variant would otherwise be self-referential.

use crate::span::Span;
use smallvec::SmallVec;

/// A sequence of statements, in source order. The unit produced by parsing
/// the root source, and by any nested indented block (spec.md §3.2, §4.12).
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub indent: u32,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Expression(Expression),
    Return(ReturnStatement),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReturnStatement {
    pub argument: Option<Box<Expression>>,
    pub span: Span,
}

/// Binary operators, spec.md §4.5's precedence table plus the postfix
/// `if`/`unless` forms (§4.10, priority 1). Limited to the operators the
/// scanner's common table (`scanner::tables`) actually produces — no
/// `&&`/`||`, no `%`, no bracket indexing: the source grammar doesn't define
/// them (array literals and friends are an explicit TODO, spec.md §9).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    If,
    Unless,
    Is,
    IsNot,
    Eq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,
    Add,
    Sub,
    Mul,
    Div,
    BitOr,
    BitXor,
    BitAnd,
    ShiftLeft,
    ShiftRight,
    UnsignedShiftRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixOperator {
    Plus,
    Neg,
    Increment,
    Decrement,
    Not,
    BitNot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostfixOperator {
    Increment,
    Decrement,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Number(NumberLiteral),
    StringLiteral(StringLiteral),
    Identifier(Identifier),
    BuiltinPrimary(BuiltinPrimary),
    ThisExpression(ThisExpression),
    Parens(Box<Expression>, Span),
    Block(Box<Block>),
    ObjectLiteral(ObjectLiteral),
    Function(Function),
    FunctionCall(FunctionCall),
    PropertyAccess(PropertyAccess),
    SplatExpression(Box<Expression>, Span),
    BinaryExpression(BinaryExpression),
    PrefixUnaryExpression(PrefixUnaryExpression),
    PostfixUnaryExpression(PostfixUnaryExpression),
    Assign(Assign),
    IfExpression(IfExpression),
    LoopExpression(LoopExpression),
    ForExpression(ForExpression),
    ForExpression2(ForExpression2),
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::Number(n) => n.span,
            Expression::StringLiteral(s) => s.span,
            Expression::Identifier(i) => i.span,
            Expression::BuiltinPrimary(b) => b.span,
            Expression::ThisExpression(t) => t.span,
            Expression::Parens(_, span) => *span,
            Expression::Block(b) => b.span,
            Expression::ObjectLiteral(o) => o.span,
            Expression::Function(f) => f.span,
            Expression::FunctionCall(f) => f.span,
            Expression::PropertyAccess(p) => p.span,
            Expression::SplatExpression(_, span) => *span,
            Expression::BinaryExpression(b) => b.span,
            Expression::PrefixUnaryExpression(p) => p.span,
            Expression::PostfixUnaryExpression(p) => p.span,
            Expression::Assign(a) => a.span,
            Expression::IfExpression(i) => i.span,
            Expression::LoopExpression(l) => l.span,
            Expression::ForExpression(f) => f.span,
            Expression::ForExpression2(f) => f.span,
        }
    }

    /// Whether this expression is a left-hand value: an `Identifier` or an
    /// `@name` property access (spec.md §4.6, §4.10's `iter1`/`iter2`
    /// restriction, §4.8's call-target restriction).
    pub fn is_lvalue(&self) -> bool {
        matches!(self, Expression::Identifier(_))
            || matches!(
                self,
                Expression::PropertyAccess(p) if matches!(&*p.object, Expression::ThisExpression(_))
            )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NumberLiteral {
    pub value: Box<str>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StringLiteral {
    pub value: Box<str>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Identifier {
    pub name: Box<str>,
    pub span: Span,
}

/// `true`, `false`, `null`, `undefined` — spec.md §3.2's fixed-word
/// primaries, kept distinct from `Identifier` since they never resolve to a
/// binding.
#[derive(Clone, Debug, PartialEq)]
pub struct BuiltinPrimary {
    pub value: Box<str>,
    pub span: Span,
}

/// `this` or `@`, spec.md §4.6. `short` records which spelling was used,
/// purely for round-trip-faithful pretty-printing; it has no effect on
/// evaluation semantics.
#[derive(Clone, Debug, PartialEq)]
pub struct ThisExpression {
    pub short: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrefixUnaryExpression {
    pub operator: PrefixOperator,
    pub argument: Box<Expression>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PostfixUnaryExpression {
    pub operator: PostfixOperator,
    pub argument: Box<Expression>,
    pub span: Span,
}

/// Assignment, spec.md §4.6. `operator` carries the `ASSIGN_OPERATOR`
/// token's exact spelling (`"="`, `"+="`, ...) rather than a closed enum,
/// since every such token is legal here and there's no behavior keyed off
/// which one it is at this layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Assign {
    pub operator: Box<str>,
    pub target: Box<Expression>,
    pub value: Box<Expression>,
    pub span: Span,
}

/// `a.b`, `a::b` / `@::b` (spec.md §4.5's `PropertyAccess`, and §9's
/// prototype-access open question, resolved by the `prototype` flag rather
/// than a new variant — see DESIGN.md). `member` is always an identifier;
/// the source grammar has no computed (`a[b]`) member access.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyAccess {
    pub object: Box<Expression>,
    pub member: Identifier,
    pub prototype: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionCall {
    pub callee: Box<Expression>,
    pub arguments: SmallVec<[Expression; 4]>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionParam {
    pub name: Identifier,
    pub default: Option<Expression>,
    pub splat: bool,
    pub span: Span,
}

/// `(params) -> body` / `(params) => body`, spec.md §4.11. `bind_this`
/// records whether the fat-arrow spelling was used.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub params: Vec<FunctionParam>,
    pub body: Box<Block>,
    pub bind_this: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ObjectKey {
    Name(Identifier),
    String(StringLiteral),
    Number(NumberLiteral),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectLiteral {
    /// An ordered sequence, not a map (spec.md §3.2): a repeated key
    /// (`{a: 1, a: 2}`) is two distinct pairs in source order, not one
    /// overwritten slot.
    pub properties: Vec<(ObjectKey, Expression)>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfExpression {
    pub unless: bool,
    pub condition: Box<Expression>,
    pub then_block: Box<Block>,
    pub else_part: Option<ElsePart>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ElsePart {
    Block(Box<Block>),
    If(Box<IfExpression>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoopExpression {
    pub until: bool,
    pub condition: Option<Box<Expression>>,
    pub body: Box<Block>,
    pub span: Span,
}

/// `for <iter1>[, <iter2>] (in|of) <iterable> [body]`, spec.md §4.10.
#[derive(Clone, Debug, PartialEq)]
pub struct ForExpression {
    pub iter1: Box<Expression>,
    pub iter2: Option<Box<Expression>>,
    pub of: bool,
    pub iterable: Box<Expression>,
    pub body: Option<Box<Block>>,
    pub span: Span,
}

/// Postfix comprehension form, spec.md §3.2: `inner` paired with a `for`
/// loop whose own `body` is absent (the loop's "body" is `inner` itself).
#[derive(Clone, Debug, PartialEq)]
pub struct ForExpression2 {
    pub inner: Box<Expression>,
    pub loop_: Box<ForExpression>,
    pub span: Span,
}
