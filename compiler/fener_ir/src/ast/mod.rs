//! AST node types.
//!
//! Statements and expressions are closed enums over payload structs. Every
//! payload keeps the token that introduced it for diagnostics.
//!
//! # Sharing
//!
//! `FunctionLiteral` is held behind `Rc` in both `FunctionStatement` and
//! `Lambda`. A runtime function value clones that `Rc`, never the body.

mod display;
mod operators;

use std::rc::Rc;

use crate::Token;

pub use operators::{InfixOp, PrefixOp};

/// The compilation unit: an ordered list of top-level statements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Statement nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    Expression(ExpressionStatement),
    Return(ReturnStatement),
    While(WhileStatement),
    Function(FunctionStatement),
    Class(ClassStatement),
    Test(TestStatement),
}

impl Stmt {
    /// The token that introduced this statement.
    pub fn token(&self) -> &Token {
        match self {
            Stmt::Expression(s) => &s.token,
            Stmt::Return(s) => &s.token,
            Stmt::While(s) => &s.token,
            Stmt::Function(s) => &s.token,
            Stmt::Class(s) => &s.token,
            Stmt::Test(s) => &s.token,
        }
    }

    /// The wrapped expression, for expression statements.
    pub fn as_expression(&self) -> Option<&Expr> {
        match self {
            Stmt::Expression(s) => Some(&s.expression),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Expr,
}

/// A flat statement list. Blocks never introduce a scope of their own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub token: Token,
    pub statements: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhileStatement {
    pub token: Token,
    pub condition: Expr,
    pub body: Block,
}

/// Parameters and body shared by named functions and lambdas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: Block,
}

impl FunctionLiteral {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// `fn name(params) body end`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionStatement {
    pub token: Token,
    pub name: Identifier,
    pub literal: Rc<FunctionLiteral>,
}

/// `class Name methods end`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassStatement {
    pub token: Token,
    pub name: Identifier,
    pub methods: Vec<FunctionStatement>,
}

/// `test "label" body end`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestStatement {
    pub token: Token,
    pub label: String,
    pub body: Block,
}

/// Expression nodes.
///
/// Recursive payloads are boxed to keep `Expr` small.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Integer(IntegerLiteral),
    String(StringLiteral),
    Boolean(BooleanLiteral),
    Identifier(Identifier),
    Assignment(Box<AssignmentExpression>),
    Infix(Box<InfixExpression>),
    Prefix(Box<PrefixExpression>),
    Call(Box<CallExpression>),
    Index(Box<IndexExpression>),
    Field(Box<FieldExpression>),
    Array(ArrayLiteral),
    If(Box<IfExpression>),
    Lambda(Lambda),
}

impl Expr {
    /// The token that introduced this expression.
    pub fn token(&self) -> &Token {
        match self {
            Expr::Integer(e) => &e.token,
            Expr::String(e) => &e.token,
            Expr::Boolean(e) => &e.token,
            Expr::Identifier(e) => &e.token,
            Expr::Assignment(e) => &e.token,
            Expr::Infix(e) => &e.token,
            Expr::Prefix(e) => &e.token,
            Expr::Call(e) => &e.token,
            Expr::Index(e) => &e.token,
            Expr::Field(e) => &e.token,
            Expr::Array(e) => &e.token,
            Expr::If(e) => &e.token,
            Expr::Lambda(e) => &e.token,
        }
    }

    /// Node kind name, used in diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Expr::Integer(_) => "Integer",
            Expr::String(_) => "String",
            Expr::Boolean(_) => "Boolean",
            Expr::Identifier(_) => "Identifier",
            Expr::Assignment(_) => "AssignmentExpression",
            Expr::Infix(_) => "InfixExpression",
            Expr::Prefix(_) => "PrefixExpression",
            Expr::Call(_) => "CallExpression",
            Expr::Index(_) => "IndexExpression",
            Expr::Field(_) => "FieldExpression",
            Expr::Array(_) => "Array",
            Expr::If(_) => "IfExpression",
            Expr::Lambda(_) => "Lambda",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let name = token.text.clone();
        Identifier { token, name }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// The only shapes an assignment may write through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssignTarget {
    Identifier(Identifier),
    Field(FieldExpression),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentExpression {
    pub token: Token,
    pub target: AssignTarget,
    pub value: Expr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Expr,
    pub op: InfixOp,
    pub right: Expr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixExpression {
    pub token: Token,
    pub op: PrefixOp,
    pub right: Expr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallExpression {
    pub token: Token,
    pub callee: Expr,
    pub arguments: Vec<Expr>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexExpression {
    pub token: Token,
    pub left: Expr,
    pub index: Expr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldExpression {
    pub token: Token,
    pub target: Expr,
    pub field: Identifier,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayLiteral {
    pub token: Token,
    pub elements: Vec<Expr>,
}

/// One `elif cond then block` arm, kept in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElifClause {
    pub condition: Expr,
    pub block: Block,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Expr,
    pub consequence: Block,
    pub elifs: Vec<ElifClause>,
    pub alternative: Option<Block>,
}

/// `fn(params) body end` as a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lambda {
    pub token: Token,
    pub literal: Rc<FunctionLiteral>,
}
