//! Fener IR - tokens and syntax tree
//!
//! This crate contains the data structures shared by every stage of the
//! fener toolchain:
//! - Tokens and the pull-based `TokenStream` the parser consumes
//! - AST nodes (`Program`, `Stmt`, `Expr`, and their payloads)
//! - Operators and their source symbols
//!
//! # Design Philosophy
//!
//! - **Closed sums**: `Stmt` and `Expr` are exhaustive enums, so adding a
//!   node kind is a compile error in every consumer until it is handled.
//! - **Immutable trees**: nothing mutates an AST after the parser returns it.
//!   Function bodies sit behind `Rc` so runtime function values can share
//!   them without cloning.
//! - **Canonical rendering**: every node implements `Display` with a fully
//!   parenthesized form that tests compare against.

pub mod ast;
mod stream;
mod token;

pub use ast::{
    ArrayLiteral, AssignTarget, AssignmentExpression, Block, BooleanLiteral, CallExpression,
    ClassStatement, ElifClause, Expr, ExpressionStatement, FieldExpression, FunctionLiteral,
    FunctionStatement, Identifier, IfExpression, IndexExpression, InfixExpression, InfixOp,
    IntegerLiteral, Lambda, PrefixExpression, PrefixOp, Program, ReturnStatement, Stmt,
    StringLiteral, TestStatement, WhileStatement,
};
pub use stream::{TokenList, TokenStream};
pub use token::{Line, Token, TokenKind};
