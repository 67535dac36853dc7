//! Expression parsing.
//!
//! Every builder follows the same convention: on entry the cursor sits on
//! the builder's first token, and on success it has moved past the last
//! token of the expression. Infix builders receive the left operand that
//! has already been built.

use std::rc::Rc;

use fener_ir::{
    ArrayLiteral, AssignTarget, AssignmentExpression, BooleanLiteral, CallExpression, Expr,
    FieldExpression, FunctionLiteral, Identifier, IfExpression, IndexExpression,
    InfixExpression, InfixOp, IntegerLiteral, Lambda, PrefixExpression, PrefixOp,
    StringLiteral, TokenKind, TokenStream,
};
use fener_stack::ensure_sufficient_stack;

use crate::error;
use crate::recovery::{BLOCK_END, IF_BRANCH};
use crate::{Parser, Precedence};

impl<S: TokenStream> Parser<S> {
    /// Parse an expression whose operators all bind tighter than `min`.
    pub fn parse_expression(&mut self, min: Precedence) -> Option<Expr> {
        ensure_sufficient_stack(|| self.parse_expression_inner(min))
    }

    fn parse_expression_inner(&mut self, min: Precedence) -> Option<Expr> {
        let kind = self.cursor.current_kind();
        let Some(prefix) = self.prefix_fns.get(&kind).copied() else {
            let err = error::no_prefix_parser(self.cursor.current());
            self.push_error(err);
            self.cursor.advance();
            return None;
        };

        let mut left = prefix(self)?;

        while !self.cursor.is_at_end() && Precedence::of(self.cursor.current_kind()) > min {
            let kind = self.cursor.current_kind();
            // `(` or `[` opening a line starts the next statement.
            if matches!(kind, TokenKind::LParen | TokenKind::LBracket) && self.cursor.on_new_line() {
                break;
            }
            let Some(infix) = self.infix_fns.get(&kind).copied() else {
                return Some(left);
            };
            left = infix(self, left)?;
        }

        Some(left)
    }

    /// Comma-separated expressions up to and including `close`.
    ///
    /// The opening delimiter must already be consumed.
    fn parse_expression_list(&mut self, close: TokenKind) -> Option<Vec<Expr>> {
        let mut items = Vec::new();
        if self.cursor.check(close) {
            self.cursor.advance();
            return Some(items);
        }

        items.push(self.parse_expression(Precedence::Lowest)?);
        while self.cursor.check(TokenKind::Comma) {
            self.cursor.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }
        self.expect(close)?;
        Some(items)
    }

    // Prefix builders

    pub(crate) fn parse_identifier(&mut self) -> Option<Expr> {
        Some(Expr::Identifier(Identifier::new(self.cursor.advance())))
    }

    pub(crate) fn parse_integer(&mut self) -> Option<Expr> {
        let token = self.cursor.advance();
        let Ok(value) = token.text.parse::<i64>() else {
            self.push_error(error::invalid_integer(&token));
            return None;
        };
        Some(Expr::Integer(IntegerLiteral { token, value }))
    }

    pub(crate) fn parse_string(&mut self) -> Option<Expr> {
        let token = self.cursor.advance();
        let value = token.text.clone();
        Some(Expr::String(StringLiteral { token, value }))
    }

    pub(crate) fn parse_boolean(&mut self) -> Option<Expr> {
        let token = self.cursor.advance();
        let value = token.kind == TokenKind::True;
        Some(Expr::Boolean(BooleanLiteral { token, value }))
    }

    pub(crate) fn parse_prefix(&mut self) -> Option<Expr> {
        let token = self.cursor.advance();
        let op = PrefixOp::from_token(token.kind)?;
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix(Box::new(PrefixExpression { token, op, right })))
    }

    /// `( expr )`. Grouping leaves no node behind.
    pub(crate) fn parse_grouped(&mut self) -> Option<Expr> {
        self.cursor.advance();
        let inner = self.parse_expression(Precedence::Lowest)?;
        self.expect(TokenKind::RParen)?;
        Some(inner)
    }

    pub(crate) fn parse_array(&mut self) -> Option<Expr> {
        let token = self.cursor.advance();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expr::Array(ArrayLiteral { token, elements }))
    }

    /// `if cond then … (elif cond then …)* (else …)? end`
    pub(crate) fn parse_if(&mut self) -> Option<Expr> {
        let token = self.cursor.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect(TokenKind::Then)?;
        let consequence = self.parse_block(IF_BRANCH);

        let mut elifs = Vec::new();
        while self.cursor.check(TokenKind::Elif) {
            self.cursor.advance();
            let condition = self.parse_expression(Precedence::Lowest)?;
            self.expect(TokenKind::Then)?;
            let block = self.parse_block(IF_BRANCH);
            elifs.push(fener_ir::ElifClause { condition, block });
        }

        let alternative = if self.cursor.check(TokenKind::Else) {
            self.cursor.advance();
            Some(self.parse_block(BLOCK_END))
        } else {
            None
        };

        self.expect(TokenKind::End)?;
        Some(Expr::If(Box::new(IfExpression {
            token,
            condition,
            consequence,
            elifs,
            alternative,
        })))
    }

    /// `fn(params) body end`
    pub(crate) fn parse_lambda(&mut self) -> Option<Expr> {
        let token = self.cursor.advance();
        let literal = self.parse_function_literal()?;
        Some(Expr::Lambda(Lambda { token, literal }))
    }

    /// Parameter list, body and closing `end`, shared with named functions.
    pub(crate) fn parse_function_literal(&mut self) -> Option<Rc<FunctionLiteral>> {
        let parameters = self.parse_parameters()?;
        let body = self.parse_block(BLOCK_END);
        self.expect(TokenKind::End)?;
        Some(Rc::new(FunctionLiteral { parameters, body }))
    }

    fn parse_parameters(&mut self) -> Option<Vec<Identifier>> {
        self.expect(TokenKind::LParen)?;
        let mut parameters = Vec::new();
        if self.cursor.check(TokenKind::RParen) {
            self.cursor.advance();
            return Some(parameters);
        }

        parameters.push(self.expect_identifier()?);
        while self.cursor.check(TokenKind::Comma) {
            self.cursor.advance();
            parameters.push(self.expect_identifier()?);
        }
        self.expect(TokenKind::RParen)?;
        Some(parameters)
    }

    // Infix builders

    pub(crate) fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        let token = self.cursor.advance();
        let op = InfixOp::from_token(token.kind)?;
        let right = self.parse_expression(Precedence::of(token.kind))?;
        Some(Expr::Infix(Box::new(InfixExpression {
            token,
            left,
            op,
            right,
        })))
    }

    /// `target = value`
    ///
    /// The value is parsed at `Lowest`, so `a = b = 1` assigns right to
    /// left. The value is consumed even when the target is rejected.
    pub(crate) fn parse_assignment(&mut self, left: Expr) -> Option<Expr> {
        let token = self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;

        let target = match left {
            Expr::Identifier(ident) => AssignTarget::Identifier(ident),
            Expr::Field(field) => AssignTarget::Field(*field),
            other => {
                self.push_error(error::invalid_assignment_target(&other));
                return None;
            }
        };

        Some(Expr::Assignment(Box::new(AssignmentExpression {
            token,
            target,
            value,
        })))
    }

    pub(crate) fn parse_call(&mut self, callee: Expr) -> Option<Expr> {
        let token = self.cursor.advance();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expr::Call(Box::new(CallExpression {
            token,
            callee,
            arguments,
        })))
    }

    pub(crate) fn parse_index(&mut self, left: Expr) -> Option<Expr> {
        let token = self.cursor.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect(TokenKind::RBracket)?;
        Some(Expr::Index(Box::new(IndexExpression { token, left, index })))
    }

    pub(crate) fn parse_field(&mut self, target: Expr) -> Option<Expr> {
        let token = self.cursor.advance();
        let field = self.expect_identifier()?;
        Some(Expr::Field(Box::new(FieldExpression {
            token,
            target,
            field,
        })))
    }
}
