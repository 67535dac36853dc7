//! Statement parsing.

use fener_ir::{
    Block, ClassStatement, ExpressionStatement, FunctionStatement, Identifier, ReturnStatement,
    Stmt, TestStatement, TokenKind, TokenStream, WhileStatement,
};
use fener_stack::ensure_sufficient_stack;

use crate::error;
use crate::recovery::{synchronize, TokenSet, BLOCK_END, CLASS_MEMBER};
use crate::{Parser, Precedence};

impl<S: TokenStream> Parser<S> {
    /// Parse one statement.
    ///
    /// `return`, `while`, `test`, `class` and named `fn` have their own
    /// productions; anything else is an expression statement. `fn` followed
    /// by `(` is a lambda and goes down the expression path.
    pub fn parse_statement(&mut self) -> Option<Stmt> {
        match self.cursor.current_kind() {
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::Test => self.parse_test_statement(),
            TokenKind::Class => self.parse_class_statement(),
            TokenKind::Fn if self.cursor.peek_kind() == TokenKind::Ident => {
                self.parse_function_statement().map(Stmt::Function)
            }
            _ => self.parse_expression_statement(),
        }
    }

    /// Statements up to, but not including, a token in `terminators`.
    ///
    /// Malformed statements are dropped after their errors are recorded.
    pub fn parse_block(&mut self, terminators: TokenSet) -> Block {
        ensure_sufficient_stack(|| {
            let token = self.cursor.current().clone();
            let mut statements = Vec::new();
            while !self.cursor.is_at_end() && !terminators.contains(self.cursor.current_kind()) {
                let before = self.cursor.consumed();
                match self.parse_statement() {
                    Some(stmt) => statements.push(stmt),
                    None => self.ensure_progress(before),
                }
            }
            Block { token, statements }
        })
    }

    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let token = self.cursor.current().clone();
        let expression = self.parse_expression(Precedence::Lowest)?;
        Some(Stmt::Expression(ExpressionStatement { token, expression }))
    }

    fn parse_return_statement(&mut self) -> Option<Stmt> {
        let token = self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        Some(Stmt::Return(ReturnStatement { token, value }))
    }

    /// `while cond then body end`
    fn parse_while_statement(&mut self) -> Option<Stmt> {
        let token = self.cursor.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect(TokenKind::Then)?;
        let body = self.parse_block(BLOCK_END);
        self.expect(TokenKind::End)?;
        Some(Stmt::While(WhileStatement {
            token,
            condition,
            body,
        }))
    }

    /// `fn name(params) body end`
    fn parse_function_statement(&mut self) -> Option<FunctionStatement> {
        let token = self.cursor.advance();
        let name = self.expect_identifier()?;
        let literal = self.parse_function_literal()?;
        Some(FunctionStatement {
            token,
            name,
            literal,
        })
    }

    /// `class Name (fn …)* end`
    fn parse_class_statement(&mut self) -> Option<Stmt> {
        let token = self.cursor.advance();
        if !self.cursor.check(TokenKind::Ident) {
            let err = error::expected_class_name(self.cursor.current());
            self.push_error(err);
            return None;
        }
        let name = Identifier::new(self.cursor.advance());

        let mut methods = Vec::new();
        while !self.cursor.is_at_end() && !self.cursor.check(TokenKind::End) {
            if self.cursor.check(TokenKind::Fn) && self.cursor.peek_kind() == TokenKind::Ident {
                let before = self.cursor.consumed();
                match self.parse_function_statement() {
                    Some(method) => methods.push(method),
                    None => self.ensure_progress(before),
                }
            } else {
                let err = error::unexpected_in_class_body(self.cursor.current());
                self.push_error(err);
                self.cursor.advance();
                synchronize(&mut self.cursor, CLASS_MEMBER);
            }
        }

        self.expect(TokenKind::End)?;
        Some(Stmt::Class(ClassStatement {
            token,
            name,
            methods,
        }))
    }

    /// `test "label" body end`
    fn parse_test_statement(&mut self) -> Option<Stmt> {
        let token = self.cursor.advance();
        if !self.cursor.check(TokenKind::Str) {
            let err = error::expected_test_label(self.cursor.current());
            self.push_error(err);
            return None;
        }
        let label = self.cursor.advance().text;
        let body = self.parse_block(BLOCK_END);
        self.expect(TokenKind::End)?;
        Some(Stmt::Test(TestStatement { token, label, body }))
    }
}
