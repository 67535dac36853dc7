//! Grammar productions.
//!
//! - `expr`: precedence climbing and the prefix/infix builders
//! - `stmt`: statement dispatch, blocks, and the keyword statements

mod expr;
mod stmt;

use fener_ir::{Token, TokenKind, TokenStream};

use crate::error;
use crate::Parser;

impl<S: TokenStream> Parser<S> {
    /// Install the builder for every token that can start or extend an
    /// expression.
    pub(crate) fn register_builders(&mut self) {
        self.register_prefix(TokenKind::Ident, Self::parse_identifier);
        self.register_prefix(TokenKind::Int, Self::parse_integer);
        self.register_prefix(TokenKind::Str, Self::parse_string);
        self.register_prefix(TokenKind::True, Self::parse_boolean);
        self.register_prefix(TokenKind::False, Self::parse_boolean);
        self.register_prefix(TokenKind::Minus, Self::parse_prefix);
        self.register_prefix(TokenKind::Bang, Self::parse_prefix);
        self.register_prefix(TokenKind::LParen, Self::parse_grouped);
        self.register_prefix(TokenKind::LBracket, Self::parse_array);
        self.register_prefix(TokenKind::If, Self::parse_if);
        self.register_prefix(TokenKind::Fn, Self::parse_lambda);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::AndAnd,
            TokenKind::OrOr,
            TokenKind::Amp,
            TokenKind::Pipe,
        ] {
            self.register_infix(kind, Self::parse_infix);
        }
        self.register_infix(TokenKind::Assign, Self::parse_assignment);
        self.register_infix(TokenKind::LParen, Self::parse_call);
        self.register_infix(TokenKind::LBracket, Self::parse_index);
        self.register_infix(TokenKind::Dot, Self::parse_field);
    }

    /// Consume the current token if it is `kind`; otherwise record an error
    /// and leave the cursor where it is.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Option<Token> {
        if self.cursor.check(kind) {
            Some(self.cursor.advance())
        } else {
            let err = error::unexpected_token(kind, self.cursor.current());
            self.push_error(err);
            None
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> Option<fener_ir::Identifier> {
        if self.cursor.check(TokenKind::Ident) {
            Some(fener_ir::Identifier::new(self.cursor.advance()))
        } else {
            let err = error::expected_identifier(self.cursor.current());
            self.push_error(err);
            None
        }
    }
}
