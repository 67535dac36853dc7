//! Precedence-climbing parser for fener.
//!
//! The parser pulls tokens lazily from any [`TokenStream`] and builds a
//! [`Program`]. Expressions are parsed by precedence climbing over two
//! builder tables keyed by token kind: prefix builders start an expression,
//! infix builders extend one that has already been built.
//!
//! # Error handling
//!
//! Parsing never stops at the first problem. Each failure is pushed onto the
//! error list, the failing builder returns `None`, and the statement loop
//! carries on with the next statement. A [`ParseOutput`] with errors may still
//! hold every statement that parsed cleanly, so check
//! [`ParseOutput::has_errors`] before trusting the program.

mod cursor;
mod error;
mod grammar;
mod precedence;
mod recovery;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use precedence::Precedence;
pub use recovery::{synchronize, TokenSet};

use fener_diagnostic::Diagnostic;
use fener_ir::{Expr, Program, TokenKind, TokenStream};
use rustc_hash::FxHashMap;

/// Builds an expression starting at the current token.
pub type PrefixFn<S> = fn(&mut Parser<S>) -> Option<Expr>;

/// Extends an already-built left operand starting at the current token.
pub type InfixFn<S> = fn(&mut Parser<S>, Expr) -> Option<Expr>;

/// Output of parsing a token stream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors as the strings a REPL or runner prints.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }
}

/// Parse a whole token stream.
pub fn parse<S: TokenStream>(tokens: S) -> ParseOutput {
    Parser::new(tokens).parse_program()
}

/// Parser state.
pub struct Parser<S: TokenStream> {
    cursor: Cursor<S>,
    errors: Vec<ParseError>,
    prefix_fns: FxHashMap<TokenKind, PrefixFn<S>>,
    infix_fns: FxHashMap<TokenKind, InfixFn<S>>,
}

impl<S: TokenStream> Parser<S> {
    /// Create a parser with the standard builder tables installed.
    pub fn new(tokens: S) -> Self {
        let mut parser = Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
            prefix_fns: FxHashMap::default(),
            infix_fns: FxHashMap::default(),
        };
        parser.register_builders();
        parser
    }

    pub fn register_prefix(&mut self, kind: TokenKind, builder: PrefixFn<S>) {
        self.prefix_fns.insert(kind, builder);
    }

    pub fn register_infix(&mut self, kind: TokenKind, builder: InfixFn<S>) {
        self.infix_fns.insert(kind, builder);
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Parse statements until end of input.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            let before = self.cursor.consumed();
            match self.parse_statement() {
                Some(stmt) => statements.push(stmt),
                None => self.ensure_progress(before),
            }
        }
        tracing::debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        ParseOutput {
            program: Program::new(statements),
            errors: self.errors,
        }
    }

    fn push_error(&mut self, error: ParseError) {
        tracing::debug!(%error, "parse error");
        self.errors.push(error);
    }

    /// Skip one token if a failed parse consumed nothing, so statement
    /// loops cannot stall on a token no builder accepts.
    fn ensure_progress(&mut self, before: usize) {
        if self.cursor.consumed() == before {
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests;
