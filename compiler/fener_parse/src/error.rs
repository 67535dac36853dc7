//! Parse error types.
//!
//! Errors are plain data: the parser pushes them onto its accumulator and
//! keeps going. `Display` gives the human-readable string callers print;
//! [`ParseError::to_diagnostic`] gives the coded form for the emitter.

use fener_diagnostic::{Diagnostic, ErrorCode};
use fener_ir::{Expr, Line, Token, TokenKind};

/// What kind of syntax problem was found.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    UnexpectedToken,
    NoPrefixParser,
    InvalidInteger,
    ExpectedIdentifier,
    ExpectedString,
    InvalidAssignmentTarget,
}

impl ParseErrorKind {
    pub const fn code(self) -> ErrorCode {
        match self {
            ParseErrorKind::UnexpectedToken => ErrorCode::E1001,
            ParseErrorKind::NoPrefixParser => ErrorCode::E1002,
            ParseErrorKind::InvalidInteger => ErrorCode::E1003,
            ParseErrorKind::ExpectedIdentifier => ErrorCode::E1004,
            ParseErrorKind::ExpectedString => ErrorCode::E1005,
            ParseErrorKind::InvalidAssignmentTarget => ErrorCode::E1006,
        }
    }
}

/// A syntax error at a source line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub line: Line,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, line: Line) -> Self {
        ParseError {
            kind,
            message: message.into(),
            line,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.message.clone())
            .with_line(self.line)
    }
}

/// Render a token for a message: kind, plus the lexeme when it carries one.
fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Ident | TokenKind::Int | TokenKind::Str | TokenKind::Illegal => {
            format!("{} ({:?})", token.kind, token.text)
        }
        _ => token.kind.to_string(),
    }
}

#[cold]
pub fn unexpected_token(expected: TokenKind, found: &Token) -> ParseError {
    ParseError::new(
        ParseErrorKind::UnexpectedToken,
        format!(
            "expected next token to be {expected}, got {} instead",
            describe(found)
        ),
        found.line,
    )
}

#[cold]
pub fn no_prefix_parser(found: &Token) -> ParseError {
    ParseError::new(
        ParseErrorKind::NoPrefixParser,
        format!("no prefix parse function for {} found", describe(found)),
        found.line,
    )
}

#[cold]
pub fn invalid_integer(token: &Token) -> ParseError {
    ParseError::new(
        ParseErrorKind::InvalidInteger,
        format!("could not parse {:?} as integer", token.text),
        token.line,
    )
}

#[cold]
pub fn expected_class_name(found: &Token) -> ParseError {
    ParseError::new(
        ParseErrorKind::ExpectedIdentifier,
        format!(
            "Expected identifier target for class statement, got {}",
            describe(found)
        ),
        found.line,
    )
}

#[cold]
pub fn expected_identifier(found: &Token) -> ParseError {
    ParseError::new(
        ParseErrorKind::ExpectedIdentifier,
        format!("expected identifier, got {} instead", describe(found)),
        found.line,
    )
}

#[cold]
pub fn expected_test_label(found: &Token) -> ParseError {
    ParseError::new(
        ParseErrorKind::ExpectedString,
        format!(
            "Expected string target for test statement, got {}",
            describe(found)
        ),
        found.line,
    )
}

#[cold]
pub fn invalid_assignment_target(target: &Expr) -> ParseError {
    ParseError::new(
        ParseErrorKind::InvalidAssignmentTarget,
        format!(
            "invalid assignment target: {} ({})",
            target,
            target.kind_name()
        ),
        target.token().line,
    )
}

#[cold]
pub fn unexpected_in_class_body(found: &Token) -> ParseError {
    ParseError::new(
        ParseErrorKind::UnexpectedToken,
        format!("unexpected token {} in class body", describe(found)),
        found.line,
    )
}
