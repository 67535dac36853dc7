//! Runtime error type and its constructors.
//!
//! Every error the evaluator or a builtin can raise is built by one of the
//! `#[cold]` functions below, so message wording lives in one place.

use fener_diagnostic::{Diagnostic, ErrorCode};
use fener_ir::{InfixOp, Line};

use crate::Value;

/// Result of evaluating an expression or calling a builtin.
pub type EvalResult = Result<Value, EvalError>;

/// Category of a runtime error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EvalErrorKind {
    UnknownNode,
    IdentifierNotFound,
    TypeMismatch,
    WrongArgCount,
    NotCallable,
    FieldOnNonInstance,
    FieldNotFound,
    DivisionByZero,
    IndexOutOfBounds,
    AssertionFailed,
    CallDepthExceeded,
}

impl EvalErrorKind {
    pub const fn code(self) -> ErrorCode {
        match self {
            EvalErrorKind::UnknownNode => ErrorCode::E2001,
            EvalErrorKind::IdentifierNotFound => ErrorCode::E2002,
            EvalErrorKind::TypeMismatch => ErrorCode::E2003,
            EvalErrorKind::WrongArgCount => ErrorCode::E2004,
            EvalErrorKind::NotCallable => ErrorCode::E2005,
            EvalErrorKind::FieldOnNonInstance => ErrorCode::E2006,
            EvalErrorKind::FieldNotFound => ErrorCode::E2007,
            EvalErrorKind::DivisionByZero => ErrorCode::E2008,
            EvalErrorKind::IndexOutOfBounds => ErrorCode::E2009,
            EvalErrorKind::AssertionFailed => ErrorCode::E2010,
            EvalErrorKind::CallDepthExceeded => ErrorCode::E2011,
        }
    }
}

/// A runtime error.
///
/// `line` is filled in by the innermost statement the error passes through,
/// so builtins and operators can leave it unset.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub message: String,
    pub line: Option<Line>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, message: impl Into<String>) -> Self {
        EvalError {
            kind,
            message: message.into(),
            line: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Attach `line` unless a more precise one is already set.
    #[must_use]
    pub fn at_line(mut self, line: Line) -> Self {
        self.line.get_or_insert(line);
        self
    }

    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.message.clone());
        match self.line {
            Some(line) => diag.with_line(line),
            None => diag,
        }
    }
}

// Lookup

#[cold]
pub fn identifier_not_found(name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::IdentifierNotFound,
        format!("Identifier not found: {name}"),
    )
}

// Operators

#[cold]
pub fn invalid_operands(op: InfixOp, left: &Value, right: &Value) -> EvalError {
    EvalError::new(
        EvalErrorKind::TypeMismatch,
        format!(
            "Can't perform infix operation `{}` on {} and {}",
            op.as_symbol(),
            left.type_name(),
            right.type_name()
        ),
    )
}

#[cold]
pub fn cannot_compare(left: &Value, right: &Value) -> EvalError {
    EvalError::new(
        EvalErrorKind::TypeMismatch,
        format!(
            "Can't compare expressions {} and {}",
            left.type_name(),
            right.type_name()
        ),
    )
}

#[cold]
pub fn cannot_negate(operand: &Value) -> EvalError {
    EvalError::new(
        EvalErrorKind::TypeMismatch,
        format!("Can't negate expression {}", operand.type_name()),
    )
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero, "Division by zero")
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero, "Modulus by zero")
}

// Calls

#[cold]
pub fn wrong_arg_count(expected: usize, got: usize) -> EvalError {
    EvalError::new(
        EvalErrorKind::WrongArgCount,
        format!("Expected {expected} arguments, got {got}"),
    )
}

#[cold]
pub fn wrong_arg_count_range(min: usize, max: usize, got: usize) -> EvalError {
    EvalError::new(
        EvalErrorKind::WrongArgCount,
        format!("Expected {min} to {max} arguments, got {got}"),
    )
}

#[cold]
pub fn not_callable(callee: &Value) -> EvalError {
    EvalError::new(
        EvalErrorKind::NotCallable,
        format!("Can't call expression {}", callee.type_name()),
    )
}

#[cold]
pub fn call_depth_exceeded(limit: usize) -> EvalError {
    EvalError::new(
        EvalErrorKind::CallDepthExceeded,
        format!("Maximum call depth of {limit} exceeded"),
    )
}

// Fields and indexing

#[cold]
pub fn cannot_access_field(target: &Value) -> EvalError {
    EvalError::new(
        EvalErrorKind::FieldOnNonInstance,
        format!("Can't access field on {}", target.type_name()),
    )
}

#[cold]
pub fn no_field_or_method(field: &str, class: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::FieldNotFound,
        format!("No field or method `{field}` on instance of {class}"),
    )
}

#[cold]
pub fn cannot_index(target: &Value, index: &Value) -> EvalError {
    EvalError::new(
        EvalErrorKind::TypeMismatch,
        format!(
            "Can't index {} with {}",
            target.type_name(),
            index.type_name()
        ),
    )
}

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::new(
        EvalErrorKind::IndexOutOfBounds,
        format!("Index {index} out of bounds for length {len}"),
    )
}

// Builtins

#[cold]
pub fn wrong_arg_type(builtin: &str, expected: &str, got: &Value) -> EvalError {
    EvalError::new(
        EvalErrorKind::TypeMismatch,
        format!(
            "{builtin} expects {expected}, got {}",
            got.type_name()
        ),
    )
}

#[cold]
pub fn assertion_failed(message: Option<&str>) -> EvalError {
    let message = match message {
        Some(text) => format!("Assertion failed: {text}"),
        None => "Assertion failed".to_string(),
    };
    EvalError::new(EvalErrorKind::AssertionFailed, message)
}
