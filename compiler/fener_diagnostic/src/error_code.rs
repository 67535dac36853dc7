use std::fmt;
use std::str::FromStr;

/// Error codes for all fener diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Parser errors
/// - E2xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// No prefix parse function for the current token
    E1002,
    /// Integer literal out of range
    E1003,
    /// Expected identifier
    E1004,
    /// Expected string
    E1005,
    /// Invalid assignment target
    E1006,

    // Runtime Errors (E2xxx)
    /// Node the evaluator does not handle
    E2001,
    /// Identifier not found
    E2002,
    /// Operand type mismatch
    E2003,
    /// Wrong number of arguments
    E2004,
    /// Callee is not callable
    E2005,
    /// Field access on a non-instance
    E2006,
    /// Field or method not found
    E2007,
    /// Division or modulus by zero
    E2008,
    /// Index out of bounds
    E2009,
    /// Assertion failed
    E2010,
    /// Call depth limit exceeded
    E2011,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 17] = [
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
        ErrorCode::E2008,
        ErrorCode::E2009,
        ErrorCode::E2010,
        ErrorCode::E2011,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            ErrorCode::E2010 => "E2010",
            ErrorCode::E2011 => "E2011",
        }
    }

    pub const fn is_parse_error(self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::E1006
        )
    }

    /// One-line description, shown by `fener explain`.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expression expected",
            ErrorCode::E1003 => "integer literal out of range",
            ErrorCode::E1004 => "identifier expected",
            ErrorCode::E1005 => "string expected",
            ErrorCode::E1006 => "invalid assignment target",
            ErrorCode::E2001 => "unsupported node",
            ErrorCode::E2002 => "identifier not found",
            ErrorCode::E2003 => "type mismatch",
            ErrorCode::E2004 => "wrong number of arguments",
            ErrorCode::E2005 => "value is not callable",
            ErrorCode::E2006 => "field access on a non-instance",
            ErrorCode::E2007 => "field or method not found",
            ErrorCode::E2008 => "division by zero",
            ErrorCode::E2009 => "index out of bounds",
            ErrorCode::E2010 => "assertion failed",
            ErrorCode::E2011 => "call depth limit exceeded",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name an [`ErrorCode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownErrorCode;

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    /// Case-insensitive: `e2002` and `E2002` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(UnknownErrorCode)
    }
}
