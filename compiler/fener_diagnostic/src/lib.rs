//! Diagnostic system shared by the parser, the evaluator and the CLI.
//!
//! - Error codes for searchability (`E1xxx` parse, `E2xxx` runtime)
//! - A plain message saying what went wrong
//! - The source line, when one is known
//!
//! Stages produce their own typed errors and convert them into
//! [`Diagnostic`] at the boundary. [`DiagnosticQueue`] accumulates them so a
//! caller can keep going after the first problem and decide later whether
//! any of them is fatal.

mod diagnostic;
pub mod emitter;
mod error_code;
mod queue;

pub use diagnostic::Diagnostic;
pub use error_code::{ErrorCode, UnknownErrorCode};
pub use queue::DiagnosticQueue;
