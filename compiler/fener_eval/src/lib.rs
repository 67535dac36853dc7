//! Tree-walking evaluator for fener.
//!
//! # Architecture
//!
//! - [`Value`]: the runtime object model, a closed enum
//! - [`Environment`]: a chain of shared scopes; closures hold on to the
//!   scope they were created in
//! - [`Evaluator`]: dispatch over AST nodes, configured through
//!   [`EvaluatorBuilder`]
//! - [`builtins`]: native functions seeded into the root environment
//!
//! Runtime errors never unwind the whole program by default. Each one is
//! reported at the statement it occurred in and that statement yields
//! `Null`; see [`ErrorPolicy`] for the alternative.

mod builtins;
mod environment;
pub mod errors;
mod evaluator;
mod operators;
mod print_handler;
mod value;

pub use builtins::{BuiltinContext, BuiltinFn, BUILTINS};
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use evaluator::{evaluate, ErrorHandler, ErrorPolicy, Evaluator, EvaluatorBuilder, TestOutcome};
pub use operators::{evaluate_infix, evaluate_prefix};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{BuiltinValue, ClassValue, FunctionValue, InstanceValue, Value};
