//! Evaluator tests.
//!
//! - `basics`: literals, operators, scoping and control flow
//! - `functions`: calls, closures and recursion
//! - `classes`: instances, fields and method lookup
//! - `errors`: reporting, the two policies and diagnostics
//! - `test_mode`: `test` blocks and their outcomes

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

mod basics;
mod functions;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use fener_ir::Program;
use fener_lexer::Lexer;

use crate::{buffer_handler, Environment, ErrorPolicy, Evaluator, EvaluatorBuilder, TestOutcome, Value};

fn parse_program(source: &str) -> Program {
    let output = fener_parse::parse(Lexer::new(source));
    assert!(
        !output.has_errors(),
        "unexpected parse errors for {source:?}: {:?}",
        output.error_messages()
    );
    output.program
}

/// Everything observable from one run.
struct Run {
    value: Value,
    errors: Vec<String>,
    output: String,
    outcomes: Vec<TestOutcome>,
}

fn run_with(source: &str, builder: EvaluatorBuilder) -> Run {
    let program = parse_program(source);
    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&errors);
    let print = buffer_handler();

    let mut evaluator = builder
        .print_handler(Arc::clone(&print))
        .on_error(move |err| sink.borrow_mut().push(err.message.clone()))
        .build();
    let value = evaluator
        .eval_program(&program, &Environment::with_builtins())
        .unwrap_or(Value::Null);

    let errors = errors.borrow().clone();
    Run {
        value,
        errors,
        output: print.output(),
        outcomes: evaluator.take_test_outcomes(),
    }
}

fn run(source: &str) -> Run {
    run_with(source, Evaluator::builder())
}

/// Value of `source`, which must run without errors.
fn eval(source: &str) -> Value {
    let run = run(source);
    assert!(run.errors.is_empty(), "unexpected errors for {source:?}: {:?}", run.errors);
    run.value
}

fn abort() -> EvaluatorBuilder {
    Evaluator::builder().policy(ErrorPolicy::Abort)
}
