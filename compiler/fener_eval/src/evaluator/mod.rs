//! AST evaluation.
//!
//! Every evaluation step returns `Result<Value, Unwind>`. `Unwind` carries
//! either a `return` on its way to the nearest call boundary or a runtime
//! error on its way to the nearest statement boundary. What happens to an
//! error at a statement boundary is decided by the [`ErrorPolicy`].

mod builder;
mod call;
mod expr;

pub use builder::EvaluatorBuilder;

use std::rc::Rc;

use fener_diagnostic::{Diagnostic, DiagnosticQueue};
use fener_ir::{Block, ClassStatement, Program, Stmt, TestStatement, WhileStatement};

use crate::{ClassValue, Environment, EvalError, EvalResult, FunctionValue, SharedPrintHandler, Value};

/// Callback invoked with each runtime error as it is reported.
pub type ErrorHandler = Box<dyn FnMut(&EvalError)>;

/// What a statement does with a runtime error raised while evaluating it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Report the error, let the statement yield `Null` and carry on with
    /// the next statement.
    #[default]
    Continue,
    /// Stop the program and return the error from [`Evaluator::eval_program`].
    Abort,
}

/// Result of one `test` block run in test mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestOutcome {
    pub label: String,
    pub passed: bool,
    /// Messages of the errors reported while the body ran.
    pub errors: Vec<String>,
}

/// Non-local exit from an evaluation step.
pub(crate) enum Unwind {
    Return(Value),
    Error(EvalError),
}

impl From<EvalError> for Unwind {
    fn from(err: EvalError) -> Self {
        Unwind::Error(err)
    }
}

pub(crate) type Flow = Result<Value, Unwind>;

/// Tree-walking evaluator.
pub struct Evaluator {
    policy: ErrorPolicy,
    test_mode: bool,
    print: SharedPrintHandler,
    on_error: Option<ErrorHandler>,
    max_call_depth: Option<usize>,
    call_depth: usize,
    diagnostics: DiagnosticQueue,
    outcomes: Vec<TestOutcome>,
}

impl Evaluator {
    /// Evaluator with the default configuration: `Continue` policy, test
    /// mode off, output to stdout.
    pub fn new() -> Self {
        EvaluatorBuilder::new().build()
    }

    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    pub fn is_test_mode(&self) -> bool {
        self.test_mode
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    /// Diagnostics for every error reported so far.
    pub fn diagnostics(&self) -> &DiagnosticQueue {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.flush()
    }

    pub fn test_outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    pub fn take_test_outcomes(&mut self) -> Vec<TestOutcome> {
        std::mem::take(&mut self.outcomes)
    }

    /// Run every statement of `program` in `env`.
    ///
    /// Yields the value of the last statement, or of a top-level `return`.
    /// Under [`ErrorPolicy::Abort`] the first runtime error ends the run and
    /// is returned, after being reported.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval_program(&mut self, program: &Program, env: &Environment) -> EvalResult {
        let mut result = Value::Null;
        for stmt in &program.statements {
            match self.run_statement(stmt, env) {
                Ok(value) => result = value,
                Err(Unwind::Return(value)) => return Ok(value),
                Err(Unwind::Error(err)) => {
                    self.report(&err);
                    return Err(err);
                }
            }
        }
        tracing::debug!(errors = self.diagnostics.len(), "program finished");
        Ok(result)
    }

    /// Call a function, builtin or class value from outside the program.
    pub fn call_value(&mut self, callee: &Value, args: &[Value]) -> EvalResult {
        match self.apply(callee, args) {
            Ok(value) | Err(Unwind::Return(value)) => Ok(value),
            Err(Unwind::Error(err)) => Err(err),
        }
    }

    /// Evaluate one statement and apply the error policy to its outcome.
    fn run_statement(&mut self, stmt: &Stmt, env: &Environment) -> Flow {
        match self.eval_statement(stmt, env) {
            Err(Unwind::Error(err)) => {
                let err = err.at_line(stmt.token().line);
                match self.policy {
                    ErrorPolicy::Continue => {
                        self.report(&err);
                        Ok(Value::Null)
                    }
                    ErrorPolicy::Abort => Err(Unwind::Error(err)),
                }
            }
            flow => flow,
        }
    }

    fn report(&mut self, err: &EvalError) {
        tracing::debug!(code = %err.code(), %err, "runtime error");
        self.diagnostics.push(err.to_diagnostic());
        if let Some(handler) = self.on_error.as_mut() {
            handler(err);
        }
    }

    fn eval_statement(&mut self, stmt: &Stmt, env: &Environment) -> Flow {
        match stmt {
            Stmt::Expression(stmt) => self.eval_expr(&stmt.expression, env),
            Stmt::Return(stmt) => {
                let value = self.eval_expr(&stmt.value, env)?;
                Err(Unwind::Return(value))
            }
            Stmt::While(stmt) => self.eval_while(stmt, env),
            Stmt::Function(stmt) => {
                let function = FunctionValue::named(
                    stmt.name.as_str(),
                    Rc::clone(&stmt.literal),
                    env.clone(),
                );
                env.define(stmt.name.as_str(), Value::Function(Rc::new(function)));
                Ok(Value::Null)
            }
            Stmt::Class(stmt) => {
                define_class(stmt, env);
                Ok(Value::Null)
            }
            Stmt::Test(stmt) => self.eval_test(stmt, env),
        }
    }

    /// Statements in order; the last one's value, or `Null` when empty.
    /// Blocks share the enclosing scope.
    pub(crate) fn eval_block(&mut self, block: &Block, env: &Environment) -> Flow {
        let mut result = Value::Null;
        for stmt in &block.statements {
            result = self.run_statement(stmt, env)?;
        }
        Ok(result)
    }

    fn eval_while(&mut self, stmt: &WhileStatement, env: &Environment) -> Flow {
        while self.eval_expr(&stmt.condition, env)?.is_truthy() {
            self.eval_block(&stmt.body, env)?;
        }
        Ok(Value::Null)
    }

    fn eval_test(&mut self, stmt: &TestStatement, env: &Environment) -> Flow {
        if !self.test_mode {
            return Ok(Value::Null);
        }

        let reported_before = self.diagnostics.len();
        let result = self.eval_block(&stmt.body, env);

        let mut errors: Vec<String> = self
            .diagnostics
            .iter()
            .skip(reported_before)
            .map(|d| d.message.clone())
            .collect();
        if let Err(Unwind::Error(err)) = &result {
            errors.push(err.message.clone());
        }

        let outcome = TestOutcome {
            label: stmt.label.clone(),
            passed: errors.is_empty(),
            errors,
        };
        tracing::debug!(label = %outcome.label, passed = outcome.passed, "test finished");
        self.outcomes.push(outcome);

        // A `return` ends the test body, not the program.
        match result {
            Ok(_) | Err(Unwind::Return(_)) => Ok(Value::Null),
            Err(err) => Err(err),
        }
    }
}

/// Bind a class whose methods close over `env`.
fn define_class(stmt: &ClassStatement, env: &Environment) {
    let methods = stmt
        .methods
        .iter()
        .map(|method| {
            Rc::new(FunctionValue::named(
                method.name.as_str(),
                Rc::clone(&method.literal),
                env.clone(),
            ))
        })
        .collect();
    let class = ClassValue {
        name: stmt.name.name.clone(),
        methods,
    };
    env.define(stmt.name.as_str(), Value::Class(Rc::new(class)));
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate `program` with the default configuration, passing each runtime
/// error to `on_error`. Errors never stop the run.
pub fn evaluate(
    program: &Program,
    env: &Environment,
    on_error: impl FnMut(&EvalError) + 'static,
) -> Value {
    let mut evaluator = Evaluator::builder().on_error(on_error).build();
    evaluator.eval_program(program, env).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests;
