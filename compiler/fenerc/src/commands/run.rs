//! The `run` command: parse and evaluate a fener source file.

use fener_diagnostic::Diagnostic;
use fener_eval::{
    stdout_handler, Environment, ErrorPolicy, EvalError, Evaluator, SharedPrintHandler,
    TestOutcome, Value,
};
use fener_ir::Program;

use super::emit_with_summary;
use crate::{parse_source, CliError};

/// Flags accepted by `fener run`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Dump the syntax tree before evaluating.
    pub print_ast: bool,
    /// Execute `test` blocks and report their outcomes.
    pub test_mode: bool,
}

/// What a completed run produced.
#[derive(Debug)]
pub struct RunReport {
    pub value: Value,
    pub outcomes: Vec<TestOutcome>,
    /// Runtime errors that did not stop the run (test mode only).
    pub diagnostics: Vec<Diagnostic>,
}

impl RunReport {
    pub fn failed_tests(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed).count()
    }
}

/// Evaluate `program` in a fresh root environment.
///
/// A plain run stops at the first runtime error and returns it. In test
/// mode errors are recorded against the `test` block they happened in and
/// every block gets to run.
pub fn execute(
    program: &Program,
    options: RunOptions,
    print: SharedPrintHandler,
) -> Result<RunReport, EvalError> {
    let policy = if options.test_mode {
        ErrorPolicy::Continue
    } else {
        ErrorPolicy::Abort
    };
    let mut evaluator = Evaluator::builder()
        .policy(policy)
        .test_mode(options.test_mode)
        .print_handler(print)
        .build();

    let env = Environment::with_builtins();
    let value = evaluator.eval_program(program, &env)?;
    Ok(RunReport {
        value,
        outcomes: evaluator.take_test_outcomes(),
        diagnostics: evaluator.take_diagnostics(),
    })
}

/// Run a fener source file.
///
/// Any syntax error is fatal: all of them are reported and nothing runs.
pub fn run_file(path: &str, options: RunOptions) -> Result<(), CliError> {
    let source = CliError::read(path)?;
    let output = parse_source(&source);

    if output.has_errors() {
        emit_with_summary(path, &output.diagnostics());
        return Err(CliError::Syntax {
            path: path.into(),
            count: output.errors.len(),
        });
    }

    if options.print_ast {
        println!("{:#?}", output.program);
    }

    let report = match execute(&output.program, options, stdout_handler()) {
        Ok(report) => report,
        Err(err) => {
            emit_with_summary(path, &[err.to_diagnostic()]);
            return Err(CliError::Runtime {
                path: path.into(),
                source: err,
            });
        }
    };

    if !options.test_mode {
        return Ok(());
    }

    let in_tests: usize = report.outcomes.iter().map(|o| o.errors.len()).sum();
    let stray = report.diagnostics.len().saturating_sub(in_tests);
    if stray > 0 {
        emit_with_summary(path, &report.diagnostics);
    }
    for outcome in &report.outcomes {
        let status = if outcome.passed { "ok" } else { "FAILED" };
        println!("test {} ... {status}", outcome.label);
        for error in &outcome.errors {
            println!("    {error}");
        }
    }

    let failed = report.failed_tests();
    if failed > 0 || stray > 0 {
        return Err(CliError::TestsFailed {
            failed: failed.max(1),
        });
    }
    Ok(())
}
