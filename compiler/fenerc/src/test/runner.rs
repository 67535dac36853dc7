//! Test execution engine.
//!
//! Every file gets its own evaluator and root environment, so files never
//! see each other's bindings and can run on separate threads.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use fener_eval::{buffer_handler, Environment, ErrorPolicy, Evaluator};
use rayon::prelude::*;

use super::discovery::{discover_tests_in, TestFile};
use super::result::{FileSummary, TestSummary};
use crate::parse_source;

/// Deepest call nesting a test file may reach before it fails with a
/// runtime error instead of running until memory runs out.
const MAX_CALL_DEPTH: usize = 10_000;

/// Configuration for the test runner.
#[derive(Clone, Debug)]
pub struct TestRunnerConfig {
    /// Run files in parallel.
    pub parallel: bool,
    /// Report passing tests and captured output too.
    pub verbose: bool,
}

impl Default for TestRunnerConfig {
    fn default() -> Self {
        TestRunnerConfig {
            parallel: true,
            verbose: false,
        }
    }
}

/// Test runner.
#[derive(Default)]
pub struct TestRunner {
    config: TestRunnerConfig,
}

impl TestRunner {
    pub fn new() -> Self {
        TestRunner::default()
    }

    pub fn with_config(config: TestRunnerConfig) -> Self {
        TestRunner { config }
    }

    /// Run all tests in a path (file or directory).
    #[tracing::instrument(level = "debug", skip(self), fields(parallel = self.config.parallel))]
    pub fn run(&self, path: &Path) -> TestSummary {
        let test_files = discover_tests_in(path);
        tracing::debug!(files = test_files.len(), "discovered test files");

        if self.config.parallel {
            run_parallel(&test_files)
        } else {
            run_sequential(&test_files)
        }
    }
}

fn run_sequential(files: &[TestFile]) -> TestSummary {
    let start = Instant::now();
    let mut summary = TestSummary::new();
    for file in files {
        summary.add_file(run_test_file(&file.path));
    }
    summary.duration = start.elapsed();
    summary
}

/// Run files on a scoped rayon pool.
///
/// `build_scoped` tears the pool down before returning, so no worker
/// outlives the run. Evaluators are not `Send`; each worker builds its own.
fn run_parallel(files: &[TestFile]) -> TestSummary {
    let start = Instant::now();

    let file_summaries = rayon::ThreadPoolBuilder::new()
        .stack_size(32 * 1024 * 1024)
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                files
                    .par_iter()
                    .map(|file| run_test_file(&file.path))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), running sequentially");
            files.iter().map(|file| run_test_file(&file.path)).collect()
        });

    let mut summary = TestSummary::new();
    for file_summary in file_summaries {
        summary.add_file(file_summary);
    }
    summary.duration = start.elapsed();
    summary
}

/// Run every `test` block in one file.
///
/// Top-level statements run too, in order, so tests can use the functions
/// and classes the file defines. A runtime error outside a `test` block is
/// a file error; one inside is that test failing.
#[tracing::instrument(level = "debug")]
pub fn run_test_file(path: &Path) -> FileSummary {
    let start = Instant::now();
    let mut summary = FileSummary::new(path.to_path_buf());

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            summary.add_error(format!("Failed to read file: {e}"));
            return summary;
        }
    };

    let output = parse_source(&source);
    if output.has_errors() {
        for message in output.error_messages() {
            summary.add_error(message);
        }
        summary.duration = start.elapsed();
        return summary;
    }

    let print = buffer_handler();
    let mut evaluator = Evaluator::builder()
        .policy(ErrorPolicy::Continue)
        .test_mode(true)
        .max_call_depth(MAX_CALL_DEPTH)
        .print_handler(Arc::clone(&print))
        .build();
    let env = Environment::with_builtins();

    if let Err(err) = evaluator.eval_program(&output.program, &env) {
        summary.add_error(err.to_string());
    }

    let diagnostics = evaluator.take_diagnostics();
    let outcomes = evaluator.take_test_outcomes();
    let in_tests: usize = outcomes.iter().map(|o| o.errors.len()).sum();
    let stray = diagnostics.len().saturating_sub(in_tests);
    if stray > 0 {
        summary.add_error(format!("{stray} runtime error(s) outside test blocks"));
    }

    for outcome in outcomes {
        summary.add_result(outcome);
    }
    summary.output = print.take();
    summary.duration = start.elapsed();
    tracing::debug!(passed = summary.passed, failed = summary.failed, "file finished");
    summary
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn write(dir: &Path, name: &str, source: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, source).unwrap();
        path
    }

    #[test]
    fn test_file_with_passing_and_failing_tests() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "math.fn",
            r#"
            fn square(x) x * x end
            test "squares" assert(square(3) == 9) end
            test "wrong" assert(square(3) == 10, "nope") end
            "#,
        );

        let summary = run_test_file(&path);
        assert_eq!((summary.passed, summary.failed), (1, 1));
        assert!(summary.errors.is_empty());
        assert_eq!(summary.results[1].errors, ["Assertion failed: nope"]);
    }

    #[test]
    fn test_syntax_errors_are_file_errors() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "bad.fn", "test \"x\" * end");

        let summary = run_test_file(&path);
        assert_eq!(summary.total(), 0);
        assert!(!summary.errors.is_empty());
        assert!(summary.errors[0].starts_with("line 1:"));
    }

    #[test]
    fn test_error_outside_tests_is_a_file_error() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "stray.fn", r#"oops test "fine" 1 end"#);

        let summary = run_test_file(&path);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.errors, ["1 runtime error(s) outside test blocks"]);
    }

    #[test]
    fn test_runaway_recursion_fails_the_test() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "deep.fn",
            r#"fn down(n) down(n + 1) end test "forever" down(0) end"#,
        );

        let summary = run_test_file(&path);
        assert_eq!(summary.failed, 1);
        assert!(summary.errors.is_empty());
    }

    #[test]
    fn test_return_in_a_test_does_not_hide_later_tests() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "early.fn",
            r#"test "returns" return 1 end test "fails" assert(false) end"#,
        );

        let summary = run_test_file(&path);
        assert_eq!((summary.passed, summary.failed), (1, 1));
        assert!(summary.has_failures());
    }

    #[test]
    fn test_output_is_captured() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "noisy.fn", r#"test "talks" print("hi") end"#);

        let summary = run_test_file(&path);
        assert_eq!(summary.output, "hi\n");
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a.fn", r#"test "a" assert(true) end"#);
        write(dir.path(), "b.fn", r#"test "b" assert(false) end"#);
        write(dir.path(), "c.fn", r#"test "c1" 1 end test "c2" 2 end"#);

        for parallel in [true, false] {
            let runner = TestRunner::with_config(TestRunnerConfig {
                parallel,
                verbose: false,
            });
            let summary = runner.run(dir.path());
            assert_eq!(summary.files.len(), 3);
            assert_eq!((summary.passed, summary.failed), (3, 1));
            assert_eq!(summary.exit_code(), 1);
        }
    }
}
