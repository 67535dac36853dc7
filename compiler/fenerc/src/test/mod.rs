//! Test runner for fener `test` blocks.
//!
//! - Discovery: finding `.fn` files under a path
//! - Execution: one fresh evaluator per file, in test mode
//! - Result tracking: pass/fail counts per file and overall
//! - Parallel execution: files run concurrently with rayon

mod discovery;
mod runner;

pub use discovery::{discover_tests, discover_tests_in, TestFile};
pub use result::{FileSummary, TestSummary};
pub use runner::{run_test_file, TestRunner, TestRunnerConfig};
