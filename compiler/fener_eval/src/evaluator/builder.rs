//! `EvaluatorBuilder` for configuring an [`Evaluator`].

use fener_diagnostic::DiagnosticQueue;

use super::{ErrorHandler, ErrorPolicy, Evaluator};
use crate::{stdout_handler, EvalError, SharedPrintHandler};

/// Builder for [`Evaluator`].
///
/// Defaults:
/// - policy `Continue`
/// - test mode off
/// - `print` goes to stdout
/// - no error callback (errors are still collected as diagnostics)
/// - no call depth limit
#[derive(Default)]
pub struct EvaluatorBuilder {
    policy: ErrorPolicy,
    test_mode: bool,
    print_handler: Option<SharedPrintHandler>,
    on_error: Option<ErrorHandler>,
    max_call_depth: Option<usize>,
}

impl EvaluatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run `test` blocks instead of skipping them.
    #[must_use]
    pub fn test_mode(mut self, enabled: bool) -> Self {
        self.test_mode = enabled;
        self
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Called once for every reported runtime error.
    #[must_use]
    pub fn on_error(mut self, handler: impl FnMut(&EvalError) + 'static) -> Self {
        self.on_error = Some(Box::new(handler));
        self
    }

    /// Fail calls nested deeper than `depth` with a runtime error.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    pub fn build(self) -> Evaluator {
        Evaluator {
            policy: self.policy,
            test_mode: self.test_mode,
            print: self.print_handler.unwrap_or_else(stdout_handler),
            on_error: self.on_error,
            max_call_depth: self.max_call_depth,
            call_depth: 0,
            diagnostics: DiagnosticQueue::new(),
            outcomes: Vec::new(),
        }
    }
}
