//! Command handlers for the fener CLI.
//!
//! Each submodule implements one subcommand. Shared reporting helpers live
//! here in the module root.

use std::io;

use fener_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use fener_diagnostic::Diagnostic;

mod debug;
mod explain;
mod fmt;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use fmt::format_file;
pub use repl::{run_repl, ReplLine, ReplSession, ReplStep};
pub use run::{execute, run_file, RunOptions, RunReport};
pub use test::run_tests;

/// Stderr emitter that names `path` in location lines.
pub(crate) fn stderr_emitter(path: &str) -> TerminalEmitter<io::Stderr> {
    TerminalEmitter::stderr(ColorMode::Auto).with_file_path(path)
}

/// Emit `diagnostics` followed by the closing summary line.
pub(crate) fn emit_with_summary(path: &str, diagnostics: &[Diagnostic]) {
    let mut emitter = stderr_emitter(path);
    emitter.emit_all(diagnostics);
    emitter.emit_summary(diagnostics.len());
    emitter.flush();
}
