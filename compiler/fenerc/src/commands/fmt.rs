//! The `fmt` command: print a file in its canonical rendering.

use super::emit_with_summary;
use crate::{parse_source, CliError};

/// Parse `path` and print it in canonical form.
///
/// Files with syntax errors are left alone.
pub fn format_file(path: &str) -> Result<(), CliError> {
    let source = CliError::read(path)?;
    let output = parse_source(&source);
    if output.has_errors() {
        emit_with_summary(path, &output.diagnostics());
        return Err(CliError::Syntax {
            path: path.into(),
            count: output.errors.len(),
        });
    }

    println!("{}", output.program);
    Ok(())
}
