//! The `explain` command: describe a diagnostic code.

use fener_diagnostic::ErrorCode;

use crate::CliError;

/// Print what `code_str` means, e.g. `fener explain E2002`.
pub fn explain_error(code_str: &str) -> Result<(), CliError> {
    let code = code_str
        .parse::<ErrorCode>()
        .map_err(|_| CliError::UnknownErrorCode(code_str.to_string()))?;

    let phase = if code.is_parse_error() {
        "syntax error"
    } else {
        "runtime error"
    };
    println!("{code}: {} ({phase})", code.description());
    Ok(())
}
