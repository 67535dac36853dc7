//! The fener driver.
//!
//! Everything the `fener` binary does lives here so integration tests can
//! drive it without spawning a process:
//! - [`commands`]: one module per subcommand
//! - [`test`]: discovery and parallel execution of `test` blocks
//! - [`init_tracing`]: opt-in logging controlled by `RUST_LOG`
//!
//! Commands return [`CliError`]; the binary turns that into an exit code.

pub mod commands;
mod error;
pub mod test;
mod tracing_setup;

pub use error::CliError;
pub use tracing_setup::init_tracing;

use fener_lexer::Lexer;
use fener_parse::ParseOutput;

/// File extension of fener sources.
pub const SOURCE_EXTENSION: &str = "fn";

/// Lex and parse a whole source string.
pub fn parse_source(source: &str) -> ParseOutput {
    fener_parse::parse(Lexer::new(source))
}
