//! Driver errors.

use std::io;
use std::path::PathBuf;

use fener_eval::EvalError;

/// Why a command failed.
///
/// Syntax, runtime and test failures have already been written to stderr as
/// diagnostics by the time the error is returned; [`CliError::is_reported`]
/// tells the binary not to print them again.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing to {target}: {source}")]
    Write {
        target: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{count} syntax error(s) in '{}'", path.display())]
    Syntax { path: PathBuf, count: usize },

    #[error("runtime error in '{}'", path.display())]
    Runtime {
        path: PathBuf,
        #[source]
        source: EvalError,
    },

    #[error("{failed} test(s) failed")]
    TestsFailed { failed: usize },

    #[error("unknown error code: {0}")]
    UnknownErrorCode(String),

    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Read `path`, mapping I/O failures to driver errors.
    pub fn read(path: impl Into<PathBuf>) -> Result<String, CliError> {
        let path = path.into();
        std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => CliError::NotFound(path),
            _ => CliError::Read { path, source },
        })
    }

    /// Whether the details were already emitted as diagnostics.
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            CliError::Syntax { .. } | CliError::Runtime { .. } | CliError::TestsFailed { .. }
        )
    }
}
