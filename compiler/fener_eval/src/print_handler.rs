//! Where `print` output goes.
//!
//! - `fener run` and the REPL write to stdout
//! - tests capture into a buffer and assert on it
//! - the test runner discards output unless asked to show it

use std::sync::Arc;

use parking_lot::Mutex;

/// Writes each line to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, line: &str) {
        println!("{line}");
    }
}

/// Captures lines in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, line: &str) {
        let mut buffer = self.buffer.lock();
        buffer.push_str(line);
        buffer.push('\n');
    }

    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Return the captured output and empty the buffer.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }
}

/// Print destination, dispatched by variant.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    /// Discards everything.
    Silent,
}

impl PrintHandlerImpl {
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout(h) => h.println(line),
            Self::Buffer(h) => h.println(line),
            Self::Silent => {}
        }
    }

    /// Captured output so far. Empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Drain captured output. Empty for handlers that do not capture.
    pub fn take(&self) -> String {
        match self {
            Self::Buffer(h) => h.take(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}

/// Print handler shared between the evaluator, its builtins and the caller.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
