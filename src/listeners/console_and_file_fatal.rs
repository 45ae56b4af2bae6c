//! Console output plus file logging for fatal errors.

use crate::core::{Listener, Severity};
use crate::error::Result;
use crate::sinks::{LineSink, StderrSink, StdoutSink, append_or_report, emit};
use std::path::{Path, PathBuf};

/// Prints `Fatal Error: <message>` to standard output and appends the same
/// line to a log file for every fatal error.
///
/// The console line is written first. File failures are reported the same
/// way as [`FileErrorListener`](crate::listeners::FileErrorListener) does.
pub struct ConsoleAndFileFatalListener {
    path: PathBuf,
    output: Box<dyn LineSink>,
    diagnostics: Box<dyn LineSink>,
}

impl ConsoleAndFileFatalListener {
    /// Create a listener printing to standard output and appending to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            output: Box::new(StdoutSink),
            diagnostics: Box::new(StderrSink),
        }
    }

    /// Print to `output` instead of standard output.
    pub fn with_output(mut self, output: impl LineSink + 'static) -> Self {
        self.output = Box::new(output);
        self
    }

    /// Report open failures to `diagnostics` instead of standard error.
    pub fn with_diagnostics(mut self, diagnostics: impl LineSink + 'static) -> Self {
        self.diagnostics = Box::new(diagnostics);
        self
    }

    /// The log file this listener appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Listener for ConsoleAndFileFatalListener {
    fn on_fatal_error(&self, message: &str) -> Result<()> {
        let line = Severity::Fatal.line(message);
        emit(self.output.as_ref(), &line);
        append_or_report(&self.path, &line, self.diagnostics.as_ref());
        Ok(())
    }
}
