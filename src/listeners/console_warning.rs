//! Console output for warnings.

use crate::core::{Listener, Severity};
use crate::error::Result;
use crate::sinks::{LineSink, StdoutSink, emit};

/// Prints `Warning: <message>` to standard output for every warning.
///
/// Errors and fatal errors are ignored.
pub struct ConsoleWarningListener {
    output: Box<dyn LineSink>,
}

impl ConsoleWarningListener {
    /// Create a listener that prints to standard output.
    pub fn new() -> Self {
        Self {
            output: Box::new(StdoutSink),
        }
    }

    /// Print to `output` instead of standard output.
    pub fn with_output(mut self, output: impl LineSink + 'static) -> Self {
        self.output = Box::new(output);
        self
    }
}

impl Default for ConsoleWarningListener {
    fn default() -> Self {
        Self::new()
    }
}

impl Listener for ConsoleWarningListener {
    fn on_warning(&self, message: &str) -> Result<()> {
        emit(self.output.as_ref(), &Severity::Warning.line(message));
        Ok(())
    }
}
