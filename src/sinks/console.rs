//! Console and in-memory line sinks.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// A destination that accepts whole lines of text.
///
/// Implementations append the line break themselves.
pub trait LineSink {
    /// Write one line.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the line could not be written.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Writes lines to the process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

/// Writes lines to the process's standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LineSink for StderrSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut err = io::stderr().lock();
        writeln!(err, "{}", line)
    }
}

/// Captures lines in memory.
///
/// Clones share the same buffer, so a test can hand one clone to a listener
/// and inspect the other.
///
/// # Examples
///
/// ```rust
/// use severity_notify::sinks::{LineSink, MemorySink};
///
/// let sink = MemorySink::new();
/// let writer = sink.clone();
/// writer.write_line("hello").unwrap();
///
/// assert_eq!(sink.lines(), vec!["hello"]);
/// assert_eq!(sink.contents(), "hello\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Everything written so far, each line terminated by `\n`.
    pub fn contents(&self) -> String {
        self.lines
            .lock()
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl LineSink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}

/// Write a line, logging instead of failing if the sink rejects it.
pub(crate) fn emit(sink: &dyn LineSink, line: &str) {
    if let Err(_err) = sink.write_line(line) {
        #[cfg(feature = "tracing")]
        tracing::warn!(error = %_err, "console write failed");
    }
}
