//! File logging for errors.

use crate::core::{Listener, Severity};
use crate::error::Result;
use crate::sinks::{LineSink, StderrSink, append_or_report};
use std::path::{Path, PathBuf};

/// Appends `Error: <message>` to a log file for every error.
///
/// The file is opened in append mode for each error and closed right after.
/// If it cannot be opened, `Failed to open file: <path>` is written to
/// standard error and the notification continues normally.
///
/// # Examples
///
/// ```rust,no_run
/// use severity_notify::prelude::*;
///
/// let listener = FileErrorListener::new("error_log.txt");
/// let mut subject = Subject::new();
/// subject.register(&listener);
/// subject.notify_error("database unreachable")?;
/// # Ok::<(), severity_notify::error::NotifyError>(())
/// ```
pub struct FileErrorListener {
    path: PathBuf,
    diagnostics: Box<dyn LineSink>,
}

impl FileErrorListener {
    /// Create a listener appending to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            diagnostics: Box::new(StderrSink),
        }
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

impl Listener for FileErrorListener {
    fn on_error(&self, message: &str) -> Result<()> {
        append_or_report(
            &self.path,
            &Severity::Error.line(message),
            self.diagnostics.as_ref(),
        );
        Ok(())
    }
}
