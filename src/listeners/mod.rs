//! Provided listener implementations.

mod console_and_file_fatal;
mod console_warning;
mod file_error;

pub use console_and_file_fatal::ConsoleAndFileFatalListener;
pub use console_warning::ConsoleWarningListener;
pub use file_error::FileErrorListener;
