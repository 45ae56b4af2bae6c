//! Line-oriented output targets used by the provided listeners.
//!
//! Console output goes through the [`LineSink`] trait so listeners can be
//! pointed at the process streams or at an in-memory capture. Log files are
//! written through [`append_line`], which opens, writes and releases the file
//! within a single call.

mod console;
mod file;

pub use console::{LineSink, MemorySink, StderrSink, StdoutSink};
pub use file::{append_line, append_or_report};

pub(crate) use console::emit;
