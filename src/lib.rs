//! # severity-notify
//!
//! Synchronous broadcasting of warning, error and fatal notifications to
//! registered listeners.
//!
//! ## Overview
//!
//! A [`Subject`](core::Subject) keeps an ordered list of borrowed
//! [`Listener`](core::Listener)s. Each notify call runs the matching reaction
//! of every listener, in registration order, on the caller's thread.
//!
//! Three listeners are provided:
//! - [`ConsoleWarningListener`](listeners::ConsoleWarningListener): prints warnings
//! - [`FileErrorListener`](listeners::FileErrorListener): appends errors to a file
//! - [`ConsoleAndFileFatalListener`](listeners::ConsoleAndFileFatalListener): prints
//!   fatal errors and appends them to a file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use severity_notify::prelude::*;
//!
//! # fn example() -> Result<()> {
//! let warnings = ConsoleWarningListener::new();
//! let errors = FileErrorListener::new("error_log.txt");
//! let fatal = ConsoleAndFileFatalListener::new("fatal_error_log.txt");
//!
//! let mut subject = Subject::new();
//! subject.register(&warnings);
//! subject.register(&errors);
//! subject.register(&fatal);
//!
//! subject.notify_warning("cache miss rate above 50%")?;
//! subject.notify_error("request to billing failed")?;
//! subject.notify_fatal("out of disk space")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing` (default): debug events for registration and dispatch, and
//!   warnings for contained file failures.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod demo;
pub mod error;
pub mod listeners;
pub mod settings;
pub mod sinks;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{Listener, Severity, Subject};
    pub use crate::error::{NotifyError, Result};
    pub use crate::listeners::{
        ConsoleAndFileFatalListener, ConsoleWarningListener, FileErrorListener,
    };
}
