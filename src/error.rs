//! Error types for severity-notify.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for severity-notify operations.
pub type Result<T> = std::result::Result<T, NotifyError>;

/// Errors that can occur while dispatching or reacting to notifications.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// A log file could not be opened for appending.
    #[error("Failed to open file: {}", path.display())]
    Open {
        /// The path that could not be opened
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A log file was opened but the line could not be written.
    #[error("Failed to write file: {}", path.display())]
    Write {
        /// The path that was being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to load the driver configuration.
    #[error("Failed to load configuration: {0}")]
    Config(String),

    /// Configuration validation failed.
    #[error("Configuration validation failed: {0}")]
    Validation(String),

    /// A listener failed while reacting to a notification.
    #[error("Listener failed: {0}")]
    Listener(String),
}

impl NotifyError {
    /// Create a listener failure with a message.
    pub fn listener(msg: impl Into<String>) -> Self {
        Self::Listener(msg.into())
    }
}

impl From<::config::ConfigError> for NotifyError {
    fn from(err: ::config::ConfigError) -> Self {
        NotifyError::Config(err.to_string())
    }
}

/// A configuration field failed validation.
#[derive(Debug)]
pub struct ValidationError {
    /// The field name
    pub field: String,
    /// The reason why it's invalid
    pub reason: String,
}

impl ValidationError {
    /// Create an invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field '{}' is invalid: {}", self.field, self.reason)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for NotifyError {
    fn from(err: ValidationError) -> Self {
        NotifyError::Validation(err.to_string())
    }
}
