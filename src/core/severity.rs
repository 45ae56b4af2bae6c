//! Severity categories carried by notifications.

use std::fmt;

/// The category of a notification.
///
/// Listeners react to each category through a dedicated method on
/// [`Listener`](crate::core::Listener).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Something unexpected happened but work continues.
    Warning,
    /// An operation failed.
    Error,
    /// A failure the program cannot recover from.
    Fatal,
}

impl Severity {
    /// All severities, from least to most severe.
    pub const ALL: [Severity; 3] = [Severity::Warning, Severity::Error, Severity::Fatal];

    /// The prefix written in front of messages of this severity.
    ///
    /// ```rust
    /// use severity_notify::core::Severity;
    ///
    /// assert_eq!(Severity::Fatal.prefix(), "Fatal Error: ");
    /// ```
    pub fn prefix(self) -> &'static str {
        match self {
            Severity::Warning => "Warning: ",
            Severity::Error => "Error: ",
            Severity::Fatal => "Fatal Error: ",
        }
    }

    /// Render a message as a single output line (without the line break).
    pub fn line(self, message: &str) -> String {
        format!("{}{}", self.prefix(), message)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        };
        f.write_str(name)
    }
}
