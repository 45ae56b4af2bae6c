//! The listener capability.

use crate::core::Severity;
use crate::error::Result;

/// A reaction to severity notifications.
///
/// Every reaction defaults to a no-op, so an implementation only overrides
/// the severities it cares about.
///
/// # Examples
///
/// ```rust
/// use severity_notify::prelude::*;
///
/// struct Pager;
///
/// impl Listener for Pager {
///     fn on_fatal_error(&self, message: &str) -> Result<()> {
///         println!("paging on-call: {}", message);
///         Ok(())
///     }
/// }
///
/// let pager = Pager;
/// let mut subject = Subject::new();
/// subject.register(&pager);
/// subject.notify_warning("ignored by the pager").unwrap();
/// ```
pub trait Listener {
    /// Called for every warning notification.
    fn on_warning(&self, _message: &str) -> Result<()> {
        Ok(())
    }

    /// Called for every error notification.
    fn on_error(&self, _message: &str) -> Result<()> {
        Ok(())
    }

    /// Called for every fatal notification.
    fn on_fatal_error(&self, _message: &str) -> Result<()> {
        Ok(())
    }

    /// Route a notification to the reaction matching its severity.
    fn react(&self, severity: Severity, message: &str) -> Result<()> {
        match severity {
            Severity::Warning => self.on_warning(message),
            Severity::Error => self.on_error(message),
            Severity::Fatal => self.on_fatal_error(message),
        }
    }
}
