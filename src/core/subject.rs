//! The subject: listener registry and synchronous broadcaster.

use crate::core::{Listener, Severity};
use crate::error::Result;
use std::fmt;

/// Registry of listeners that broadcasts severity notifications.
///
/// The subject borrows its listeners; it never owns them. The lifetime `'a`
/// ties the subject to the listeners it holds, so a listener cannot be
/// dropped while it is still registered.
///
/// Listener identity is the address of the referenced value. Registering the
/// same listener twice is allowed and results in two reactions per
/// notification. Distinct zero-sized listeners may share an address, in which
/// case deregistering one removes the others too.
///
/// # Examples
///
/// ```rust
/// use severity_notify::prelude::*;
/// use severity_notify::sinks::MemorySink;
///
/// let out = MemorySink::new();
/// let console = ConsoleWarningListener::new().with_output(out.clone());
///
/// let mut subject = Subject::new();
/// subject.register(&console);
/// subject.notify_warning("low disk space").unwrap();
///
/// assert_eq!(out.lines(), vec!["Warning: low disk space"]);
/// ```
pub struct Subject<'a> {
    listeners: Vec<&'a dyn Listener>,
}

impl<'a> Subject<'a> {
    /// Create a subject with no listeners.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Append a listener to the registry.
    ///
    /// Duplicates are not rejected.
    pub fn register(&mut self, listener: &'a dyn Listener) {
        self.listeners.push(listener);

        #[cfg(feature = "tracing")]
        tracing::debug!(listeners = self.listeners.len(), "listener registered");
    }

    /// Remove every registration of `listener`.
    ///
    /// Does nothing if the listener is not registered.
    pub fn deregister(&mut self, listener: &dyn Listener) {
        #[cfg(feature = "tracing")]
        let before = self.listeners.len();

        self.listeners
            .retain(|registered| !same_listener(*registered, listener));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            removed = before - self.listeners.len(),
            listeners = self.listeners.len(),
            "listener deregistered"
        );
    }

    /// Whether `listener` currently has at least one registration.
    pub fn is_registered(&self, listener: &dyn Listener) -> bool {
        self.listeners
            .iter()
            .any(|registered| same_listener(*registered, listener))
    }

    /// Number of registrations, counting duplicates.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Broadcast a warning to every listener in registration order.
    pub fn notify_warning(&self, message: &str) -> Result<()> {
        self.notify(Severity::Warning, message)
    }

    /// Broadcast an error to every listener in registration order.
    pub fn notify_error(&self, message: &str) -> Result<()> {
        self.notify(Severity::Error, message)
    }

    /// Broadcast a fatal error to every listener in registration order.
    pub fn notify_fatal(&self, message: &str) -> Result<()> {
        self.notify(Severity::Fatal, message)
    }

    /// Broadcast a notification of the given severity.
    ///
    /// Listeners are called synchronously in registration order. The first
    /// reaction that fails stops the broadcast and its error is returned;
    /// listeners after it are not called for this notification.
    pub fn notify(&self, severity: Severity, message: &str) -> Result<()> {
        #[cfg(feature = "tracing")]
        tracing::debug!(%severity, listeners = self.listeners.len(), "dispatching notification");

        for listener in &self.listeners {
            listener.react(severity, message)?;
        }
        Ok(())
    }
}

impl Default for Subject<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Subject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn same_listener(a: &dyn Listener, b: &dyn Listener) -> bool {
    std::ptr::addr_eq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotifyError;
    use parking_lot::Mutex;
    use std::sync::Arc;

    type Journal = Arc<Mutex<Vec<(usize, Severity, String)>>>;

    /// Records every reaction into a journal shared between listeners.
    struct Recording {
        id: usize,
        journal: Journal,
    }

    impl Recording {
        fn new(id: usize, journal: &Journal) -> Self {
            Self {
                id,
                journal: Arc::clone(journal),
            }
        }

        fn record(&self, severity: Severity, message: &str) -> Result<()> {
            self.journal
                .lock()
                .push((self.id, severity, message.to_string()));
            Ok(())
        }
    }

    impl Listener for Recording {
        fn on_warning(&self, message: &str) -> Result<()> {
            self.record(Severity::Warning, message)
        }

        fn on_error(&self, message: &str) -> Result<()> {
            self.record(Severity::Error, message)
        }

        fn on_fatal_error(&self, message: &str) -> Result<()> {
            self.record(Severity::Fatal, message)
        }
    }

    struct Failing;

    impl Listener for Failing {
        fn on_error(&self, message: &str) -> Result<()> {
            Err(NotifyError::listener(message))
        }
    }

    #[test]
    fn test_notify_in_registration_order() {
        let journal = Journal::default();
        let first = Recording::new(1, &journal);
        let second = Recording::new(2, &journal);

        let mut subject = Subject::new();
        subject.register(&first);
        subject.register(&second);
        subject.notify_warning("w").unwrap();

        assert_eq!(
            *journal.lock(),
            vec![
                (1, Severity::Warning, "w".to_string()),
                (2, Severity::Warning, "w".to_string()),
            ]
        );
    }

    #[test]
    fn test_each_notify_routes_to_its_reaction() {
        let journal = Journal::default();
        let listener = Recording::new(1, &journal);

        let mut subject = Subject::new();
        subject.register(&listener);
        subject.notify_error("e").unwrap();
        subject.notify_fatal("f").unwrap();

        let severities: Vec<Severity> = journal.lock().iter().map(|(_, s, _)| *s).collect();
        assert_eq!(severities, vec![Severity::Error, Severity::Fatal]);
    }

    #[test]
    fn test_duplicate_registration_notifies_twice() {
        let journal = Journal::default();
        let listener = Recording::new(1, &journal);

        let mut subject = Subject::new();
        subject.register(&listener);
        subject.register(&listener);
        assert_eq!(subject.listener_count(), 2);

        subject.notify_error("e").unwrap();
        assert_eq!(journal.lock().len(), 2);
    }

    #[test]
    fn test_deregister_removes_all_occurrences() {
        let journal = Journal::default();
        let kept = Recording::new(1, &journal);
        let removed = Recording::new(2, &journal);

        let mut subject = Subject::new();
        subject.register(&removed);
        subject.register(&kept);
        subject.register(&removed);

        subject.deregister(&removed);
        assert_eq!(subject.listener_count(), 1);
        assert!(!subject.is_registered(&removed));
        assert!(subject.is_registered(&kept));

        subject.notify_fatal("f").unwrap();
        assert_eq!(*journal.lock(), vec![(1, Severity::Fatal, "f".to_string())]);
    }

    #[test]
    fn test_deregister_keeps_past_notifications() {
        let journal = Journal::default();
        let listener = Recording::new(1, &journal);

        let mut subject = Subject::new();
        subject.register(&listener);
        subject.notify_warning("before").unwrap();
        subject.deregister(&listener);
        subject.notify_warning("after").unwrap();

        assert_eq!(
            *journal.lock(),
            vec![(1, Severity::Warning, "before".to_string())]
        );
    }

    #[test]
    fn test_deregister_unknown_is_noop() {
        let journal = Journal::default();
        let registered = Recording::new(1, &journal);
        let stranger = Recording::new(2, &journal);

        let mut subject = Subject::new();
        subject.deregister(&stranger);
        assert!(subject.is_empty());

        subject.register(&registered);
        subject.deregister(&stranger);
        assert_eq!(subject.listener_count(), 1);
    }

    #[test]
    fn test_failing_listener_stops_broadcast() {
        let journal = Journal::default();
        let before = Recording::new(1, &journal);
        let after = Recording::new(2, &journal);
        let failing = Failing;

        let mut subject = Subject::new();
        subject.register(&before);
        subject.register(&failing);
        subject.register(&after);

        let err = subject.notify_error("boom").unwrap_err();
        assert!(matches!(err, NotifyError::Listener(ref msg) if msg == "boom"));
        assert_eq!(*journal.lock(), vec![(1, Severity::Error, "boom".to_string())]);

        // Failing only overrides on_error, so other severities reach everyone.
        subject.notify_warning("w").unwrap();
        assert_eq!(journal.lock().len(), 3);
    }

    #[test]
    fn test_empty_subject_notifies_nothing() {
        let subject = Subject::default();
        assert!(subject.notify_fatal("nobody listening").is_ok());
    }
}
