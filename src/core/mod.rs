//! Core dispatch types: severities, the listener capability and the subject.

mod listener;
mod severity;
mod subject;

pub use listener::Listener;
pub use severity::Severity;
pub use subject::Subject;
