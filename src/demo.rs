//! The demonstration sequence run by the `severity-notify` binary.

use crate::core::Subject;
use crate::error::Result;
use crate::listeners::{ConsoleAndFileFatalListener, ConsoleWarningListener, FileErrorListener};
use crate::settings::DemoConfig;

/// Register one of each provided listener and broadcast one notification of
/// every severity.
///
/// Output goes to the process's standard streams and to the two log files
/// named by `config`.
pub fn run(config: &DemoConfig) -> Result<()> {
    let warnings = ConsoleWarningListener::new();
    let errors = FileErrorListener::new(&config.error_log);
    let fatal = ConsoleAndFileFatalListener::new(&config.fatal_log);

    let mut subject = Subject::new();
    subject.register(&warnings);
    subject.register(&errors);
    subject.register(&fatal);

    subject.notify_warning(&config.warning_message)?;
    subject.notify_error(&config.error_message)?;
    subject.notify_fatal(&config.fatal_message)?;
    Ok(())
}
