//! Configuration of the demonstration driver.
//!
//! Values are layered with the `config` crate: built-in defaults first, then
//! an optional file, then environment variables. Layering is opt-in through
//! [`DemoConfigBuilder`]; the `severity-notify` binary always runs with
//! [`DemoConfig::default`].

mod builder;
mod validation;

pub use builder::DemoConfigBuilder;
pub use validation::Validate;

use crate::error::ValidationError;
use serde::Deserialize;
use std::path::PathBuf;

/// Default error log path, relative to the working directory.
pub const DEFAULT_ERROR_LOG: &str = "error_log.txt";
/// Default fatal error log path, relative to the working directory.
pub const DEFAULT_FATAL_LOG: &str = "fatal_error_log.txt";
/// Base name of the optional configuration file (`.toml`, `.yaml` or `.json`).
pub const DEFAULT_CONFIG_FILE: &str = "severity-notify";
/// Prefix of environment variable overrides, e.g. `SEVERITY_NOTIFY_ERROR_LOG`.
pub const ENV_PREFIX: &str = "SEVERITY_NOTIFY";

/// Settings of the demonstration sequence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemoConfig {
    /// File receiving `Error: <message>` lines.
    pub error_log: PathBuf,
    /// File receiving `Fatal Error: <message>` lines.
    pub fatal_log: PathBuf,
    /// Message broadcast as a warning.
    pub warning_message: String,
    /// Message broadcast as an error.
    pub error_message: String,
    /// Message broadcast as a fatal error.
    pub fatal_message: String,
}

impl DemoConfig {
    /// Create a new builder for loading the configuration.
    pub fn builder() -> DemoConfigBuilder {
        DemoConfigBuilder::new()
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            error_log: PathBuf::from(DEFAULT_ERROR_LOG),
            fatal_log: PathBuf::from(DEFAULT_FATAL_LOG),
            warning_message: "This is a warning message.".to_string(),
            error_message: "This is an error message.".to_string(),
            fatal_message: "This is a fatal error message.".to_string(),
        }
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.error_log.as_os_str().is_empty() {
            return Err(ValidationError::invalid_field("error_log", "must not be empty"));
        }
        if self.fatal_log.as_os_str().is_empty() {
            return Err(ValidationError::invalid_field("fatal_log", "must not be empty"));
        }
        Ok(())
    }
}
