//! Builder for loading a [`DemoConfig`].

use super::{DEFAULT_CONFIG_FILE, DemoConfig, Validate};
use crate::error::{NotifyError, Result};
use ::config::{Config, Environment, File};
use std::path::PathBuf;

/// Builder for loading the demonstration settings.
///
/// Layers are merged in increasing priority: built-in defaults, the optional
/// default file, explicitly added files (in the order given), then
/// environment variables.
///
/// # Examples
///
/// ```rust,no_run
/// use severity_notify::settings::{DemoConfig, ENV_PREFIX};
///
/// # fn example() -> severity_notify::error::Result<()> {
/// // SEVERITY_NOTIFY_ERROR_LOG=/var/log/app/errors.txt -> error_log
/// let config = DemoConfig::builder()
///     .with_default_file()
///     .with_env_overrides(ENV_PREFIX)
///     .load()?;
/// println!("errors go to {}", config.error_log.display());
/// # Ok(())
/// # }
/// ```
pub struct DemoConfigBuilder {
    default_file: bool,
    file_paths: Vec<PathBuf>,
    env_prefix: Option<String>,
}

impl DemoConfigBuilder {
    /// Create a builder that only uses the built-in defaults.
    pub fn new() -> Self {
        Self {
            default_file: false,
            file_paths: Vec::new(),
            env_prefix: None,
        }
    }

    /// Also read `severity-notify.{toml,yaml,json}` from the working directory
    /// if it exists.
    pub fn with_default_file(mut self) -> Self {
        self.default_file = true;
        self
    }

    /// Add a required file source. The format is taken from the extension.
    ///
    /// Later files override earlier ones.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_paths.push(path.into());
        self
    }

    /// Read overrides from environment variables named `<PREFIX>_<FIELD>`.
    pub fn with_env_overrides(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Merge all layers and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required file is missing or cannot be parsed
    /// - A value cannot be deserialized
    /// - Validation fails
    pub fn load(self) -> Result<DemoConfig> {
        let defaults = DemoConfig::default();
        let mut builder = Config::builder()
            .set_default("error_log", defaults.error_log.to_string_lossy().into_owned())?
            .set_default("fatal_log", defaults.fatal_log.to_string_lossy().into_owned())?
            .set_default("warning_message", defaults.warning_message)?
            .set_default("error_message", defaults.error_message)?
            .set_default("fatal_message", defaults.fatal_message)?;

        if self.default_file {
            builder = builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));
        }

        for path in self.file_paths {
            builder = builder.add_source(File::from(path).required(true));
        }

        if let Some(prefix) = self.env_prefix {
            builder = builder.add_source(Environment::with_prefix(&prefix));
        }

        let config: DemoConfig = builder
            .build()?
            .try_deserialize()
            .map_err(|e| NotifyError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.validate()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(?config, "configuration loaded");

        Ok(config)
    }
}

impl Default for DemoConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
