//! Configuration validation support.

use crate::error::ValidationError;

/// Trait for configuration validation.
///
/// Checked by [`DemoConfigBuilder::load`](super::DemoConfigBuilder::load)
/// after all layers are merged.
pub trait Validate {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Should return a `ValidationError` describing what validation failed.
    fn validate(&self) -> Result<(), ValidationError>;
}
