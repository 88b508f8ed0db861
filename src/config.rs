//! Model configuration.
//!
//! The constraint delimiter must match between the write and read paths, so
//! it is held in one process-wide [`ModelConfig`]. Install it once at startup
//! with [`install`]; anything that asks for [`global`] before that sees the
//! defaults.

use crate::{
    error::{Error, Result},
    hierarchy::HierarchyConfig,
};
use std::sync::OnceLock;

#[cfg(feature = "audit")]
use log::info;

/// Delimiter used by the directory for encoded constraint records.
pub const DEFAULT_DELIMITER: char = '$';

static GLOBAL: OnceLock<ModelConfig> = OnceLock::new();

/// Configuration for the constraint codec.
///
/// Only obtainable through [`CodecConfig::new`] or [`Default`], so every
/// value holds a valid delimiter:
///
/// ```compile_fail
/// use directory_rbac::CodecConfig;
///
/// let config = CodecConfig { delimiter: 't' };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    delimiter: char,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl CodecConfig {
    /// Create a codec configuration with the given delimiter.
    pub fn new(delimiter: char) -> Result<Self> {
        let config = Self { delimiter };
        config.validate()?;
        Ok(config)
    }

    /// Character separating fields of an encoded constraint.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Check that the delimiter cannot collide with ordinary field content.
    ///
    /// Alphanumerics, whitespace, control characters, and the `=`/`&`
    /// characters used inside constraint values are rejected.
    pub fn validate(&self) -> Result<()> {
        let d = self.delimiter;
        if d.is_alphanumeric() || d.is_whitespace() || d.is_control() || d == '=' || d == '&' {
            return Err(Error::InvalidConfiguration(format!(
                "'{}' cannot be used as a constraint delimiter",
                d.escape_default()
            )));
        }
        Ok(())
    }
}

/// Top-level configuration for the data model.
#[derive(Debug, Clone, Default)]
pub struct ModelConfig {
    /// Constraint codec settings.
    pub codec: CodecConfig,
    /// Hierarchy engine settings.
    pub hierarchy: HierarchyConfig,
}

/// Builder for [`ModelConfig`].
///
/// # Example
/// ```rust
/// use directory_rbac::config::ModelConfigBuilder;
///
/// let config = ModelConfigBuilder::new()
///     .delimiter('|')
///     .max_depth(20)
///     .build()?;
/// assert_eq!(config.codec.delimiter(), '|');
/// # Ok::<(), directory_rbac::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ModelConfigBuilder {
    config: ModelConfig,
}

impl ModelConfigBuilder {
    /// Create a new builder seeded with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the constraint delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.codec.delimiter = delimiter;
        self
    }

    /// Set the maximum hierarchy depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.hierarchy.max_hierarchy_depth = depth;
        self
    }

    /// Set the maximum number of nodes visited by one traversal.
    pub fn max_traversal_size(mut self, size: usize) -> Self {
        self.config.hierarchy.max_traversal_size = size;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<ModelConfig> {
        self.config.codec.validate()?;
        if self.config.hierarchy.max_hierarchy_depth == 0 {
            return Err(Error::InvalidConfiguration(
                "max_hierarchy_depth must be at least 1".to_string(),
            ));
        }
        Ok(self.config)
    }
}

/// Install the process-wide configuration.
///
/// Fails with [`Error::ConfigAlreadyInstalled`] if a configuration was
/// installed, or already read through [`global`], earlier.
pub fn install(config: ModelConfig) -> Result<()> {
    config.codec.validate()?;

    #[cfg(feature = "audit")]
    let delimiter = config.codec.delimiter;

    GLOBAL.set(config).map_err(|_| Error::ConfigAlreadyInstalled)?;

    #[cfg(feature = "audit")]
    info!("Model configuration installed with constraint delimiter '{delimiter}'");

    Ok(())
}

/// The process-wide configuration, defaulting on first read.
pub fn global() -> &'static ModelConfig {
    GLOBAL.get_or_init(ModelConfig::default)
}
