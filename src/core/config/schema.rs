//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: the store provider must be a
//! known provider, the meta key cannot be empty, and the log level must be
//! one `tracing` understands.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Log levels accepted in `log_level`.
pub const VALID_LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Contents of `config.toml`.
///
/// # Example
///
/// ```toml
/// log_level = "info"
///
/// [store]
/// provider = "json"
/// path = "/var/lib/site/fields.json"
/// repeater_meta_key = "_ear_field"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Default log level when `RTAGS_LOG` is not set
    pub log_level: Option<String>,

    /// Field store settings
    pub store: Option<StoreConfig>,
}

impl ConfigFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = &self.log_level {
            if !VALID_LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid log_level '{}', must be one of: {}",
                    level,
                    VALID_LOG_LEVELS.join(", ")
                )));
            }
        }

        if let Some(store) = &self.store {
            store.validate()?;
        }

        Ok(())
    }
}

/// Field store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Provider to use ("json" or "memory")
    pub provider: Option<String>,

    /// Path to the JSON store file
    pub path: Option<PathBuf>,

    /// Post meta key holding the repeater field key
    pub repeater_meta_key: Option<String>,
}

impl StoreConfig {
    /// Validate the store configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(provider) = &self.provider {
            let valid = crate::fields::valid_provider_names();
            if !valid.contains(&provider.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid store provider '{}', must be one of: {}",
                    provider,
                    valid.join(", ")
                )));
            }
        }

        if let Some(key) = &self.repeater_meta_key {
            if key.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "repeater_meta_key cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
