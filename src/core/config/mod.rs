//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$RTAGS_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/rtags/config.toml`
//! 3. `~/.rtags/config.toml` (canonical location)
//!
//! # Example
//!
//! ```no_run
//! use repeater_tags::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Store provider: {}", config.store_provider());
//! println!("Meta key: {}", config.repeater_meta_key());
//! ```

pub mod schema;

pub use schema::{ConfigFile, StoreConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::fields::{DEFAULT_META_KEY, DEFAULT_PROVIDER};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "RTAGS_CONFIG";

/// Default log level when neither config nor environment sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents (all fields optional)
    pub file: ConfigFile,
    /// Path the file was loaded from, if any
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. A missing config file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    fn find_config_file() -> Option<PathBuf> {
        // 1. $RTAGS_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. $XDG_CONFIG_HOME/rtags/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("rtags/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. ~/.rtags/config.toml
        let path = Self::default_config_path().ok()?;
        path.exists().then_some(path)
    }

    /// Canonical config path, `~/.rtags/config.toml`.
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".rtags/config.toml"))
    }

    /// Path the config was loaded from, if a file was found.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn store(&self) -> Option<&StoreConfig> {
        self.file.store.as_ref()
    }

    /// Field store provider (default: `json`).
    pub fn store_provider(&self) -> &str {
        self.store()
            .and_then(|s| s.provider.as_deref())
            .unwrap_or(DEFAULT_PROVIDER)
    }

    /// Path to the JSON store, if configured.
    pub fn store_path(&self) -> Option<&Path> {
        self.store().and_then(|s| s.path.as_deref())
    }

    /// Post meta key holding the repeater key (default: `_ear_field`).
    pub fn repeater_meta_key(&self) -> &str {
        self.store()
            .and_then(|s| s.repeater_meta_key.as_deref())
            .unwrap_or(DEFAULT_META_KEY)
    }

    /// Log level (default: `warn`).
    pub fn log_level(&self) -> &str {
        self.file.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
