//! cli
//!
//! Command-line transport for the resolution pipeline.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and install logging
//! - Build the field store, resolution service and action registry
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It wires configuration into the same
//! [`crate::engine::ResolutionService`] and [`crate::ajax::ActionRegistry`]
//! an embedding host would use, then prints their JSON output.

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::ajax::{ActionRegistry, ActionRegistryBuilder};
use crate::core::config::Config;
use crate::engine::ResolutionService;
use crate::fields::{self, FieldStore};
use crate::tags::TagRegistry;
use crate::ui::output::Verbosity;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "RTAGS_LOG";

/// Everything a command handler needs.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration
    pub config: Config,
    /// `--store` override
    pub store: Option<PathBuf>,
    /// Output verbosity
    pub verbosity: Verbosity,
}

impl Context {
    /// Build the configured field store.
    ///
    /// `--store` always selects the JSON provider; otherwise the config
    /// decides provider and path.
    pub fn field_store(&self) -> Result<Arc<dyn FieldStore>> {
        let (provider, path) = match &self.store {
            Some(path) => (fields::DEFAULT_PROVIDER, Some(path.as_path())),
            None => (self.config.store_provider(), self.config.store_path()),
        };
        let store = fields::create_store(provider, path, self.config.repeater_meta_key())
            .context("Failed to open field store")?;
        Ok(Arc::from(store))
    }

    /// Build the resolution service over the built-in tag registry.
    pub fn service(&self) -> Result<ResolutionService> {
        Ok(ResolutionService::new(
            TagRegistry::builtin(),
            self.field_store()?,
        ))
    }

    /// Build the editor action registry.
    pub fn actions(&self) -> Result<ActionRegistry> {
        let service = Arc::new(self.service()?);
        let actions = ActionRegistryBuilder::new()
            .register_resolution(service)
            .context("Failed to register editor actions")?
            .build();
        Ok(actions)
    }
}

/// Install the stderr `tracing` subscriber.
///
/// `RTAGS_LOG` wins, then `--debug`, then the configured level.
pub fn init_logging(debug: bool, config: &Config) {
    let fallback = if debug { "debug" } else { config.log_level() };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    init_logging(cli.debug, &config);

    let ctx = Context {
        config,
        store: cli.store.clone(),
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
    };

    commands::dispatch(cli.command, &ctx)
}
