//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--config <path>`: Read this config file instead of searching
//! - `--store <path>`: Use this JSON field store (overrides config)
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rtags - Resolve which dynamic tags can bind to which repeater sub-fields
#[derive(Parser, Debug)]
#[command(name = "rtags")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON field store to read (overrides store.path from config)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered dynamic tags and the field kinds they accept
    Tags,

    /// Resolve binding options for a post
    Resolve {
        /// Post id to resolve
        post_id: String,

        /// Pretty-print the JSON response
        #[arg(long)]
        pretty: bool,
    },

    /// Dispatch a named editor action with a JSON parameter bag
    Ajax {
        /// Action name, e.g. update_dynamic_tag_controls
        action: String,

        /// JSON parameters (read from stdin when omitted)
        #[arg(long)]
        params: Option<String>,

        /// Pretty-print the JSON response
        #[arg(long)]
        pretty: bool,
    },

    /// List registered editor actions and the editor script asset
    Actions,

    /// Show the effective configuration
    Config,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
