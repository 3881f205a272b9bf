//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! Each handler builds what it needs from the [`Context`], runs it, and
//! prints the result. JSON-producing commands print their JSON even with
//! `--quiet`; only human-oriented text is suppressed.

mod actions;
mod ajax;
mod completion;
mod config_cmd;
mod resolve;
mod tags;

pub use actions::actions;
pub use ajax::ajax;
pub use completion::{completion, write_completion};
pub use config_cmd::show_config;
pub use resolve::resolve;
pub use tags::tags;

use anyhow::Result;

use super::args::Command;
use super::Context;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Tags => tags(ctx),
        Command::Resolve { post_id, pretty } => resolve(ctx, &post_id, pretty),
        Command::Ajax {
            action,
            params,
            pretty,
        } => ajax(ctx, &action, params.as_deref(), pretty),
        Command::Actions => actions(ctx),
        Command::Config => show_config(ctx),
        Command::Completion { shell } => completion(shell),
    }
}
