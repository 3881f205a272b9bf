//! config command - Show the effective configuration

use anyhow::Result;

use crate::cli::Context;
use crate::ui::output;

/// Print effective settings and where they came from.
pub fn show_config(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    let source = config
        .loaded_from()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults)".to_string());

    let (provider, path) = match &ctx.store {
        Some(path) => ("json (--store)", Some(path.as_path())),
        None => (config.store_provider(), config.store_path()),
    };
    let path = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(unset)".to_string());

    output::print(format!("config: {}", source), ctx.verbosity);
    output::print(format!("log_level: {}", config.log_level()), ctx.verbosity);
    output::print(format!("store.provider: {}", provider), ctx.verbosity);
    output::print(format!("store.path: {}", path), ctx.verbosity);
    output::print(
        format!("store.repeater_meta_key: {}", config.repeater_meta_key()),
        ctx.verbosity,
    );
    Ok(())
}
