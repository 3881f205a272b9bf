//! tags command - List registered dynamic tags

use anyhow::Result;

use crate::cli::Context;
use crate::tags::TagRegistry;
use crate::ui::output::{self, Verbosity};

/// Print one line per registered tag.
///
/// In quiet mode only the ids are printed, which keeps the output easy to
/// consume from scripts.
pub fn tags(ctx: &Context) -> Result<()> {
    let registry = TagRegistry::builtin();

    if ctx.verbosity == Verbosity::Quiet {
        for tag in registry.list_tags() {
            println!("{}", tag.id());
        }
        return Ok(());
    }

    let width = registry
        .list_tags()
        .iter()
        .map(|t| t.id().len())
        .max()
        .unwrap_or(0);
    for tag in registry.list_tags() {
        output::print(output::format_tag(tag, width), ctx.verbosity);
    }
    Ok(())
}
