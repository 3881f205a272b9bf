//! actions command - List editor actions and the script the editor loads

use anyhow::Result;

use crate::ajax::EDITOR_SCRIPT;
use crate::cli::Context;
use crate::ui::output;

/// Print registered action names, then the editor script asset.
pub fn actions(ctx: &Context) -> Result<()> {
    let registry = ctx.actions()?;
    let names: Vec<&str> = registry.action_names().collect();

    output::print("Actions:", ctx.verbosity);
    output::print(output::format_list(&names, "  "), ctx.verbosity);
    output::print(
        format!(
            "Editor script: {} ({} v{}{})",
            EDITOR_SCRIPT.handle,
            EDITOR_SCRIPT.path,
            EDITOR_SCRIPT.version,
            if EDITOR_SCRIPT.in_footer {
                ", footer"
            } else {
                ""
            }
        ),
        ctx.verbosity,
    );
    Ok(())
}
