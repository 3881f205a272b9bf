//! ajax command - Dispatch a named editor action
//!
//! Mirrors what the host editor does on each request: look up the action by
//! name, hand it the JSON parameter bag, and print what comes back.

use std::io::Read;

use anyhow::{Context as _, Result};
use serde_json::Value;

use crate::cli::Context;
use crate::ui::output;

/// Dispatch `action` with `params` (or stdin when `params` is `None`).
pub fn ajax(ctx: &Context, action: &str, params: Option<&str>, pretty: bool) -> Result<()> {
    let raw = match params {
        Some(raw) => raw.to_string(),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read parameters from stdin")?;
            buffer
        }
    };
    let params = parse_params(&raw)?;

    let actions = ctx.actions()?;
    let reply = actions
        .dispatch(action, &params)
        .with_context(|| format!("Action '{}' failed", action))?;

    output::print_json(&reply, pretty).context("Failed to encode response")?;
    Ok(())
}

/// Parse a parameter bag. Blank input is an empty bag.
fn parse_params(raw: &str) -> Result<Value> {
    if raw.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_str(raw).context("Parameters are not valid JSON")
}
