//! resolve command - Resolve binding options for one post

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::types::PostId;
use crate::engine::{ResolveRequest, Response};
use crate::ui::output;

/// Resolve and print the wire response for `post_id`.
pub fn resolve(ctx: &Context, post_id: &str, pretty: bool) -> Result<()> {
    let service = ctx.service()?;
    let response: Response = service
        .resolve(&ResolveRequest::for_post(PostId::new(post_id)))
        .into();
    output::print_json(&response, pretty).context("Failed to encode response")?;
    Ok(())
}
