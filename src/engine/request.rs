//! engine::request
//!
//! Request and response shapes exchanged with the host editor.
//!
//! # Wire Format
//!
//! Request parameter bag (only `post_id` is read):
//!
//! ```json
//! { "post_id": 42 }
//! ```
//!
//! Successful response:
//!
//! ```json
//! { "tags": { "elementor-acf-repeater-text": [ { "label": "Items", "options": { "f1": "Name" } } ] } }
//! ```
//!
//! Rejected request:
//!
//! ```json
//! { "error": "No post id given." }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::core::types::PostId;
use crate::options::OptionGroup;

/// Errors that stop a resolution before any lookup happens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The request carried no post id.
    #[error("No post id given.")]
    InvalidRequest,
}

/// A resolution request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveRequest {
    pub post_id: Option<PostId>,
}

impl ResolveRequest {
    /// Request options for a post.
    pub fn for_post(post_id: impl Into<PostId>) -> Self {
        Self {
            post_id: Some(post_id.into()),
        }
    }

    /// Extract a request from a host parameter bag.
    ///
    /// `post_id` may be a string or an integer. A missing or `null` value,
    /// any other JSON type, or a bag that is not an object leaves the post id
    /// unset.
    pub fn from_params(params: &Value) -> Self {
        let post_id = match params.get("post_id") {
            Some(Value::String(id)) => Some(PostId::new(id.clone())),
            Some(Value::Number(n)) => Some(PostId::new(n.to_string())),
            None | Some(Value::Null) => None,
            Some(other) => {
                debug!(value = %other, "ignoring post_id of unsupported type");
                None
            }
        };
        Self { post_id }
    }
}

/// Option groups per tag, keyed by tag id in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub tags: IndexMap<String, Vec<OptionGroup>>,
}

/// Wire response handed back to the host dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Resolved(ResolutionResult),
    Error { error: String },
}

impl From<Result<ResolutionResult, ResolveError>> for Response {
    fn from(result: Result<ResolutionResult, ResolveError>) -> Self {
        match result {
            Ok(resolved) => Response::Resolved(resolved),
            Err(e) => Response::Error {
                error: e.to_string(),
            },
        }
    }
}
