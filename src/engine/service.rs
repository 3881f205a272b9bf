//! engine::service
//!
//! The resolution service: one request in, one option map out.
//!
//! # Lifecycle
//!
//! 1. Validate the request (a post id is required)
//! 2. Resolve the post's field group once
//! 3. Build option groups for every registered tag, in registry order
//!
//! Nothing is cached between calls and nothing is written, so concurrent
//! calls need no coordination.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use super::request::{ResolutionResult, ResolveError, ResolveRequest, Response};
use crate::fields::{FieldGroupResolver, FieldStore};
use crate::options::build_option_groups;
use crate::tags::TagRegistry;

/// Resolves which sub-fields each dynamic tag can bind to.
#[derive(Clone)]
pub struct ResolutionService {
    registry: TagRegistry,
    store: Arc<dyn FieldStore>,
}

impl ResolutionService {
    pub fn new(registry: TagRegistry, store: Arc<dyn FieldStore>) -> Self {
        Self { registry, store }
    }

    /// The tag registry this service resolves against.
    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    /// Resolve option groups for every registered tag.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidRequest`] if the request has no post
    /// id. The store is not consulted in that case.
    pub fn resolve(&self, request: &ResolveRequest) -> Result<ResolutionResult, ResolveError> {
        let post_id = request
            .post_id
            .as_ref()
            .ok_or(ResolveError::InvalidRequest)?;

        let field_group = FieldGroupResolver::new(self.store.as_ref()).resolve_field_group(post_id);

        let mut tags = IndexMap::with_capacity(self.registry.len());
        for tag in self.registry.list_tags() {
            let groups = build_option_groups(field_group.as_ref(), tag.accepted_kinds());
            tags.insert(tag.id().to_string(), groups);
        }

        debug!(
            post_id = %post_id,
            tags = tags.len(),
            has_field_group = field_group.is_some(),
            "resolved dynamic tag options"
        );

        Ok(ResolutionResult { tags })
    }

    /// Handle a host parameter bag and produce the wire response.
    pub fn handle(&self, params: &Value) -> Response {
        let request = ResolveRequest::from_params(params);
        self.resolve(&request).into()
    }
}

impl std::fmt::Debug for ResolutionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionService")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
