//! fields::resolver
//!
//! Resolve the repeater field group attached to a post.
//!
//! # Failure Policy
//!
//! A post with no repeater configured is an expected state, not an error.
//! Every way a lookup can come up empty degrades to `None`:
//!
//! - no repeater key stored for the post
//! - an empty repeater key
//! - a key that names no field group
//! - a store error on either lookup (logged at `warn`)
//!
//! Lookups are never retried.

use tracing::{debug, warn};

use super::traits::{FieldGroup, FieldStore};
use crate::core::types::PostId;

/// Resolves posts to their repeater field group.
#[derive(Clone, Copy)]
pub struct FieldGroupResolver<'a> {
    store: &'a dyn FieldStore,
}

impl<'a> FieldGroupResolver<'a> {
    pub fn new(store: &'a dyn FieldStore) -> Self {
        Self { store }
    }

    /// Find the field group configured for `post_id`, if any.
    pub fn resolve_field_group(&self, post_id: &PostId) -> Option<FieldGroup> {
        let key = match self.store.repeater_key(post_id) {
            Ok(Some(key)) if !key.is_empty() => key,
            Ok(_) => {
                debug!(post_id = %post_id, "no repeater key stored");
                return None;
            }
            Err(e) => {
                warn!(post_id = %post_id, error = %e, "repeater key lookup failed");
                return None;
            }
        };

        match self.store.field_group(&key) {
            Ok(Some(group)) => {
                debug!(
                    post_id = %post_id,
                    key = %key,
                    sub_fields = group.sub_fields.len(),
                    "resolved field group"
                );
                Some(group)
            }
            Ok(None) => {
                debug!(post_id = %post_id, key = %key, "repeater key names no field group");
                None
            }
            Err(e) => {
                warn!(post_id = %post_id, key = %key, error = %e, "field group lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::memory_store::{FailOn, MemoryFieldStore, StoreOperation};
    use crate::fields::traits::{StoreError, SubField};

    fn post() -> PostId {
        PostId::from(42u64)
    }

    fn items() -> FieldGroup {
        FieldGroup::new(
            "Items",
            vec![
                SubField::new("f1", "Name", "text"),
                SubField::new("f2", "Photo", "image"),
            ],
        )
    }

    fn configured_store() -> MemoryFieldStore {
        let store = MemoryFieldStore::new();
        store.set_repeater_key(post(), "field_items");
        store.insert_field_group("field_items", items());
        store
    }

    #[test]
    fn resolves_configured_group() {
        let store = configured_store();
        let resolver = FieldGroupResolver::new(&store);
        assert_eq!(resolver.resolve_field_group(&post()), Some(items()));
    }

    #[test]
    fn no_key_is_absent_without_group_lookup() {
        let store = MemoryFieldStore::new();
        let resolver = FieldGroupResolver::new(&store);
        assert_eq!(resolver.resolve_field_group(&post()), None);
        assert_eq!(
            store.operations(),
            vec![StoreOperation::RepeaterKey { post_id: post() }]
        );
    }

    #[test]
    fn empty_key_is_absent_without_group_lookup() {
        let store = MemoryFieldStore::new();
        store.set_repeater_key(post(), "");
        store.insert_field_group("", items());
        let resolver = FieldGroupResolver::new(&store);
        assert_eq!(resolver.resolve_field_group(&post()), None);
        assert_eq!(store.operations().len(), 1);
    }

    #[test]
    fn missing_group_is_absent() {
        let store = MemoryFieldStore::new();
        store.set_repeater_key(post(), "field_gone");
        let resolver = FieldGroupResolver::new(&store);
        assert_eq!(resolver.resolve_field_group(&post()), None);
    }

    #[test]
    fn key_lookup_error_degrades_to_absent() {
        let store = configured_store()
            .fail_on(FailOn::RepeaterKey(StoreError::ReadError("io".into())));
        let resolver = FieldGroupResolver::new(&store);
        assert_eq!(resolver.resolve_field_group(&post()), None);
    }

    #[test]
    fn group_lookup_error_degrades_to_absent() {
        let store = configured_store()
            .fail_on(FailOn::FieldGroup(StoreError::ParseError("bad".into())));
        let resolver = FieldGroupResolver::new(&store);
        assert_eq!(resolver.resolve_field_group(&post()), None);
    }
}
