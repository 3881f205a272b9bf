//! fields::memory_store
//!
//! In-memory field store for deterministic testing and embedding.
//!
//! # Design
//!
//! Repeater keys and field groups live in hash maps behind a shared mutex,
//! so clones observe the same data. Every lookup is recorded, and a lookup
//! can be configured to fail, which lets tests assert both how often the
//! store was consulted and how failures degrade.
//!
//! # Example
//!
//! ```
//! use repeater_tags::core::types::PostId;
//! use repeater_tags::fields::{FieldGroup, FieldStore, MemoryFieldStore, SubField};
//!
//! let store = MemoryFieldStore::new();
//! store.set_repeater_key(PostId::from(1u64), "field_items");
//! store.insert_field_group(
//!     "field_items",
//!     FieldGroup::new("Items", vec![SubField::new("f1", "Name", "text")]),
//! );
//!
//! let key = store.repeater_key(&PostId::from(1u64)).unwrap();
//! assert_eq!(key.as_deref(), Some("field_items"));
//! assert_eq!(store.operations().len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::traits::{FieldGroup, FieldStore, StoreError};
use crate::core::types::PostId;

/// In-memory field store.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MemoryFieldStore {
    inner: Arc<Mutex<MemoryStoreInner>>,
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    repeater_keys: HashMap<PostId, String>,
    groups: HashMap<String, FieldGroup>,
    fail_on: Option<FailOn>,
    operations: Vec<StoreOperation>,
}

/// Which lookup should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    RepeaterKey(StoreError),
    FieldGroup(StoreError),
}

/// Recorded lookup for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOperation {
    RepeaterKey { post_id: PostId },
    FieldGroup { key: String },
}

impl MemoryFieldStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a post with a repeater key.
    pub fn set_repeater_key(&self, post_id: PostId, key: impl Into<String>) {
        let mut inner = self.inner.lock().unwrap();
        inner.repeater_keys.insert(post_id, key.into());
    }

    /// Add or replace a field group.
    pub fn insert_field_group(&self, key: impl Into<String>, group: FieldGroup) {
        let mut inner = self.inner.lock().unwrap();
        inner.groups.insert(key.into(), group);
    }

    /// Remove a field group, returning it if present.
    pub fn remove_field_group(&self, key: &str) -> Option<FieldGroup> {
        let mut inner = self.inner.lock().unwrap();
        inner.groups.remove(key)
    }

    /// Configure a lookup to fail.
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_on = Some(fail_on);
        }
        self
    }

    /// Clear the failure configuration.
    pub fn clear_fail_on(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_on = None;
    }

    /// All recorded lookups, oldest first.
    pub fn operations(&self) -> Vec<StoreOperation> {
        let inner = self.inner.lock().unwrap();
        inner.operations.clone()
    }

    /// Forget recorded lookups.
    pub fn clear_operations(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.clear();
    }
}

impl FieldStore for MemoryFieldStore {
    fn repeater_key(&self, post_id: &PostId) -> Result<Option<String>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(StoreOperation::RepeaterKey {
            post_id: post_id.clone(),
        });

        if let Some(FailOn::RepeaterKey(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        Ok(inner.repeater_keys.get(post_id).cloned())
    }

    fn field_group(&self, key: &str) -> Result<Option<FieldGroup>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(StoreOperation::FieldGroup {
            key: key.to_string(),
        });

        if let Some(FailOn::FieldGroup(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        Ok(inner.groups.get(key).cloned())
    }
}
