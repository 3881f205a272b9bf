//! fields::traits
//!
//! Field store trait and the field-group data it returns.
//!
//! # Design
//!
//! The `FieldStore` trait is the read-only contract between the resolution
//! pipeline and whatever owns post metadata and field-group definitions.
//! Two lookups are exposed:
//!
//! - post id → repeater field key (stored as post meta)
//! - repeater field key → field group with its ordered sub-fields
//!
//! Both report "nothing stored" as `Ok(None)`. `Err` is reserved for a store
//! that could not answer at all; callers decide how to degrade.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::PostId;

/// Errors from field store lookups.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backing data could not be read.
    #[error("failed to read field store: {0}")]
    ReadError(String),

    /// The backing data was read but is malformed.
    #[error("failed to parse field store: {0}")]
    ParseError(String),

    /// The store is not reachable or not configured.
    #[error("field store unavailable: {0}")]
    Unavailable(String),
}

/// One entry of a repeater field group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubField {
    /// Machine key, unique within its group (e.g. `field_5f1a...`).
    pub key: String,
    /// Display label.
    pub label: String,
    /// Field type, e.g. `text` or `image`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl SubField {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: kind.into(),
        }
    }
}

/// A repeater field and its ordered sub-fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGroup {
    pub label: String,
    #[serde(default)]
    pub sub_fields: Vec<SubField>,
}

impl FieldGroup {
    pub fn new(label: impl Into<String>, sub_fields: Vec<SubField>) -> Self {
        Self {
            label: label.into(),
            sub_fields,
        }
    }
}

/// Read-only access to post metadata and field-group definitions.
///
/// Implementations must be thread-safe: the resolution service shares one
/// store across concurrent requests.
pub trait FieldStore: Send + Sync {
    /// Get the repeater field key associated with a post.
    ///
    /// Returns `Ok(None)` when no key is stored. An empty stored value is
    /// returned as-is; the resolver treats it as absent.
    fn repeater_key(&self, post_id: &PostId) -> Result<Option<String>, StoreError>;

    /// Get the field group identified by a repeater key.
    ///
    /// Returns `Ok(None)` when no such field exists.
    fn field_group(&self, key: &str) -> Result<Option<FieldGroup>, StoreError>;
}
