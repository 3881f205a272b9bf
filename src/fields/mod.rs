//! fields
//!
//! Field-group lookup for posts.
//!
//! # Architecture
//!
//! Field groups are read through the [`FieldStore`] trait, which has
//! multiple implementations:
//!
//! - [`JsonFileStore`]: Reads a JSON export of post meta and field groups
//! - [`MemoryFieldStore`]: In-memory store for tests and embedders
//!
//! The [`FieldGroupResolver`] sits on top of any store and turns the two-step
//! lookup (post → repeater key → field group) into a single optional result.
//!
//! # Provider Selection
//!
//! Use [`create_store`] to build a store from configuration:
//!
//! ```ignore
//! use repeater_tags::fields::create_store;
//!
//! let store = create_store("json", Some(path), "_ear_field")?;
//! ```

mod json_store;
pub mod memory_store;
mod resolver;
mod traits;

pub use json_store::{JsonFileStore, DEFAULT_META_KEY};
pub use memory_store::MemoryFieldStore;
pub use resolver::FieldGroupResolver;
pub use traits::{FieldGroup, FieldStore, StoreError, SubField};

use std::path::Path;

/// The default field store provider name.
pub const DEFAULT_PROVIDER: &str = "json";

/// Create a field store based on the provider name.
///
/// # Providers
///
/// - `"json"` (default): [`JsonFileStore`] reading `path`
/// - `"memory"`: empty [`MemoryFieldStore`]
///
/// # Errors
///
/// - Unknown provider name
/// - `"json"` without a path
pub fn create_store(
    provider: &str,
    path: Option<&Path>,
    meta_key: &str,
) -> Result<Box<dyn FieldStore>, StoreError> {
    match provider {
        "json" => {
            let path = path.ok_or_else(|| {
                StoreError::Unavailable(
                    "json store requires a path (set store.path or pass --store)".into(),
                )
            })?;
            Ok(Box::new(JsonFileStore::new(path).with_meta_key(meta_key)))
        }
        "memory" => Ok(Box::new(MemoryFieldStore::new())),
        other => Err(StoreError::Unavailable(format!(
            "unknown field store provider: '{}' (valid: {})",
            other,
            valid_provider_names().join(", ")
        ))),
    }
}

/// Provider names accepted by [`create_store`].
pub fn valid_provider_names() -> &'static [&'static str] {
    &["json", "memory"]
}
