//! fields::json_store
//!
//! Field store backed by a JSON export of post metadata and field groups.
//!
//! # Format
//!
//! ```json
//! {
//!   "posts": {
//!     "42": { "_ear_field": "field_items" }
//!   },
//!   "fields": {
//!     "field_items": {
//!       "label": "Items",
//!       "sub_fields": [
//!         { "key": "field_name", "label": "Name", "type": "text" },
//!         { "key": "field_photo", "label": "Photo", "type": "image" }
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! # Consistency
//!
//! - The file is re-read on every lookup; field groups can change between
//!   requests and nothing is cached
//! - Reads hold an OS-level shared lock (`fs2`), so an exporter that writes
//!   under an exclusive lock is never observed half-way
//! - A missing file is an empty store, not an error

use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::traits::{FieldGroup, FieldStore, StoreError};
use crate::core::types::PostId;

/// Post meta key under which the repeater field key is stored.
pub const DEFAULT_META_KEY: &str = "_ear_field";

/// On-disk document layout.
#[derive(Debug, Default, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    posts: HashMap<String, HashMap<String, Value>>,
    #[serde(default)]
    fields: HashMap<String, FieldGroup>,
}

/// JSON file field store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    meta_key: String,
}

impl JsonFileStore {
    /// Create a store reading `path`, using the default meta key.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            meta_key: DEFAULT_META_KEY.to_string(),
        }
    }

    /// Use a different post meta key for the repeater association.
    pub fn with_meta_key(mut self, meta_key: impl Into<String>) -> Self {
        self.meta_key = meta_key.into();
        self
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Post meta key in use.
    pub fn meta_key(&self) -> &str {
        &self.meta_key
    }

    fn load(&self) -> Result<StoreDocument, StoreError> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "field store file missing, treating as empty");
                return Ok(StoreDocument::default());
            }
            Err(e) => {
                return Err(StoreError::ReadError(format!(
                    "cannot open '{}': {}",
                    self.path.display(),
                    e
                )))
            }
        };

        FileExt::lock_shared(&file).map_err(|e| {
            StoreError::ReadError(format!("cannot lock '{}': {}", self.path.display(), e))
        })?;

        let mut contents = String::new();
        let read = file.read_to_string(&mut contents);
        // Release the shared lock before handling the read result.
        let _ = FileExt::unlock(&file);
        read.map_err(|e| {
            StoreError::ReadError(format!("cannot read '{}': {}", self.path.display(), e))
        })?;

        if contents.trim().is_empty() {
            return Ok(StoreDocument::default());
        }

        serde_json::from_str(&contents)
            .map_err(|e| StoreError::ParseError(format!("'{}': {}", self.path.display(), e)))
    }
}

impl FieldStore for JsonFileStore {
    fn repeater_key(&self, post_id: &PostId) -> Result<Option<String>, StoreError> {
        let document = self.load()?;
        let value = document
            .posts
            .get(post_id.as_str())
            .and_then(|meta| meta.get(&self.meta_key));

        match value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(key)) => Ok(Some(key.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(StoreError::ParseError(format!(
                "post {} meta '{}' is not a string: {}",
                post_id, self.meta_key, other
            ))),
        }
    }

    fn field_group(&self, key: &str) -> Result<Option<FieldGroup>, StoreError> {
        let mut document = self.load()?;
        Ok(document.fields.remove(key))
    }
}
