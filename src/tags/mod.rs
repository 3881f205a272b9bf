//! tags
//!
//! Registry of dynamic tag types and the field kinds each one accepts.
//!
//! # Design
//!
//! The registry is an immutable value built once at startup and handed to
//! the [`crate::engine::ResolutionService`]. Adding a tag type means adding
//! one row to [`BUILTIN_TAGS`]; nothing else in the pipeline changes.
//!
//! # Example
//!
//! ```
//! use repeater_tags::tags::{TagDescriptor, TagRegistry};
//!
//! let registry = TagRegistry::builtin();
//! let ids: Vec<&str> = registry.list_tags().iter().map(|t| t.id()).collect();
//! assert_eq!(ids[0], "elementor-acf-repeater-text");
//!
//! let custom = TagRegistry::new(vec![
//!     TagDescriptor::new("Elementor_ACF_Repeater_Text", ["text"]).unwrap(),
//! ]).unwrap();
//! assert_eq!(custom.len(), 1);
//! ```

use std::collections::BTreeSet;

use thiserror::Error;

use crate::core::types::{TagName, TypeError};

/// Built-in tag table: declared name and accepted field kinds, in
/// registration order.
pub const BUILTIN_TAGS: &[(&str, &[&str])] = &[
    (
        "Elementor_ACF_Repeater_Text",
        &[
            "text", "textarea", "wysiwyg", "number", "email", "select", "radio",
        ],
    ),
    ("Elementor_ACF_Repeater_Image", &["image"]),
    (
        "Elementor_ACF_Repeater_URL",
        &["url", "link", "page_link", "email", "file"],
    ),
    ("Elementor_ACF_Repeater_Gallery", &["gallery"]),
    ("Elementor_ACF_Repeater_File", &["file"]),
];

/// Errors from building a tag registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error(transparent)]
    InvalidName(#[from] TypeError),

    #[error("tag '{0}' must accept at least one field kind")]
    EmptyKinds(String),

    #[error("duplicate tag id '{0}'")]
    DuplicateTag(String),
}

/// A dynamic tag type and the field kinds it can bind to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDescriptor {
    name: TagName,
    id: String,
    accepted_kinds: BTreeSet<String>,
}

impl TagDescriptor {
    /// Create a descriptor from a declared name and its accepted kinds.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidName`] if the name is not identifier-like
    /// - [`RegistryError::EmptyKinds`] if no kinds are given
    pub fn new<I, S>(name: &str, kinds: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = TagName::new(name)?;
        let accepted_kinds: BTreeSet<String> = kinds.into_iter().map(Into::into).collect();
        if accepted_kinds.is_empty() {
            return Err(RegistryError::EmptyKinds(name.to_string()));
        }
        Ok(Self::assemble(name, accepted_kinds))
    }

    fn from_static(name: &'static str, kinds: &'static [&'static str]) -> Self {
        let accepted_kinds = kinds.iter().map(|k| k.to_string()).collect();
        Self::assemble(TagName::from_static(name), accepted_kinds)
    }

    fn assemble(name: TagName, accepted_kinds: BTreeSet<String>) -> Self {
        let id = name.file_id();
        Self {
            name,
            id,
            accepted_kinds,
        }
    }

    /// The declared name, e.g. `Elementor_ACF_Repeater_Text`.
    pub fn name(&self) -> &TagName {
        &self.name
    }

    /// The wire identifier, e.g. `elementor-acf-repeater-text`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Field kinds this tag can bind to.
    pub fn accepted_kinds(&self) -> &BTreeSet<String> {
        &self.accepted_kinds
    }

    /// Whether a sub-field of `kind` can bind to this tag.
    pub fn accepts(&self, kind: &str) -> bool {
        self.accepted_kinds.contains(kind)
    }
}

/// Ordered, immutable catalog of tag types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRegistry {
    tags: Vec<TagDescriptor>,
}

impl TagRegistry {
    /// Build a registry from explicit descriptors, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateTag`] if two descriptors derive the
    /// same id.
    pub fn new(tags: Vec<TagDescriptor>) -> Result<Self, RegistryError> {
        let mut seen = BTreeSet::new();
        for tag in &tags {
            if !seen.insert(tag.id()) {
                return Err(RegistryError::DuplicateTag(tag.id().to_string()));
            }
        }
        Ok(Self { tags })
    }

    /// The tags shipped with the plugin.
    pub fn builtin() -> Self {
        let tags = BUILTIN_TAGS
            .iter()
            .map(|&(name, kinds)| TagDescriptor::from_static(name, kinds))
            .collect();
        Self { tags }
    }

    /// All registered tags in registration order.
    pub fn list_tags(&self) -> &[TagDescriptor] {
        &self.tags
    }

    /// Look up a tag by its wire identifier.
    pub fn get(&self, id: &str) -> Option<&TagDescriptor> {
        self.tags.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
