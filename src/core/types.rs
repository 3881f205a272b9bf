//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`PostId`] - Identifier of a content item (post)
//! - [`TagName`] - Validated declared name of a dynamic tag
//!
//! # Examples
//!
//! ```
//! use repeater_tags::core::types::{PostId, TagName};
//!
//! let post = PostId::from(42u64);
//! assert_eq!(post.as_str(), "42");
//!
//! let name = TagName::new("Elementor_ACF_Repeater_Text").unwrap();
//! assert_eq!(name.file_id(), "elementor-acf-repeater-text");
//!
//! assert!(TagName::new("").is_err());
//! assert!(TagName::new("has space").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid tag name: {0}")]
    InvalidTagName(String),
}

/// Identifier of a content item.
///
/// Hosts hand these over as strings or integers. The value is opaque to the
/// core: it is only ever used as a lookup key against the field store, so any
/// string (including the empty string) is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Create a post id from any string value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Declared name of a dynamic tag, e.g. `Elementor_ACF_Repeater_Text`.
///
/// Names are identifier-like: ASCII letters, digits and underscores, not
/// starting with a digit. The wire identifier is derived from the name with
/// [`TagName::file_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagName(String);

impl TagName {
    /// Create a new validated tag name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidTagName` if the name is empty, starts with a
    /// digit, or contains anything other than ASCII alphanumerics and `_`.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Wrap a compile-time name without validation.
    ///
    /// Only used for the built-in tag table, which is checked by tests.
    pub(crate) fn from_static(name: &'static str) -> Self {
        Self(name.to_string())
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidTagName(
                "tag name cannot be empty".into(),
            ));
        }

        if name.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(TypeError::InvalidTagName(format!(
                "tag name cannot start with a digit: '{name}'"
            )));
        }

        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(TypeError::InvalidTagName(format!(
                "tag name cannot contain '{c}': '{name}'"
            )));
        }

        Ok(())
    }

    /// Get the declared name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical file-style identifier: underscores become hyphens and
    /// the whole name is lowercased.
    pub fn file_id(&self) -> String {
        self.0.replace('_', "-").to_lowercase()
    }
}

impl TryFrom<String> for TagName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TagName> for String {
    fn from(name: TagName) -> Self {
        name.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod post_id {
        use super::*;

        #[test]
        fn from_integer() {
            assert_eq!(PostId::from(7u64).as_str(), "7");
        }

        #[test]
        fn empty_is_allowed() {
            assert_eq!(PostId::new("").as_str(), "");
        }

        #[test]
        fn serializes_as_plain_string() {
            let json = serde_json::to_string(&PostId::from("12")).unwrap();
            assert_eq!(json, "\"12\"");
        }
    }

    mod tag_name {
        use super::*;

        #[test]
        fn file_id_lowercases_and_hyphenates() {
            let name = TagName::new("Elementor_ACF_Repeater_URL").unwrap();
            assert_eq!(name.file_id(), "elementor-acf-repeater-url");
        }

        #[test]
        fn file_id_of_plain_name() {
            assert_eq!(TagName::new("text").unwrap().file_id(), "text");
        }

        #[test]
        fn rejects_empty() {
            assert!(matches!(
                TagName::new(""),
                Err(TypeError::InvalidTagName(_))
            ));
        }

        #[test]
        fn rejects_leading_digit() {
            assert!(TagName::new("1Tag").is_err());
        }

        #[test]
        fn rejects_punctuation() {
            for bad in ["a-b", "a.b", "a b", "a/b", "ä"] {
                assert!(TagName::new(bad).is_err(), "{bad} should be rejected");
            }
        }

        #[test]
        fn deserialize_validates() {
            let ok: Result<TagName, _> = serde_json::from_str("\"My_Tag\"");
            assert!(ok.is_ok());
            let bad: Result<TagName, _> = serde_json::from_str("\"my tag\"");
            assert!(bad.is_err());
        }
    }
}
