//! options
//!
//! Project a field group into the option groups an editor control shows.
//!
//! An option group carries the field group's label and one `key → label`
//! entry per sub-field whose kind the tag accepts, in sub-field order.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::fields::FieldGroup;

/// Labeled set of bindable sub-fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub label: String,
    /// Sub-field key → sub-field label, in source order.
    pub options: IndexMap<String, String>,
}

/// Build the option groups for one tag.
///
/// Returns no groups when `field_group` is absent, and exactly one group
/// otherwise, even if none of its sub-fields match `accepted_kinds`.
pub fn build_option_groups(
    field_group: Option<&FieldGroup>,
    accepted_kinds: &BTreeSet<String>,
) -> Vec<OptionGroup> {
    let Some(group) = field_group else {
        return Vec::new();
    };

    let mut options = IndexMap::new();
    for sub_field in &group.sub_fields {
        if accepted_kinds.contains(&sub_field.kind) {
            // A repeated key keeps its first position and takes the later label.
            options.insert(sub_field.key.clone(), sub_field.label.clone());
        }
    }

    vec![OptionGroup {
        label: group.label.clone(),
        options,
    }]
}
