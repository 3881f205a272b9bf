//! repeater-tags - Resolve dynamic tag bindings for repeater fields
//!
//! A page-builder editor offers "dynamic tags" (text, image, URL, gallery,
//! file) that can be bound to a sub-field of the repeater attached to the
//! post being edited. This crate answers the editor's question: for this
//! post, which sub-fields can each tag bind to?
//!
//! # Architecture
//!
//! The codebase is layered leaf-first:
//!
//! - [`tags`] - Static registry of tag types and the field kinds they accept
//! - [`fields`] - Field store abstraction and the post → field group resolver
//! - [`options`] - Projects a field group into per-tag option groups
//! - [`engine`] - Resolution service: validates requests and assembles results
//! - [`ajax`] - Named actions the host editor dispatches to
//! - [`core`] - Domain types and configuration
//! - [`cli`] - Command-line transport
//! - [`ui`] - Output formatting
//!
//! # Invariants
//!
//! 1. Every registered tag appears in every successful result
//! 2. Option groups contain only sub-fields whose kind the tag accepts
//! 3. A post without a configured repeater yields empty groups, never an error
//! 4. Only a missing post id is reported as an error
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use repeater_tags::core::types::PostId;
//! use repeater_tags::engine::{ResolutionService, ResolveRequest};
//! use repeater_tags::fields::{FieldGroup, MemoryFieldStore, SubField};
//! use repeater_tags::tags::TagRegistry;
//!
//! let store = MemoryFieldStore::new();
//! store.set_repeater_key(PostId::from(7u64), "field_items");
//! store.insert_field_group(
//!     "field_items",
//!     FieldGroup::new("Items", vec![SubField::new("f1", "Name", "text")]),
//! );
//!
//! let service = ResolutionService::new(TagRegistry::builtin(), Arc::new(store));
//! let result = service.resolve(&ResolveRequest::for_post(7u64)).unwrap();
//! assert_eq!(result.tags["elementor-acf-repeater-text"][0].options["f1"], "Name");
//! ```

pub mod ajax;
pub mod cli;
pub mod core;
pub mod engine;
pub mod fields;
pub mod options;
pub mod tags;
pub mod ui;
