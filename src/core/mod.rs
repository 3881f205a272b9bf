//! core
//!
//! Domain types and configuration.
//!
//! # Modules
//!
//! - [`types`] - Strong types for post ids and tag names
//! - [`config`] - Configuration schema and loading

pub mod config;
pub mod types;
