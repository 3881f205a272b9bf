//! engine
//!
//! Orchestrates a resolution request: Validate → Resolve field group →
//! Build option groups per tag → Assemble.
//!
//! # Error Policy
//!
//! Only a missing post id ([`ResolveError::InvalidRequest`]) reaches the
//! caller. Store failures and missing configuration degrade to empty option
//! groups inside the pipeline.

pub mod request;
pub mod service;

pub use request::{ResolutionResult, ResolveError, ResolveRequest, Response};
pub use service::ResolutionService;
