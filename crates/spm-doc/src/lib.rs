//! Structured API specification documents.
//!
//! An [`ApiDocument`] wraps a parsed YAML tree and exposes the two sections
//! the merge tooling cares about: the `info` block and the `paths` mapping.
//! Everything else in the tree is carried through untouched, in its
//! original key order.
//!
//! # Key Types
//!
//! - [`ApiDocument`] -- owned document with load/save and section accessors
//! - [`DocError`] -- I/O, parse, and shape errors

pub mod document;
pub mod error;

pub use document::{ApiDocument, INFO_KEY, PATHS_KEY};
pub use error::{DocError, DocResult};

/// Re-exported so callers can build and compare values without a direct
/// `serde_yaml` dependency.
pub use serde_yaml::Value;
