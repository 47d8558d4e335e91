//! Merge engine for API specification documents.
//!
//! Splices a configured list of path entries from a secondary ("legacy")
//! document into a primary document, rewrites the primary's descriptive
//! metadata, and summarizes the resulting path mapping.
//!
//! # Key Types
//!
//! - [`merge_documents`] -- pure merge over two parsed documents
//! - [`MergeOptions`] -- endpoint list, info override, naming conventions
//! - [`MergeOutcome`] / [`EndpointReport`] / [`Summary`] -- merge results
//! - [`MergeConfig`] -- file locations plus options, loadable from TOML
//! - [`MergePipeline`] -- the load, merge, save boundary
//!
//! # Rules
//!
//! 1. The secondary entry always wins on a key collision.
//! 2. Keys already in the primary keep their position; new keys are appended.
//! 3. All input is validated before the primary is touched, so a failed
//!    merge never leaves a partially written file.

pub mod config;
pub mod engine;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod report;

pub use config::MergeConfig;
pub use engine::{merge_documents, MergeOutcome};
pub use error::{MergeError, MergeResult};
pub use options::{InfoOverride, MergeOptions, NamingConvention};
pub use pipeline::{summarize_file, MergePipeline, PipelineReport, WriteMode};
pub use report::{ConventionCount, EndpointOutcome, EndpointReport, Summary};
