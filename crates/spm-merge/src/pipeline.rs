//! Load, merge, save.

use std::path::{Path, PathBuf};

use spm_doc::ApiDocument;
use tracing::info;

use crate::config::MergeConfig;
use crate::engine::{merge_documents, MergeOutcome};
use crate::error::MergeResult;
use crate::options::NamingConvention;
use crate::report::Summary;

/// Whether the pipeline persists its result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite the target file.
    #[default]
    Write,
    /// Merge in memory only.
    DryRun,
}

#[derive(Clone, Debug)]
pub struct PipelineReport {
    pub outcome: MergeOutcome,
    /// The file that was overwritten, or `None` on a dry run.
    pub written: Option<PathBuf>,
}

/// Runs a [`MergeConfig`] against the filesystem.
///
/// Both inputs are loaded and merged before the target is opened, so any
/// load, parse, or shape failure leaves the target untouched. The write
/// itself is a plain overwrite.
pub struct MergePipeline {
    config: MergeConfig,
}

impl MergePipeline {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, mode: WriteMode) -> MergeResult<PipelineReport> {
        self.config.validate()?;

        let primary = ApiDocument::load(&self.config.primary)?;
        let secondary = ApiDocument::load(&self.config.secondary)?;
        let outcome = merge_documents(primary, &secondary, &self.config.merge)?;

        let written = match mode {
            WriteMode::Write => {
                let target = self.config.target();
                outcome.document.save(target)?;
                Some(target.to_path_buf())
            }
            WriteMode::DryRun => None,
        };

        info!(
            applied = outcome.applied(),
            not_found = outcome.not_found(),
            total = outcome.summary.total,
            dry_run = written.is_none(),
            "merge pipeline finished"
        );
        Ok(PipelineReport { outcome, written })
    }
}

/// Load a single document and count its paths.
pub fn summarize_file(
    path: impl AsRef<Path>,
    conventions: &[NamingConvention],
) -> MergeResult<Summary> {
    let doc = ApiDocument::load(path)?;
    Ok(Summary::of(&doc, conventions)?)
}
