//! The pure merge: two parsed documents in, one document and a report out.

use spm_doc::ApiDocument;
use tracing::{debug, warn};

use crate::error::MergeResult;
use crate::options::MergeOptions;
use crate::report::{EndpointOutcome, EndpointReport, Summary};

/// The merged primary document plus what was done to it.
#[derive(Clone, Debug, PartialEq)]
pub struct MergeOutcome {
    pub document: ApiDocument,
    /// One report per configured endpoint, in configuration order.
    pub reports: Vec<EndpointReport>,
    pub summary: Summary,
}

impl MergeOutcome {
    fn count(&self, outcome: EndpointOutcome) -> usize {
        self.reports.iter().filter(|r| r.outcome == outcome).count()
    }

    pub fn added(&self) -> usize {
        self.count(EndpointOutcome::Added)
    }

    pub fn replaced(&self) -> usize {
        self.count(EndpointOutcome::Replaced)
    }

    pub fn not_found(&self) -> usize {
        self.count(EndpointOutcome::NotFound)
    }

    /// Endpoints that changed the primary's `paths`.
    pub fn applied(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_applied()).count()
    }
}

/// Splice `options.endpoints` from `secondary` into `primary`.
///
/// Both documents are checked for the sections the merge touches before
/// anything is mutated: the secondary needs `paths`, the primary needs
/// `paths` and `info`.
pub fn merge_documents(
    mut primary: ApiDocument,
    secondary: &ApiDocument,
    options: &MergeOptions,
) -> MergeResult<MergeOutcome> {
    let legacy_paths = secondary.paths()?;
    primary.paths()?;
    primary.info()?;

    let mut reports = Vec::with_capacity(options.endpoints.len());
    for endpoint in &options.endpoints {
        let outcome = match legacy_paths.get(endpoint.as_str()) {
            Some(entry) => match primary.insert_path(endpoint, entry.clone())? {
                Some(_) => {
                    warn!(endpoint = %endpoint, "legacy entry overwrote existing path");
                    EndpointOutcome::Replaced
                }
                None => EndpointOutcome::Added,
            },
            None => {
                debug!(endpoint = %endpoint, "endpoint absent from secondary document");
                EndpointOutcome::NotFound
            }
        };
        reports.push(EndpointReport {
            endpoint: endpoint.clone(),
            outcome,
        });
    }

    primary.set_info_field("title", &options.info.title)?;
    primary.set_info_field("description", &options.info.description)?;

    let summary = Summary::of(&primary, &options.conventions)?;
    debug!(total = summary.total, "merge complete");

    Ok(MergeOutcome {
        document: primary,
        reports,
        summary,
    })
}
