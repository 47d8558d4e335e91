//! Per-endpoint results and path-count summaries.

use serde::Serialize;
use spm_doc::{ApiDocument, DocResult};

use crate::options::NamingConvention;

/// What happened to one configured endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointOutcome {
    /// Copied into the primary; the key was new.
    Added,
    /// Copied into the primary, overwriting an existing entry.
    Replaced,
    /// Absent from the secondary document; skipped.
    NotFound,
}

impl EndpointOutcome {
    /// `true` for outcomes that changed the primary's `paths`.
    pub fn is_applied(self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EndpointReport {
    pub endpoint: String,
    pub outcome: EndpointOutcome,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConventionCount {
    pub label: String,
    pub pattern: String,
    pub count: usize,
}

/// Path totals for a document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of entries in `paths`.
    pub total: usize,
    /// One count per convention, in configuration order.
    pub conventions: Vec<ConventionCount>,
}

impl Summary {
    /// Count the document's path keys against each convention.
    pub fn of(doc: &ApiDocument, conventions: &[NamingConvention]) -> DocResult<Self> {
        let keys = doc.path_keys()?;
        let total = doc.paths()?.len();
        let conventions = conventions
            .iter()
            .map(|c| ConventionCount {
                label: c.label.clone(),
                pattern: c.pattern.clone(),
                count: keys.iter().filter(|k| c.matches(k)).count(),
            })
            .collect();
        Ok(Self { total, conventions })
    }

    /// Count for the convention with the given label.
    pub fn count(&self, label: &str) -> Option<usize> {
        self.conventions
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_conventions() {
        let doc = ApiDocument::from_yaml_str(
            "paths:\n  /api/v1/job: {}\n  /api/v1/files: {}\n  /api/printer/bed: {}\n  /api/version: {}\n",
        )
        .unwrap();
        let summary = Summary::of(&doc, &NamingConvention::defaults()).unwrap();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.count("v1"), Some(2));
        assert_eq!(summary.count("Legacy"), Some(1));
        assert_eq!(summary.count("other"), None);
    }

    #[test]
    fn summary_requires_paths() {
        let doc = ApiDocument::from_yaml_str("info: {}\n").unwrap();
        assert!(Summary::of(&doc, &[]).is_err());
    }

    #[test]
    fn outcome_serializes_snake_case() {
        let json = serde_json::to_string(&EndpointOutcome::NotFound).unwrap();
        assert_eq!(json, "\"not_found\"");
        assert!(EndpointOutcome::Replaced.is_applied());
        assert!(!EndpointOutcome::NotFound.is_applied());
    }
}
