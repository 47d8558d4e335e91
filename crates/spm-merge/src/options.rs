use serde::{Deserialize, Serialize};

use crate::error::{MergeError, MergeResult};

/// Legacy movement-control endpoints spliced in by default.
pub const DEFAULT_ENDPOINTS: [&str; 3] = [
    "/api/printer/printhead",
    "/api/printer/tool",
    "/api/printer/bed",
];

pub const DEFAULT_TITLE: &str = "PrusaTouch API (PrusaLink v1 + Legacy Movement)";
pub const DEFAULT_DESCRIPTION: &str =
    "Merged API: PrusaLink v1 for jobs/files + Legacy API for movement controls";

/// Replacement values for `info.title` and `info.description`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoOverride {
    pub title: String,
    pub description: String,
}

impl Default for InfoOverride {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            description: DEFAULT_DESCRIPTION.into(),
        }
    }
}

/// A labelled substring used to count path keys in a [`Summary`].
///
/// [`Summary`]: crate::Summary
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConvention {
    pub label: String,
    pub pattern: String,
}

impl NamingConvention {
    pub fn new(label: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
        }
    }

    /// Returns `true` if `path` contains this convention's pattern.
    pub fn matches(&self, path: &str) -> bool {
        path.contains(self.pattern.as_str())
    }

    /// `v1` (`/api/v1/`) and `Legacy` (`/api/printer/`).
    pub fn defaults() -> Vec<Self> {
        vec![Self::new("v1", "/api/v1/"), Self::new("Legacy", "/api/printer/")]
    }
}

/// Everything the pure merge needs besides the two documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Path keys copied from the secondary document, in processing order.
    pub endpoints: Vec<String>,
    /// Values written into the primary's `info` block.
    pub info: InfoOverride,
    /// Conventions reported in the summary.
    pub conventions: Vec<NamingConvention>,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            endpoints: DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
            info: InfoOverride::default(),
            conventions: NamingConvention::defaults(),
        }
    }
}

impl MergeOptions {
    /// Replace the endpoint list.
    pub fn with_endpoints<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.endpoints = endpoints.into_iter().map(Into::into).collect();
        self
    }

    /// Reject option sets that cannot produce a meaningful merge.
    pub fn validate(&self) -> MergeResult<()> {
        if self.endpoints.is_empty() {
            return Err(MergeError::InvalidConfig("endpoint list is empty".into()));
        }
        if let Some(bad) = self.endpoints.iter().find(|e| e.trim().is_empty()) {
            return Err(MergeError::InvalidConfig(format!(
                "blank endpoint key {bad:?}"
            )));
        }
        if let Some(bad) = self.conventions.iter().find(|c| c.pattern.is_empty()) {
            return Err(MergeError::InvalidConfig(format!(
                "convention `{}` has an empty pattern",
                bad.label
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_legacy_movement() {
        let opts = MergeOptions::default();
        assert_eq!(
            opts.endpoints,
            vec!["/api/printer/printhead", "/api/printer/tool", "/api/printer/bed"]
        );
        assert_eq!(opts.info.title, DEFAULT_TITLE);
        assert_eq!(
            opts.conventions,
            vec![
                NamingConvention::new("v1", "/api/v1/"),
                NamingConvention::new("Legacy", "/api/printer/"),
            ]
        );
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn convention_is_substring_match() {
        let legacy = NamingConvention::new("legacy", "/api/printer/");
        assert!(legacy.matches("/api/printer/bed"));
        assert!(legacy.matches("/proxy/api/printer/tool"));
        assert!(!legacy.matches("/api/printer"));
    }

    #[test]
    fn empty_endpoints_rejected() {
        let opts = MergeOptions::default().with_endpoints(Vec::<String>::new());
        assert!(matches!(opts.validate(), Err(MergeError::InvalidConfig(_))));
    }

    #[test]
    fn blank_endpoint_rejected() {
        let opts = MergeOptions::default().with_endpoints(["/api/printer/bed", "  "]);
        assert!(matches!(opts.validate(), Err(MergeError::InvalidConfig(_))));
    }

    #[test]
    fn empty_pattern_rejected() {
        let mut opts = MergeOptions::default();
        opts.conventions.push(NamingConvention::new("all", ""));
        let err = opts.validate().unwrap_err();
        assert!(err.to_string().contains("`all`"));
    }
}
