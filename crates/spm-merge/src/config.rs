use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MergeError, MergeResult};
use crate::options::MergeOptions;

pub const DEFAULT_PRIMARY: &str = "spec/openapi.yaml";
pub const DEFAULT_SECONDARY: &str = "/tmp/prusalink-legacy.yaml";

/// File locations and merge options for one run.
///
/// Every field is optional in the TOML form; omitted fields fall back to
/// [`MergeConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Document receiving the merged entries.
    pub primary: PathBuf,
    /// Document the endpoint entries are copied from.
    pub secondary: PathBuf,
    /// Write target. When unset the primary is overwritten.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub merge: MergeOptions,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            primary: PathBuf::from(DEFAULT_PRIMARY),
            secondary: PathBuf::from(DEFAULT_SECONDARY),
            output: None,
            merge: MergeOptions::default(),
        }
    }
}

impl MergeConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> MergeResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MergeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| MergeError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> MergeResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Where the merged document is written.
    pub fn target(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.primary)
    }

    pub fn validate(&self) -> MergeResult<()> {
        self.merge.validate()
    }
}
