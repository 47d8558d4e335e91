//! Owned YAML specification document.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::{debug, info};

use crate::error::{DocError, DocResult};

/// Top-level key holding the path mapping.
pub const PATHS_KEY: &str = "paths";
/// Top-level key holding the descriptive metadata.
pub const INFO_KEY: &str = "info";

/// A parsed specification document.
///
/// The root is always a mapping. Sections are looked up lazily, so a
/// document without `paths` or `info` still loads; the accessors report
/// the missing key when it is actually needed.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiDocument {
    root: Mapping,
}

impl ApiDocument {
    /// Wrap an already-parsed value.
    pub fn from_value(value: Value) -> DocResult<Self> {
        match value {
            Value::Mapping(root) => Ok(Self { root }),
            _ => Err(DocError::NotAMappingRoot),
        }
    }

    /// Parse a document from YAML text.
    ///
    /// Parse failures carry an empty path; use [`ApiDocument::load`] to get
    /// the file name in the error.
    pub fn from_yaml_str(text: &str) -> DocResult<Self> {
        let value: Value = serde_yaml::from_str(text).map_err(|source| DocError::Parse {
            path: Default::default(),
            source,
        })?;
        Self::from_value(value)
    }

    /// Read and parse a document from disk.
    pub fn load(path: impl AsRef<Path>) -> DocResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DocError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_yaml::from_str(&text).map_err(|source| DocError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = Self::from_value(value)?;
        info!(path = %path.display(), keys = doc.root.len(), "loaded document");
        Ok(doc)
    }

    /// Render the document as block-style YAML, keys in insertion order.
    pub fn to_yaml_string(&self) -> DocResult<String> {
        serde_yaml::to_string(&self.root).map_err(DocError::Serialize)
    }

    /// Serialize and overwrite `path` in full.
    pub fn save(&self, path: impl AsRef<Path>) -> DocResult<()> {
        let path = path.as_ref();
        let text = self.to_yaml_string()?;
        fs::write(path, text.as_bytes()).map_err(|source| DocError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), bytes = text.len(), "saved document");
        Ok(())
    }

    // ---- Sections ----

    fn section(&self, key: &str) -> DocResult<&Mapping> {
        self.root
            .get(key)
            .ok_or_else(|| DocError::MissingKey(key.to_string()))?
            .as_mapping()
            .ok_or_else(|| DocError::NotAMapping(key.to_string()))
    }

    fn section_mut(&mut self, key: &str) -> DocResult<&mut Mapping> {
        self.root
            .get_mut(key)
            .ok_or_else(|| DocError::MissingKey(key.to_string()))?
            .as_mapping_mut()
            .ok_or_else(|| DocError::NotAMapping(key.to_string()))
    }

    /// The `paths` mapping.
    pub fn paths(&self) -> DocResult<&Mapping> {
        self.section(PATHS_KEY)
    }

    /// Mutable access to the `paths` mapping.
    pub fn paths_mut(&mut self) -> DocResult<&mut Mapping> {
        self.section_mut(PATHS_KEY)
    }

    /// The `info` mapping.
    pub fn info(&self) -> DocResult<&Mapping> {
        self.section(INFO_KEY)
    }

    // ---- Paths ----

    /// Look up a single path entry.
    pub fn path(&self, key: &str) -> DocResult<Option<&Value>> {
        Ok(self.paths()?.get(key))
    }

    /// Returns `true` if `paths` has an entry for `key`.
    pub fn contains_path(&self, key: &str) -> DocResult<bool> {
        Ok(self.paths()?.contains_key(key))
    }

    /// Insert or overwrite a path entry, returning the previous value.
    ///
    /// An overwritten key keeps its position; a new key is appended.
    pub fn insert_path(&mut self, key: &str, value: Value) -> DocResult<Option<Value>> {
        let previous = self
            .paths_mut()?
            .insert(Value::String(key.to_string()), value);
        debug!(path = key, replaced = previous.is_some(), "path entry set");
        Ok(previous)
    }

    /// String keys of the `paths` mapping in document order.
    ///
    /// Non-string keys (legal YAML, never valid OpenAPI) are skipped.
    pub fn path_keys(&self) -> DocResult<Vec<&str>> {
        Ok(self.paths()?.keys().filter_map(Value::as_str).collect())
    }

    // ---- Info ----

    /// Set a string field inside `info`, overwriting any previous value.
    pub fn set_info_field(&mut self, field: &str, text: &str) -> DocResult<()> {
        self.section_mut(INFO_KEY)?.insert(
            Value::String(field.to_string()),
            Value::String(text.to_string()),
        );
        Ok(())
    }

    fn info_str(&self, field: &str) -> DocResult<Option<&str>> {
        Ok(self.info()?.get(field).and_then(Value::as_str))
    }

    /// `info.title`, if present and a string.
    pub fn title(&self) -> DocResult<Option<&str>> {
        self.info_str("title")
    }

    /// `info.description`, if present and a string.
    pub fn description(&self) -> DocResult<Option<&str>> {
        self.info_str("description")
    }
}
