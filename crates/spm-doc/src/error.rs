use std::path::PathBuf;

/// Errors from loading, inspecting, or saving a specification document.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    /// The file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document could not be rendered back to YAML.
    #[error("serialization error: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// A required top-level key is absent.
    #[error("missing key: {0}")]
    MissingKey(String),

    /// A key is present but does not hold a mapping.
    #[error("key `{0}` is not a mapping")]
    NotAMapping(String),

    /// The document root is a scalar or sequence.
    #[error("document root is not a mapping")]
    NotAMappingRoot,
}

/// Result alias for document operations.
pub type DocResult<T> = Result<T, DocError>;
