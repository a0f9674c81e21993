//! Manifest error type

use std::path::PathBuf;

/// Failures that abort a run before any package is resolved
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest could not be read
    #[error("Cannot open file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not a valid package document
    #[error("Cannot parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
