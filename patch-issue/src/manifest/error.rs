//! Manifest error types.

use thiserror::Error;

/// Errors that can occur while loading a package manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON content.
    #[error("Failed to parse package manifest '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A field required by the caller is absent.
    #[error("Package manifest '{path}' has no '{field}' field")]
    MissingField { path: String, field: &'static str },
}
