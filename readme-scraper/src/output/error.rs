//! Output error types.

use thiserror::Error;

/// Errors that can occur while writing results to disk.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The output directory could not be created.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written.
    #[error("Failed to write file '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The index could not be serialized.
    #[error("Failed to serialize index: {0}")]
    Serialize(#[from] serde_json::Error),
}
