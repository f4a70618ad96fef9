//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while assembling the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A `.env` file exists but could not be read or parsed.
    #[error("Failed to load env file '{path}': {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },

    /// The API base is not a usable absolute URL.
    #[error("Invalid API base '{url}': {reason}")]
    InvalidApiBase { url: String, reason: String },

    /// The request delay is not a finite, non-negative number of seconds.
    #[error("Invalid delay '{value}': {reason}")]
    InvalidDelay { value: String, reason: String },
}
