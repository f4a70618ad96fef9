//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur while talking to the GitHub API.
///
/// A 404 is kept apart from every other failing status so callers can treat
/// "does not exist" as an expected outcome.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with HTTP 404.
    #[error("Not found: {url}")]
    NotFound { url: String },

    /// The server answered with a non-success status other than 404.
    #[error("Request to {url} failed with HTTP {status}")]
    RequestFailed { url: String, status: u16 },

    /// Transport level failure (connection, TLS, body read).
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The response body was not the JSON we expected.
    #[error("Failed to parse JSON from {url}: {source}")]
    JsonError {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The token contains characters that cannot go into a header.
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] http::header::InvalidHeaderValue),

    /// A URL handed to us by the API could not be parsed.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ClientError {
    /// Returns the HTTP status code carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::NotFound { .. } => Some(404),
            ClientError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
