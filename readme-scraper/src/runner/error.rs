//! Runner error types.

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API failure other than a missing README.
    #[error(transparent)]
    Client(#[from] crate::client::ClientError),

    /// Filesystem failure while writing results.
    #[error(transparent)]
    Output(#[from] crate::output::OutputError),
}
