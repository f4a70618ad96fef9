//! Per-repository outcome.

/// What happened to a single repository's README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadmeOutcome {
    /// The README was written to disk.
    Saved {
        /// Repository name.
        repository: String,
        /// File name inside the output directory.
        file_name: String,
    },

    /// The repository has no README.
    Missing {
        /// Repository name.
        repository: String,
    },
}

impl ReadmeOutcome {
    /// Returns the saved file name, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        match self {
            ReadmeOutcome::Saved { file_name, .. } => Some(file_name.as_str()),
            ReadmeOutcome::Missing { .. } => None,
        }
    }
}
