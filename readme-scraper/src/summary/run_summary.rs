//! Run summary types.

use super::outcome::ReadmeOutcome;
use std::path::PathBuf;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of public repositories listed.
    pub repositories_found: usize,

    /// Number of READMEs written to disk.
    pub readmes_saved: usize,

    /// Number of repositories without a README.
    pub readmes_missing: usize,

    /// Directory the READMEs were written to.
    pub output_dir: PathBuf,

    /// Path of the written index file.
    pub index_path: PathBuf,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(output_dir: PathBuf, repositories_found: usize) -> Self {
        Self {
            output_dir,
            repositories_found,
            ..Default::default()
        }
    }

    /// Updates the summary with a repository outcome.
    pub fn record(&mut self, outcome: &ReadmeOutcome) {
        match outcome {
            ReadmeOutcome::Saved { .. } => self.readmes_saved += 1,
            ReadmeOutcome::Missing { .. } => self.readmes_missing += 1,
        }
    }
}
