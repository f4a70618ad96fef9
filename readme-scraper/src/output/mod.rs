//! Writing READMEs and the index to the output directory.
//!
//! Every write replaces whatever was there, so a re-run produces a fresh
//! snapshot rather than merging with the previous one.

mod error;
mod index_entry;

pub use error::OutputError;
pub use index_entry::IndexEntry;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the JSON index inside the output directory.
pub const INDEX_FILE_NAME: &str = "_index.json";

/// Extension given to saved README files.
pub const README_EXTENSION: &str = "md";

/// The directory READMEs and the index are written to.
#[derive(Debug, Clone)]
pub struct OutputDir {
    path: PathBuf,
}

impl OutputDir {
    /// Creates `path` (and any missing parents) and returns a handle to it.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::CreateDir`] if the directory cannot be created.
    pub fn create(path: &Path) -> Result<Self, OutputError> {
        fs::create_dir_all(path).map_err(|source| OutputError::CreateDir {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Returns the directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns where `_index.json` lives.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.path.join(INDEX_FILE_NAME)
    }

    /// Writes `contents` to `<repo_name>.md`, replacing any previous file.
    ///
    /// # Returns
    ///
    /// The file name (not the full path) the README was saved under.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Write`] on I/O failure.
    pub fn write_readme(&self, repo_name: &str, contents: &str) -> Result<String, OutputError> {
        let file_name = readme_file_name(repo_name);
        let path = self.path.join(&file_name);
        write_file(&path, contents)?;
        debug!(file = %path.display(), bytes = contents.len(), "Saved README");
        Ok(file_name)
    }

    /// Writes `entries` as a pretty-printed JSON array to `_index.json`.
    ///
    /// Non-ASCII characters are written as-is rather than escaped.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError`] if serialization or the write fails.
    pub fn write_index(&self, entries: &[IndexEntry]) -> Result<PathBuf, OutputError> {
        let path = self.index_path();
        let json = serde_json::to_string_pretty(entries)?;
        write_file(&path, &json)?;
        debug!(file = %path.display(), entries = entries.len(), "Wrote index");
        Ok(path)
    }
}

/// File name used for the README of `repo_name`.
#[must_use]
pub fn readme_file_name(repo_name: &str) -> String {
    format!("{repo_name}.{README_EXTENSION}")
}

fn write_file(path: &Path, contents: &str) -> Result<(), OutputError> {
    fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.display().to_string(),
        source,
    })
}
