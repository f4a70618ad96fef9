//! Index entry.

use crate::repos::Repository;
use serde::{Deserialize, Serialize};

/// One line of `_index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Repository name.
    pub name: String,

    /// Repository description, empty when none is set.
    pub description: String,

    /// File the README was saved under, `null` if the repository has none.
    pub readme_file: Option<String>,
}

impl IndexEntry {
    /// Builds the entry for `repository`.
    #[must_use]
    pub fn new(repository: &Repository, readme_file: Option<String>) -> Self {
        Self {
            name: repository.name.clone(),
            description: repository.description.clone().unwrap_or_default(),
            readme_file,
        }
    }
}
