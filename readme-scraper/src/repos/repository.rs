//! Repository listing record.

use serde::{Deserialize, Serialize};

/// A public repository as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Repository {
    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Free-form description, if the owner set one.
    #[serde(default)]
    pub description: Option<String>,
}
