//! README metadata.

use serde::Deserialize;

/// The parts of the README metadata response we use.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadmeMetadata {
    /// Direct link to the raw file contents.
    #[serde(default)]
    pub download_url: Option<String>,
}
