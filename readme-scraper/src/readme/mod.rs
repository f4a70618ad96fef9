//! README resolution.
//!
//! GitHub exposes a repository's README through a metadata endpoint whose
//! `download_url` points at the raw file. A 404 on the metadata endpoint
//! means the repository has no README.

mod metadata;

pub use metadata::ReadmeMetadata;

use crate::client::{get_json, get_raw, ClientError, Endpoints, Transport};
use tracing::debug;
use url::Url;

/// Fetches the README text of `full_name` ("owner/name").
///
/// # Returns
///
/// `None` when the repository has no README, when the metadata carries no
/// `download_url`, or when that link itself answers 404.
///
/// # Errors
///
/// Any failure other than a 404 is returned as-is.
pub async fn fetch_readme<C: Transport>(
    client: &C,
    endpoints: &Endpoints,
    full_name: &str,
) -> Result<Option<String>, ClientError> {
    let metadata: ReadmeMetadata = match get_json(client, &endpoints.readme(full_name)).await {
        Ok(metadata) => metadata,
        Err(ClientError::NotFound { .. }) => {
            debug!(repo = %full_name, "No README");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let Some(download_url) = metadata.download_url.filter(|u| !u.is_empty()) else {
        debug!(repo = %full_name, "README metadata has no download_url");
        return Ok(None);
    };

    let url = Url::parse(&download_url).map_err(|source| ClientError::InvalidUrl {
        url: download_url.clone(),
        source,
    })?;

    match get_raw(client, &url).await {
        Ok(text) => Ok(Some(text)),
        Err(ClientError::NotFound { .. }) => {
            debug!(repo = %full_name, url = %url, "README download link is gone");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
