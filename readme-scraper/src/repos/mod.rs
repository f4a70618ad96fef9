//! Repository listing.
//!
//! Walks the paginated `/users/{user}/repos` endpoint until GitHub hands back
//! an empty page.

mod repository;

pub use repository::Repository;

use crate::client::{get_json, ClientError, Endpoints, Transport};
use tracing::{debug, info, info_span, Instrument};

/// Lists every public repository of `user`, in listing order.
///
/// Pages are requested one after another starting at page 1; the first empty
/// page ends the listing.
///
/// # Errors
///
/// Returns [`ClientError`] if any page request fails.
pub async fn list_repositories<C: Transport>(
    client: &C,
    endpoints: &Endpoints,
    user: &str,
) -> Result<Vec<Repository>, ClientError> {
    let span = info_span!("list_repositories", user = %user);

    async {
        let mut repositories = Vec::new();
        let mut page = 1u32;

        loop {
            let url = endpoints.repos_page(user, page);
            let batch: Vec<Repository> = get_json(client, &url).await?;
            debug!(page, count = batch.len(), "Fetched page");

            if batch.is_empty() {
                break;
            }
            repositories.extend(batch);
            page += 1;
        }

        info!(count = repositories.len(), "Listing complete");
        Ok(repositories)
    }
    .instrument(span)
    .await
}
