//! Thin HTTP layer over the GitHub REST API.
//!
//! Requests go through the [`Transport`] trait so that the listing and README
//! logic can run against any backend. [`GitHubClient`] is the production
//! implementation, built on `octocrab`.

mod decode;
mod endpoints;
mod error;

pub use decode::{decode_text, decode_with, TextEncoding, FALLBACK_ORDER};
pub use endpoints::{Endpoints, DEFAULT_API_BASE, REPOS_PER_PAGE};
pub use error::ClientError;

use crate::config::normalize_token;
use http::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use http::StatusCode;
use http_body_util::BodyExt;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::{debug, trace};
use url::Url;

/// REST API version pinned on every request.
pub const API_VERSION: &str = "2022-11-28";

const API_VERSION_HEADER: HeaderName = HeaderName::from_static("x-github-api-version");

/// What the response body should contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// API-wrapped JSON.
    Json,
    /// The unprocessed file body.
    Raw,
}

impl MediaType {
    /// Value of the `Accept` header for this media type.
    #[must_use]
    pub fn accept(self) -> &'static str {
        match self {
            MediaType::Json => "application/vnd.github+json",
            MediaType::Raw => "application/vnd.github.raw+json",
        }
    }
}

/// Issues GET requests and hands back the response body.
///
/// Implementations must map HTTP 404 to [`ClientError::NotFound`] and any
/// other non-success status to [`ClientError::RequestFailed`].
pub trait Transport {
    /// Performs a GET request for `url`.
    fn get(&self, url: &Url, media: MediaType)
        -> impl Future<Output = Result<Vec<u8>, ClientError>>;
}

/// [`Transport`] backed by an `octocrab` client.
///
/// Every request is sent exactly once. The token goes out as a bearer
/// `Authorization` header on every request, including raw downloads served
/// from hosts other than the API base.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
    authorization: Option<HeaderValue>,
}

impl GitHubClient {
    /// Builds a client for `api_base`, authenticating with `token` if given.
    ///
    /// An empty token is treated as no token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidToken`] if the token cannot be sent as a
    /// header, or [`ClientError::GitHubError`] if the underlying client cannot
    /// be constructed.
    pub fn new(api_base: &str, token: Option<&str>) -> Result<Self, ClientError> {
        let authorization = normalize_token(token.map(str::to_string))
            .map(|token| {
                let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
                value.set_sensitive(true);
                Ok::<_, ClientError>(value)
            })
            .transpose()?;

        let octocrab = Octocrab::builder()
            .base_uri(api_base)?
            .add_retry_config(RetryConfig::None)
            .build()?;
        Ok(Self {
            octocrab,
            authorization,
        })
    }
}

impl Transport for GitHubClient {
    async fn get(&self, url: &Url, media: MediaType) -> Result<Vec<u8>, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(media.accept()));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        if let Some(authorization) = &self.authorization {
            headers.insert(AUTHORIZATION, authorization.clone());
        }

        debug!(url = %url, ?media, "GET");
        let response = self
            .octocrab
            ._get_with_headers(url.as_str(), Some(headers))
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ClientError::RequestFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.into_body().collect().await?.to_bytes();
        trace!(url = %url, bytes = body.len(), "Response received");
        Ok(body.to_vec())
    }
}

/// Fetches `url` in JSON mode and deserializes the body.
///
/// # Errors
///
/// Propagates transport errors; returns [`ClientError::JsonError`] if the body
/// does not deserialize into `T`.
pub async fn get_json<T, C>(client: &C, url: &Url) -> Result<T, ClientError>
where
    T: DeserializeOwned,
    C: Transport,
{
    let body = client.get(url, MediaType::Json).await?;
    serde_json::from_slice(&body).map_err(|source| ClientError::JsonError {
        url: url.to_string(),
        source,
    })
}

/// Fetches `url` in raw mode and decodes it with [`decode_text`].
///
/// # Errors
///
/// Propagates transport errors. Decoding itself never fails.
pub async fn get_raw<C: Transport>(client: &C, url: &Url) -> Result<String, ClientError> {
    let body = client.get(url, MediaType::Raw).await?;
    Ok(decode_text(&body))
}
