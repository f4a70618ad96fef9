//! GitHub REST endpoint construction.

use crate::config::ConfigError;
use url::Url;

/// Default GitHub REST API base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repositories requested per listing page.
pub const REPOS_PER_PAGE: u8 = 100;

/// Builds endpoint URLs relative to an API base.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Creates endpoints rooted at `api_base`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiBase`] if the base is not an absolute
    /// URL that can carry a path.
    pub fn new(api_base: &str) -> Result<Self, ConfigError> {
        let base = Url::parse(api_base).map_err(|e| ConfigError::InvalidApiBase {
            url: api_base.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiBase {
                url: api_base.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }
        Ok(Self { base })
    }

    /// Listing page `page` (1-based) of a user's public repositories.
    #[must_use]
    pub fn repos_page(&self, user: &str, page: u32) -> Url {
        let mut url = self.with_segments(["users", user, "repos"]);
        url.query_pairs_mut()
            .append_pair("type", "public")
            .append_pair("per_page", &REPOS_PER_PAGE.to_string())
            .append_pair("page", &page.to_string());
        url
    }

    /// README metadata endpoint for `full_name` ("owner/name").
    #[must_use]
    pub fn readme(&self, full_name: &str) -> Url {
        let segments = std::iter::once("repos")
            .chain(full_name.split('/'))
            .chain(std::iter::once("readme"));
        self.with_segments(segments)
    }

    fn with_segments<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        // Checked in `new`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_repos_page_url() {
        let endpoints = Endpoints::new(DEFAULT_API_BASE).unwrap();
        assert_eq!(
            endpoints.repos_page("octocat", 3).as_str(),
            "https://api.github.com/users/octocat/repos?type=public&per_page=100&page=3"
        );
    }

    #[test]
    fn builds_readme_url() {
        let endpoints = Endpoints::new(DEFAULT_API_BASE).unwrap();
        assert_eq!(
            endpoints.readme("octocat/Hello-World").as_str(),
            "https://api.github.com/repos/octocat/Hello-World/readme"
        );
    }

    #[test]
    fn keeps_base_path_prefix() {
        let endpoints = Endpoints::new("https://ghe.example.com/api/v3/").unwrap();
        assert_eq!(
            endpoints.readme("team/tool").as_str(),
            "https://ghe.example.com/api/v3/repos/team/tool/readme"
        );
    }

    #[test]
    fn rejects_relative_base() {
        let result = Endpoints::new("api.github.com");
        assert!(matches!(result, Err(ConfigError::InvalidApiBase { .. })));
    }

    #[test]
    fn rejects_base_without_path() {
        let result = Endpoints::new("mailto:someone@example.com");
        assert!(matches!(result, Err(ConfigError::InvalidApiBase { .. })));
    }
}
