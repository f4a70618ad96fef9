//! Runner configuration.

use crate::client::DEFAULT_API_BASE;
use crate::config::normalize_token;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for a scraping run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// GitHub user whose public repositories are scraped.
    user: String,
    /// Directory READMEs and the index are written to.
    output_dir: PathBuf,
    /// GitHub token used for API calls.
    token: Option<String>,
    /// Pause before each README lookup.
    delay: Duration,
    /// REST API base URL.
    api_base: String,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    ///
    /// An empty `token` is treated as no token.
    pub fn new(user: String, output_dir: PathBuf, token: Option<String>, delay: Duration) -> Self {
        Self {
            user,
            output_dir,
            token: normalize_token(token),
            delay,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Sets a custom REST API base URL, e.g. for GitHub Enterprise.
    pub fn with_api_base(mut self, api_base: String) -> Self {
        self.api_base = api_base;
        self
    }

    /// Returns the GitHub user.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the delay before each README lookup.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the REST API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_public_api_and_drops_empty_token() {
        let config = RunnerConfig::new(
            "octocat".to_string(),
            PathBuf::from("out"),
            Some(String::new()),
            Duration::ZERO,
        );

        assert_eq!(config.user(), "octocat");
        assert_eq!(config.token(), None);
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
    }

    #[test]
    fn with_api_base_overrides_default() {
        let config = RunnerConfig::new(
            "octocat".to_string(),
            PathBuf::from("out"),
            Some("ghp_abc".to_string()),
            Duration::from_millis(300),
        )
        .with_api_base("https://ghe.example.com/api/v3".to_string());

        assert_eq!(config.api_base(), "https://ghe.example.com/api/v3");
        assert_eq!(config.token(), Some("ghp_abc"));
        assert_eq!(config.delay(), Duration::from_millis(300));
    }
}
