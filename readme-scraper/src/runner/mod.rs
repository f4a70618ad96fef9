//! Orchestrates a scraping run.
//!
//! Lists the user's repositories, then walks them one at a time: wait, look up
//! the README, save it or note its absence. The index is written once at the
//! end. A fatal error stops the run and leaves files written so far in place.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::client::{Endpoints, GitHubClient, Transport};
use crate::output::{IndexEntry, OutputDir};
use crate::readme::fetch_readme;
use crate::repos::{list_repositories, Repository};
use crate::summary::{ReadmeOutcome, RunSummary};
use tracing::{info, info_span, Instrument};

/// Runs the scrape pipeline against a [`Transport`].
pub struct Runner<C = GitHubClient> {
    config: RunnerConfig,
    client: C,
    endpoints: Endpoints,
}

impl Runner<GitHubClient> {
    /// Builds a runner that talks to GitHub through `octocrab`.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the API base is invalid or the client cannot
    /// be constructed.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let client = GitHubClient::new(config.api_base(), config.token())?;
        Self::with_client(config, client)
    }
}

impl<C: Transport> Runner<C> {
    /// Builds a runner using the given transport.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] if the API base is invalid.
    pub fn with_client(config: RunnerConfig, client: C) -> Result<Self, RunnerError> {
        let endpoints = Endpoints::new(config.api_base())?;
        Ok(Self {
            config,
            client,
            endpoints,
        })
    }

    /// Executes the full run.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] on the first failure that is not a missing
    /// README. Nothing written before the failure is rolled back, and the
    /// index is not written.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let output = OutputDir::create(self.config.output_dir())?;

        info!(user = %self.config.user(), "Fetching public repositories");
        let repositories =
            list_repositories(&self.client, &self.endpoints, self.config.user()).await?;
        info!(count = repositories.len(), "Found repositories");

        let mut summary = RunSummary::new(output.path().to_path_buf(), repositories.len());
        let mut index = Vec::with_capacity(repositories.len());

        for repository in &repositories {
            let outcome = self.process_repository(repository, &output).await?;
            summary.record(&outcome);
            index.push(IndexEntry::new(
                repository,
                outcome.file_name().map(str::to_string),
            ));
        }

        summary.index_path = output.write_index(&index)?;
        info!(
            saved = summary.readmes_saved,
            missing = summary.readmes_missing,
            index = %summary.index_path.display(),
            "Run complete"
        );
        Ok(summary)
    }

    async fn process_repository(
        &self,
        repository: &Repository,
        output: &OutputDir,
    ) -> Result<ReadmeOutcome, RunnerError> {
        let span = info_span!("repository", repo = %repository.name);

        async {
            tokio::time::sleep(self.config.delay()).await;

            match fetch_readme(&self.client, &self.endpoints, &repository.full_name).await? {
                Some(contents) => {
                    let file_name = output.write_readme(&repository.name, &contents)?;
                    info!(file = %file_name, "README saved");
                    Ok(ReadmeOutcome::Saved {
                        repository: repository.name.clone(),
                        file_name,
                    })
                }
                None => {
                    info!("No README");
                    Ok(ReadmeOutcome::Missing {
                        repository: repository.name.clone(),
                    })
                }
            }
        }
        .instrument(span)
        .await
    }
}
