#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod client;
pub mod config;
pub mod output;
pub mod readme;
pub mod repos;
pub mod runner;
pub mod summary;

pub use client::{
    decode_text, decode_with, get_json, get_raw, ClientError, Endpoints, GitHubClient, MediaType,
    TextEncoding, Transport,
};
pub use config::{load_env_file, load_env_files, parse_delay, ConfigError};
pub use output::{IndexEntry, OutputDir, OutputError};
pub use readme::{fetch_readme, ReadmeMetadata};
pub use repos::{list_repositories, Repository};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{ReadmeOutcome, RunSummary};
