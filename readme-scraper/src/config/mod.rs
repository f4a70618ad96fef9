//! Run configuration defaults and loading.
//!
//! Values are merged in increasing precedence: `.env` files, the process
//! environment, then command-line flags. `.env` files are applied to the
//! process environment without overriding anything already set, which leaves
//! the last two layers to the argument parser.

mod error;

pub use error::ConfigError;

use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// GitHub user scraped when none is given.
pub const DEFAULT_USER: &str = "apotato369550";

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "references/readmes";

/// Seconds to wait before each README lookup, in the form [`parse_delay`] takes.
pub const DEFAULT_DELAY: &str = "0.3";

/// Environment variable holding the GitHub token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Name of the optional `KEY=VALUE` file.
pub const ENV_FILE_NAME: &str = ".env";

/// Loads `KEY=VALUE` pairs from `path` into the process environment.
///
/// Variables that are already set are left untouched. Blank lines and `#`
/// comments are ignored.
///
/// # Returns
///
/// `true` if the file existed and was applied, `false` if there is no file.
///
/// # Errors
///
/// Returns [`ConfigError::EnvFile`] if the file exists but cannot be parsed.
pub fn load_env_file(path: &Path) -> Result<bool, ConfigError> {
    if !path.is_file() {
        return Ok(false);
    }

    dotenvy::from_path(path).map_err(|source| ConfigError::EnvFile {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), "Loaded env file");
    Ok(true)
}

/// Places searched for a `.env` file, highest priority first.
///
/// The directory holding the executable comes before the working directory.
pub fn env_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(dir.join(ENV_FILE_NAME));
    }

    let local = PathBuf::from(ENV_FILE_NAME);
    if !candidates.iter().any(|c| same_file(c, &local)) {
        candidates.push(local);
    }
    candidates
}

/// Loads every `.env` candidate in priority order.
///
/// Since loading never overrides, a key defined in several files takes the
/// value from the first one.
///
/// # Returns
///
/// The files that were found and applied.
///
/// # Errors
///
/// Returns the first [`ConfigError::EnvFile`] encountered.
pub fn load_env_files() -> Result<Vec<PathBuf>, ConfigError> {
    let mut loaded = Vec::new();
    for candidate in env_file_candidates() {
        if load_env_file(&candidate)? {
            loaded.push(candidate);
        }
    }
    Ok(loaded)
}

/// Parses a delay given in (fractional) seconds.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDelay`] for non-numeric, negative, infinite
/// or NaN input.
pub fn parse_delay(value: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidDelay {
        value: value.to_string(),
        reason,
    };

    let secs: f64 = value.trim().parse().map_err(|e| invalid(format!("{e}")))?;
    Duration::try_from_secs_f64(secs).map_err(|e| invalid(e.to_string()))
}

/// Drops empty tokens so they behave like no token at all.
#[must_use]
pub fn normalize_token(token: Option<String>) -> Option<String> {
    token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
