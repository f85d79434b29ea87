//! Configuration loading and validation
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Config file: `config.json` in the working directory, or `--config PATH`
//! 2. Environment variables: `DEPWALK_*`
//! 3. CLI flags (`--package`, `--source`, `--mode`)
//!
//! Only the merged result is validated, so a file may leave out fields that
//! the environment or the command line supplies.
//!
//! # Example Config
//!
//! ```json
//! {
//!   "package_name": "A",
//!   "repo_url": "fixtures/graph.json",
//!   "repo_mode": "test"
//! }
//! ```
//!
//! A file ending in `.toml` is read as TOML with the same keys.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

pub const ENV_PACKAGE_NAME: &str = "DEPWALK_PACKAGE_NAME";
pub const ENV_REPO_URL: &str = "DEPWALK_REPO_URL";
pub const ENV_REPO_MODE: &str = "DEPWALK_REPO_MODE";

// ═══════════════════════════════════════════════════════════════════════════
// CONFIGURATION STRUCTURES
// ═══════════════════════════════════════════════════════════════════════════

/// Where the dependency graph document comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoMode {
    /// `repo_url` is a path to a graph file on disk.
    Local,
    /// `repo_url` is an `http(s)` URL serving the graph document.
    Remote,
    /// `repo_url` is a path to a test repository whose packages are named by
    /// uppercase Latin letters.
    Test,
}

impl RepoMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for RepoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepoMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            "test" => Ok(Self::Test),
            _ => Err(Error::unsupported_source_mode(s)),
        }
    }
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub package_name: String,
    pub repo_url: String,
    pub repo_mode: RepoMode,
}

/// One configuration layer. Every field is optional until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    pub package_name: Option<String>,
    pub repo_url: Option<String>,
    pub repo_mode: Option<String>,
}

/// Inputs to [`load_config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Config file to read, if any.
    pub file: Option<PathBuf>,
    /// Whether a missing `file` is an error (explicit `--config`) or simply
    /// skipped (the default lookup).
    pub file_required: bool,
    /// Highest-precedence layer, usually built from CLI flags.
    pub overrides: PartialConfig,
}

impl ConfigSources {
    /// Read `path`, failing if it does not exist.
    #[must_use]
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
            file_required: true,
            overrides: PartialConfig::default(),
        }
    }

    /// Read [`DEFAULT_CONFIG_FILE`] from the working directory if it exists.
    #[must_use]
    pub fn default_file() -> Self {
        Self {
            file: Some(PathBuf::from(DEFAULT_CONFIG_FILE)),
            file_required: false,
            overrides: PartialConfig::default(),
        }
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: PartialConfig) -> Self {
        self.overrides = overrides;
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

/// Load configuration from all sources with hierarchy, reading the real
/// process environment.
///
/// # Errors
///
/// Returns error if:
/// - A required config file is missing or unreadable
/// - A config file is malformed JSON / TOML
/// - The merged values fail validation
pub fn load_config(sources: &ConfigSources) -> Result<Config> {
    load_config_with_env(sources, |key| std::env::var(key).ok())
}

/// Same as [`load_config`] with an injectable environment lookup.
///
/// # Errors
///
/// See [`load_config`].
pub fn load_config_with_env<F>(sources: &ConfigSources, env: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    // 1. Config file
    let mut merged = match &sources.file {
        Some(path) if sources.file_required || path.exists() => {
            debug!(path = %path.display(), "reading config file");
            PartialConfig::from_file(path)?
        }
        _ => PartialConfig::default(),
    };

    // 2. Environment variables
    merged.merge(PartialConfig::from_env_with(env));

    // 3. CLI flags
    merged.merge(sources.overrides.clone());

    merged.validate()
}

/// Whether `name` is a valid test-repository package name: one or more
/// uppercase ASCII Latin letters.
#[must_use]
pub fn is_fixture_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|byte| byte.is_ascii_uppercase())
}

// ═══════════════════════════════════════════════════════════════════════════
// LAYER METHODS
// ═══════════════════════════════════════════════════════════════════════════

impl PartialConfig {
    /// Parse a config file, choosing TOML for `.toml` and JSON otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is malformed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config_read_failed(path, e.to_string()))?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            toml::from_str(&content).map_err(|e| Error::config_parse_failed(path, e.to_string()))
        } else {
            serde_json::from_str(&content)
                .map_err(|e| Error::config_parse_failed(path, e.to_string()))
        }
    }

    /// Build a layer from `DEPWALK_*` variables using `env` as the lookup.
    pub fn from_env_with<F>(env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            package_name: env(ENV_PACKAGE_NAME),
            repo_url: env(ENV_REPO_URL),
            repo_mode: env(ENV_REPO_MODE),
        }
    }

    /// Merge another layer into this one (other takes precedence where set).
    pub fn merge(&mut self, other: Self) {
        if other.package_name.is_some() {
            self.package_name = other.package_name;
        }
        if other.repo_url.is_some() {
            self.repo_url = other.repo_url;
        }
        if other.repo_mode.is_some() {
            self.repo_mode = other.repo_mode;
        }
    }

    /// Check the merged layer and produce a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `package_name` or `repo_url` is missing or blank
    /// - `repo_mode` is missing or not `local`, `remote` or `test`
    /// - `remote` mode has a `repo_url` that is not an `http(s)` URL
    /// - `test` mode has a `package_name` that is not uppercase Latin letters
    pub fn validate(self) -> Result<Config> {
        let package_name = required(self.package_name, "package_name")?;
        let repo_url = required(self.repo_url, "repo_url")?;
        let repo_mode = self
            .repo_mode
            .ok_or_else(|| Error::invalid_config("repo_mode must not be empty"))?
            .parse::<RepoMode>()?;

        match repo_mode {
            RepoMode::Remote => validate_remote_url(&repo_url)?,
            RepoMode::Test if !is_fixture_name(&package_name) => {
                return Err(Error::invalid_config(format!(
                    "in test mode package_name must be uppercase Latin letters, got: '{package_name}'"
                )));
            }
            RepoMode::Local | RepoMode::Test => {}
        }

        Ok(Config {
            package_name,
            repo_url,
            repo_mode,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// HELPER FUNCTIONS
// ═══════════════════════════════════════════════════════════════════════════

fn required(value: Option<String>, field: &str) -> Result<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::invalid_config(format!("{field} must not be empty")))
}

fn validate_remote_url(repo_url: &str) -> Result<()> {
    let parsed = url::Url::parse(repo_url)
        .map_err(|e| Error::invalid_config(format!("repo_url is not a valid URL: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::invalid_config(format!(
            "remote repo_url must use http or https, got: '{other}'"
        ))),
    }
}
