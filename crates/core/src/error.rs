//! Core error types for depwalk operations.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use std::path::PathBuf;

use depwalk_graph::GraphError;
use thiserror::Error;

/// Core error type for depwalk operations.
#[derive(Debug, Error)]
pub enum Error {
    // Configuration errors
    #[error("failed to read config file '{path}': {reason}")]
    ConfigReadFailed { path: PathBuf, reason: String },

    #[error("failed to parse config file '{path}': {reason}")]
    ConfigParseFailed { path: PathBuf, reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("repo_mode must be one of 'local', 'remote' or 'test', got: '{mode}'")]
    UnsupportedSourceMode { mode: String },

    // Source errors
    #[error("failed to read graph file '{path}': {reason}")]
    SourceReadFailed { path: PathBuf, reason: String },

    #[error("failed to fetch '{url}': {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("failed to fetch '{url}': server answered {status}")]
    UnexpectedStatus { url: String, status: String },

    #[error("test repository package names must be uppercase Latin letters, got: '{name}'")]
    InvalidFixture { name: String },

    // Graph errors
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl Error {
    /// Create a config read error.
    pub fn config_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create an unsupported source mode error.
    pub fn unsupported_source_mode(mode: impl Into<String>) -> Self {
        Self::UnsupportedSourceMode { mode: mode.into() }
    }

    /// Create a graph file read error.
    pub fn source_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::SourceReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a transport-level fetch error.
    pub fn fetch_failed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FetchFailed {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a non-success HTTP status error.
    pub fn unexpected_status(url: impl Into<String>, status: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            url: url.into(),
            status: status.into(),
        }
    }

    /// Create an invalid test-fixture name error.
    pub fn invalid_fixture(name: impl Into<String>) -> Self {
        Self::InvalidFixture { name: name.into() }
    }

    /// Machine-readable error code (`SCREAMING_SNAKE_CASE`).
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ConfigReadFailed { .. } => "CONFIG_READ_FAILED",
            Self::ConfigParseFailed { .. } => "CONFIG_PARSE_FAILED",
            Self::InvalidConfig { .. } => "CONFIG_INVALID",
            Self::UnsupportedSourceMode { .. } => "UNSUPPORTED_SOURCE_MODE",
            Self::SourceReadFailed { .. } => "SOURCE_READ_FAILED",
            Self::FetchFailed { .. } => "FETCH_FAILED",
            Self::UnexpectedStatus { .. } => "UNEXPECTED_STATUS",
            Self::InvalidFixture { .. } => "INVALID_FIXTURE",
            Self::Graph(GraphError::CycleDetected(_)) => "CYCLE_DETECTED",
            Self::Graph(_) => "GRAPH_INVALID",
        }
    }

    /// Semantic process exit code: 2 configuration, 3 source, 4 graph.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ConfigReadFailed { .. }
            | Self::ConfigParseFailed { .. }
            | Self::InvalidConfig { .. }
            | Self::UnsupportedSourceMode { .. } => 2,
            Self::SourceReadFailed { .. }
            | Self::FetchFailed { .. }
            | Self::UnexpectedStatus { .. }
            | Self::InvalidFixture { .. } => 3,
            Self::Graph(_) => 4,
        }
    }
}
