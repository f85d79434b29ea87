//! Graph-specific error types

use itertools::Itertools;
use thiserror::Error;

use crate::PackageName;

/// Graph-specific error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("failed to parse dependency graph: {reason}")]
    Parse { reason: String },

    #[error("dependency graph contains an empty package name")]
    EmptyPackageName,

    #[error("package '{package}' lists an empty dependency name")]
    EmptyDependencyName { package: PackageName },

    #[error("dependency cycle detected: {}", .0.iter().join(" -> "))]
    CycleDetected(Vec<PackageName>),
}

impl GraphError {
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    pub fn empty_dependency_name(package: impl Into<PackageName>) -> Self {
        Self::EmptyDependencyName {
            package: package.into(),
        }
    }

    pub const fn cycle_detected(path: Vec<PackageName>) -> Self {
        Self::CycleDetected(path)
    }
}

/// Result type for graph operations
pub type GraphResult<T> = std::result::Result<T, GraphError>;
