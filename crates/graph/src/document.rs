//! Graph document parsing.
//!
//! Two JSON shapes are accepted:
//!
//! ```json
//! { "A": ["B", "C"], "C": ["D", "E"] }
//! ```
//!
//! and a package manifest, whose `dependencies` object maps each direct
//! dependency to an exact version:
//!
//! ```json
//! { "name": "A", "dependencies": { "B": "1.0.0", "C": "2.3.1" } }
//! ```
//!
//! Any top-level object with a non-array member is read as a manifest, so a
//! manifest without `dependencies` (or with `"dependencies": null`) is a
//! package with no direct dependencies. A manifest only describes its own
//! package, so it becomes a one-entry graph keyed by the caller's root
//! package, with the versions kept alongside.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::store::{DependencyGraph, PackageName};

#[derive(Debug, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: Option<BTreeMap<PackageName, String>>,
}

/// A parsed document: the graph plus any pinned versions it declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphDocument {
    pub graph: DependencyGraph,
    /// Version per package, only known for manifest dependencies.
    pub versions: BTreeMap<PackageName, String>,
}

impl GraphDocument {
    /// Version declared for `package`, if any.
    #[must_use]
    pub fn version_of(&self, package: &str) -> Option<&str> {
        self.versions.get(package).map(String::as_str)
    }

    #[must_use]
    pub fn into_graph(self) -> DependencyGraph {
        self.graph
    }
}

impl From<DependencyGraph> for GraphDocument {
    fn from(graph: DependencyGraph) -> Self {
        Self {
            graph,
            versions: BTreeMap::new(),
        }
    }
}

/// Parse `text` into a validated [`GraphDocument`] rooted at `root`.
///
/// # Errors
///
/// Returns [`GraphError::Parse`] for malformed JSON or an unexpected shape,
/// and the [`DependencyGraph::validate`] errors for empty names. No partial
/// graph is ever returned.
pub fn read_document(root: &str, text: &str) -> GraphResult<GraphDocument> {
    let value: Value = serde_json::from_str(text).map_err(|e| GraphError::parse(e.to_string()))?;

    let document = if is_manifest(&value) {
        let manifest: PackageManifest = serde_json::from_value(value)
            .map_err(|e| GraphError::parse(format!("invalid package manifest: {e}")))?;
        let versions = manifest.dependencies.unwrap_or_default();
        debug!(root, dependencies = versions.len(), "parsed package manifest");

        let names: Vec<PackageName> = versions.keys().cloned().collect();
        GraphDocument {
            graph: std::iter::once((root, names)).collect(),
            versions,
        }
    } else {
        serde_json::from_value::<DependencyGraph>(value)
            .map(GraphDocument::from)
            .map_err(|e| GraphError::parse(format!("invalid graph document: {e}")))?
    };

    document.graph.validate()?;
    Ok(document)
}

/// Parse `text` into a validated [`DependencyGraph`], dropping versions.
///
/// # Errors
///
/// See [`read_document`].
pub fn parse_document(root: &str, text: &str) -> GraphResult<DependencyGraph> {
    read_document(root, text).map(GraphDocument::into_graph)
}

fn is_manifest(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|members| members.values().any(|member| !member.is_array()))
}
