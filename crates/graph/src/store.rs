//! # Dependency graph store
//!
//! Maps each package name to the ordered list of its direct dependencies.
//! A package that only ever appears as a dependency has no entry and is
//! treated as a leaf.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Type alias for a package identifier
pub type PackageName = String;

/// Read access to a package's direct dependencies.
///
/// Implementations must be total: an unknown package yields an empty slice,
/// never an error. The returned order is the order supplied by the input and
/// must not be sorted or de-duplicated.
pub trait DependencySource {
    /// Direct dependencies of `package`, in listed order.
    fn dependencies_of(&self, package: &str) -> &[PackageName];
}

impl DependencySource for HashMap<PackageName, Vec<PackageName>> {
    fn dependencies_of(&self, package: &str) -> &[PackageName] {
        self.get(package).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Dependency graph keyed by package name.
///
/// Built once by a loader, then borrowed read-only by the traversals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    edges: HashMap<PackageName, Vec<PackageName>>,
}

impl DependencyGraph {
    /// Create a new empty graph
    ///
    /// # Examples
    ///
    /// ```
    /// use depwalk_graph::DependencyGraph;
    ///
    /// let graph = DependencyGraph::new();
    /// assert_eq!(graph.package_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Set the dependency list of `package`, replacing any previous list.
    pub fn insert(
        &mut self,
        package: impl Into<PackageName>,
        dependencies: impl IntoIterator<Item = impl Into<PackageName>>,
    ) {
        self.edges.insert(
            package.into(),
            dependencies.into_iter().map(Into::into).collect(),
        );
    }

    /// Whether `package` has its own entry (leaf-only names do not).
    #[must_use]
    pub fn contains(&self, package: &str) -> bool {
        self.edges.contains_key(package)
    }

    /// Number of packages with their own entry
    #[must_use]
    pub fn package_count(&self) -> usize {
        self.edges.len()
    }

    /// Total number of listed edges, duplicates included
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Packages with their own entry, sorted by name.
    pub fn packages(&self) -> impl Iterator<Item = &PackageName> {
        self.edges.keys().collect::<BTreeSet<_>>().into_iter()
    }

    /// First name in the graph, keys and dependencies alike, for which
    /// `accept` returns false. Names are checked in sorted order.
    pub fn find_package_name<F>(&self, mut accept: F) -> Option<&str>
    where
        F: FnMut(&str) -> bool,
    {
        self.edges
            .iter()
            .flat_map(|(package, dependencies)| std::iter::once(package).chain(dependencies))
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .find(|&name| !accept(name))
    }

    /// Reject graphs containing empty package or dependency names.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyPackageName`] for an empty key and
    /// [`GraphError::EmptyDependencyName`] for an empty entry in a list.
    pub fn validate(&self) -> GraphResult<()> {
        if self.edges.contains_key("") {
            return Err(GraphError::EmptyPackageName);
        }

        let offender = self
            .edges
            .iter()
            .filter(|(_, dependencies)| dependencies.iter().any(String::is_empty))
            .map(|(package, _)| package)
            .min();

        offender.map_or(Ok(()), |package| {
            Err(GraphError::empty_dependency_name(package.clone()))
        })
    }
}

impl DependencySource for DependencyGraph {
    fn dependencies_of(&self, package: &str) -> &[PackageName] {
        self.edges.dependencies_of(package)
    }
}

impl<K, V> FromIterator<(K, Vec<V>)> for DependencyGraph
where
    K: Into<PackageName>,
    V: Into<PackageName>,
{
    fn from_iter<I: IntoIterator<Item = (K, Vec<V>)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (package, dependencies) in iter {
            graph.insert(package, dependencies);
        }
        graph
    }
}

impl From<HashMap<PackageName, Vec<PackageName>>> for DependencyGraph {
    fn from(edges: HashMap<PackageName, Vec<PackageName>>) -> Self {
        Self { edges }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn sample() -> DependencyGraph {
        [("A", vec!["B", "C"]), ("C", vec!["D", "E"])]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = DependencyGraph::new();
        assert_eq!(graph.package_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_dependencies_keep_listed_order() {
        let mut graph = DependencyGraph::new();
        graph.insert("app", ["zlib", "acl", "musl"]);

        assert_eq!(graph.dependencies_of("app"), ["zlib", "acl", "musl"]);
    }

    #[test]
    fn test_unknown_package_has_no_dependencies() {
        let graph = sample();
        assert!(graph.dependencies_of("D").is_empty());
        assert!(graph.dependencies_of("not-in-graph").is_empty());
        assert!(!graph.contains("D"));
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let mut graph = DependencyGraph::new();
        graph.insert("app", ["x", "x", "y"]);

        assert_eq!(graph.dependencies_of("app").len(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_insert_replaces_existing_list() {
        let mut graph = sample();
        graph.insert("A", ["Z"]);

        assert_eq!(graph.dependencies_of("A"), ["Z"]);
        assert_eq!(graph.package_count(), 2);
    }

    #[test]
    fn test_packages_are_sorted() {
        let graph: DependencyGraph = [("c", vec!["a"]), ("a", vec![]), ("b", vec!["c"])]
            .into_iter()
            .collect::<DependencyGraph>();

        let names: Vec<&str> = graph.packages().map(String::as_str).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_find_package_name_checks_dependencies_too() {
        let graph = sample();

        assert_eq!(graph.find_package_name(|name| name != "E"), Some("E"));
        assert_eq!(graph.find_package_name(|_| true), None);
        assert_eq!(graph.find_package_name(|name| name > "B"), Some("A"));
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let mut graph = sample();
        graph.insert("", ["A"]);

        assert_eq!(graph.validate(), Err(GraphError::EmptyPackageName));
    }

    #[test]
    fn test_validate_rejects_empty_dependency() {
        let mut graph = sample();
        graph.insert("B", ["", "C"]);

        assert_eq!(
            graph.validate(),
            Err(GraphError::empty_dependency_name("B"))
        );
    }

    #[test]
    fn test_plain_map_is_a_dependency_source() {
        let mut edges: HashMap<PackageName, Vec<PackageName>> = HashMap::new();
        edges.insert("A".into(), vec!["B".into()]);

        assert_eq!(edges.dependencies_of("A"), ["B"]);
        assert!(edges.dependencies_of("B").is_empty());
    }

    #[test]
    fn test_serde_is_a_plain_object() {
        let graph: DependencyGraph = serde_json::from_str(r#"{"A": ["B"]}"#).unwrap();
        assert_eq!(graph.dependencies_of("A"), ["B"]);

        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(json, serde_json::json!({"A": ["B"]}));
    }
}
