//! Iterative depth-first traversal (pre-order).

use std::collections::HashSet;

use tracing::debug;

use crate::store::{DependencySource, PackageName};

/// Every package reachable from `start`, each exactly once, in the order
/// they are popped off an explicit stack.
///
/// Dependencies are pushed in listed order, so the last listed dependency is
/// explored first at every branch. An unknown `start` yields `[start]`.
///
/// # Examples
///
/// ```
/// use depwalk_graph::{DependencyGraph, depth_first};
///
/// let graph: DependencyGraph = [("A", vec!["B", "C"]), ("C", vec!["D", "E"])]
///     .into_iter()
///     .collect();
///
/// assert_eq!(depth_first(&graph, "A"), ["A", "C", "E", "D", "B"]);
/// ```
pub fn depth_first<G>(graph: &G, start: &str) -> Vec<PackageName>
where
    G: DependencySource + ?Sized,
{
    let mut stack: Vec<&str> = vec![start];
    let mut visited: HashSet<&str> = HashSet::new();
    let mut order = Vec::new();

    while let Some(package) = stack.pop() {
        if !visited.insert(package) {
            continue;
        }
        order.push(package.to_owned());

        stack.extend(
            graph
                .dependencies_of(package)
                .iter()
                .map(String::as_str)
                .filter(|dependency| !visited.contains(dependency)),
        );
    }

    debug!(start, visited = order.len(), "depth-first traversal finished");
    order
}
