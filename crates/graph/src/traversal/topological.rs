//! Iterative post-order traversal producing an installation order.
//!
//! The walk simulates recursive DFS with an explicit stack of [`Frame`]s.
//! A package is appended to the result when its frame is popped, which only
//! happens once every one of its dependencies has been explored. Ignoring
//! cycles, every dependency therefore precedes the packages that require it.
//!
//! # Cycles
//!
//! A package is marked visited when its frame is entered and is never
//! entered again. Under [`CyclePolicy::Lenient`] a back edge is skipped
//! silently, so a cyclic graph still yields each package exactly once but the
//! order is only as good as the walk that produced it. [`CyclePolicy::Strict`]
//! turns the first back edge into [`GraphError::CycleDetected`].

use std::collections::HashSet;
use std::convert::Infallible;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::store::{DependencySource, PackageName};

/// How the topological walk treats a dependency that is already on the
/// current path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CyclePolicy {
    /// Skip the back edge and keep going.
    #[default]
    Lenient,
    /// Fail with the cycle path.
    Strict,
}

/// One package's progress through its dependency list.
#[derive(Debug)]
struct Frame<'a> {
    package: &'a str,
    dependencies: &'a [PackageName],
    next: usize,
}

impl<'a> Frame<'a> {
    fn enter<G>(graph: &'a G, package: &'a str) -> Self
    where
        G: DependencySource + ?Sized,
    {
        Self {
            package,
            dependencies: graph.dependencies_of(package),
            next: 0,
        }
    }

    /// Next unexplored dependency, advancing the index past it.
    fn advance(&mut self) -> Option<&'a str> {
        let dependencies: &'a [PackageName] = self.dependencies;
        let dependency = dependencies.get(self.next)?;
        self.next = self.next.saturating_add(1);
        Some(dependency.as_str())
    }
}

/// Installation order for `start`: every reachable package exactly once,
/// dependencies first. Cycles are skipped silently.
///
/// # Examples
///
/// ```
/// use depwalk_graph::{DependencyGraph, topological_order};
///
/// let graph: DependencyGraph = [("A", vec!["B", "C"]), ("C", vec!["D", "E"])]
///     .into_iter()
///     .collect();
///
/// assert_eq!(topological_order(&graph, "A"), ["B", "D", "E", "C", "A"]);
/// ```
pub fn topological_order<G>(graph: &G, start: &str) -> Vec<PackageName>
where
    G: DependencySource + ?Sized,
{
    let walked = finish_order(graph, start, |path, package| {
        debug!(
            package,
            via = path.last().map_or(start, |frame| frame.package),
            "skipping dependency cycle"
        );
        Ok::<(), Infallible>(())
    });

    match walked {
        Ok(order) => order,
        Err(never) => match never {},
    }
}

/// Like [`topological_order`], but fails on the first dependency cycle.
///
/// # Errors
///
/// Returns [`GraphError::CycleDetected`] with the cycle path, starting and
/// ending at the re-entered package.
pub fn topological_order_strict<G>(graph: &G, start: &str) -> GraphResult<Vec<PackageName>>
where
    G: DependencySource + ?Sized,
{
    finish_order(graph, start, |path, package| {
        let cycle = path
            .iter()
            .skip_while(|frame| frame.package != package)
            .map(|frame| frame.package.to_owned())
            .chain(std::iter::once(package.to_owned()))
            .collect();
        Err(GraphError::cycle_detected(cycle))
    })
}

/// Run the topological walk under the given [`CyclePolicy`].
///
/// # Errors
///
/// Only [`CyclePolicy::Strict`] can fail, with [`GraphError::CycleDetected`].
pub fn topological_order_with<G>(
    graph: &G,
    start: &str,
    policy: CyclePolicy,
) -> GraphResult<Vec<PackageName>>
where
    G: DependencySource + ?Sized,
{
    match policy {
        CyclePolicy::Lenient => Ok(topological_order(graph, start)),
        CyclePolicy::Strict => topological_order_strict(graph, start),
    }
}

/// Shared walker. `on_back_edge` sees the frames of the current path and the
/// dependency that points back into it.
fn finish_order<'a, G, F, E>(
    graph: &'a G,
    start: &'a str,
    mut on_back_edge: F,
) -> Result<Vec<PackageName>, E>
where
    G: DependencySource + ?Sized,
    F: FnMut(&[Frame<'a>], &'a str) -> Result<(), E>,
{
    let mut stack = vec![Frame::enter(graph, start)];
    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut on_path: HashSet<&str> = HashSet::from([start]);
    let mut order = Vec::new();

    while let Some(top) = stack.last_mut() {
        match top.advance() {
            Some(dependency) if !visited.contains(dependency) => {
                visited.insert(dependency);
                on_path.insert(dependency);
                stack.push(Frame::enter(graph, dependency));
            }
            Some(dependency) => {
                if on_path.contains(dependency) {
                    on_back_edge(&stack, dependency)?;
                }
            }
            None => {
                let finished = top.package;
                stack.pop();
                on_path.remove(finished);
                order.push(finished.to_owned());
            }
        }
    }

    debug!(start, finished = order.len(), "topological traversal finished");
    Ok(order)
}
