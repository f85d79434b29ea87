//! # Traversals
//!
//! Both walks use an explicit work stack instead of recursion, so graph depth
//! is bounded by heap, not by the call stack. Each call owns its own stack,
//! visited set and result; the graph is only borrowed.

mod depth_first;
mod topological;

use itertools::Itertools;

pub use depth_first::depth_first;
pub use topological::{
    CyclePolicy, topological_order, topological_order_strict, topological_order_with,
};

use crate::store::{DependencySource, PackageName};

/// Direct dependencies of `package` in listed order, first occurrence kept.
pub fn direct_dependencies<G>(graph: &G, package: &str) -> Vec<PackageName>
where
    G: DependencySource + ?Sized,
{
    graph
        .dependencies_of(package)
        .iter()
        .unique()
        .cloned()
        .collect()
}
