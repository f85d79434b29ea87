#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # depwalk-graph
//!
//! In-memory dependency graph plus the two traversals built on it:
//!
//! - [`depth_first`]: every reachable package in pre-order (stack-pop order)
//! - [`topological_order`]: every reachable package in finish order, usable
//!   as an installation order
//!
//! Both are iterative, total over any graph and any start name, and
//! tolerate cycles, self-loops and dangling references.

pub mod document;
pub mod error;
pub mod store;
pub mod traversal;

pub use document::{GraphDocument, parse_document, read_document};
pub use error::{GraphError, GraphResult};
pub use store::{DependencyGraph, DependencySource, PackageName};
pub use traversal::{
    CyclePolicy, depth_first, direct_dependencies, topological_order, topological_order_strict,
    topological_order_with,
};
