#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # depwalk
//!
//! Dependency graph walker: lists a package's direct dependencies, walks
//! everything reachable depth-first, and computes a dependencies-first
//! installation order.
//!
//! The graph engine lives in `depwalk-graph` and configuration in
//! `depwalk-core`; this crate adds the graph source, rendering and CLI.

pub use depwalk_core;
pub use depwalk_graph;

pub mod cli;
pub mod commands;
pub mod json;
pub mod output;
pub mod source;
