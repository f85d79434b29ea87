//! Traversal behaviour tests against the public API.
//!
//! Scenarios are written GIVEN / WHEN / THEN and cover the observable
//! ordering contract of both walks.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use depwalk_graph::{
    CyclePolicy, DependencyGraph, GraphError, PackageName, depth_first, parse_document,
    topological_order, topological_order_with,
};

fn reference_graph() -> DependencyGraph {
    parse_document("A", r#"{"A": ["B", "C"], "C": ["D", "E"]}"#).unwrap()
}

#[test]
fn given_reference_graph_then_both_walks_match_documented_orders() {
    // GIVEN: the reference graph A -> [B, C], C -> [D, E]
    let graph = reference_graph();

    // WHEN / THEN: depth-first is pre-order, last listed first
    assert_eq!(depth_first(&graph, "A"), ["A", "C", "E", "D", "B"]);

    // WHEN / THEN: topological is finish order, listed order
    assert_eq!(topological_order(&graph, "A"), ["B", "D", "E", "C", "A"]);
}

#[test]
fn given_three_independent_subtrees_then_depth_first_explores_them_in_reverse() {
    // GIVEN: start -> [x, y, z], each with a private child
    let graph: DependencyGraph = [
        ("start", vec!["x", "y", "z"]),
        ("x", vec!["x1"]),
        ("y", vec!["y1"]),
        ("z", vec!["z1"]),
    ]
    .into_iter()
    .collect();

    // WHEN: walking depth-first
    let order = depth_first(&graph, "start");

    // THEN: z's subtree is finished before y's, and y's before x's
    assert_eq!(order, ["start", "z", "z1", "y", "y1", "x", "x1"]);
}

#[test]
fn given_dangling_reference_then_it_is_a_leaf_in_both_walks() {
    // GIVEN: B is only ever named as a dependency
    let graph: DependencyGraph = [("A", vec!["B"])].into_iter().collect();

    // THEN: B appears once and never causes an error
    assert_eq!(depth_first(&graph, "A"), ["A", "B"]);
    assert_eq!(topological_order(&graph, "A"), ["B", "A"]);
}

#[test]
fn given_unknown_start_then_single_element_results() {
    let graph = reference_graph();

    assert_eq!(depth_first(&graph, "Z"), ["Z"]);
    assert_eq!(topological_order(&graph, "Z"), ["Z"]);
}

#[test]
fn given_cycle_then_lenient_mode_drops_the_back_edge_silently() {
    // Known limitation: cycles are not reported unless strict mode is asked for.
    let graph = parse_document("A", r#"{"A": ["B"], "B": ["C"], "C": ["A"]}"#).unwrap();

    let lenient = topological_order_with(&graph, "A", CyclePolicy::Lenient).unwrap();
    let strict = topological_order_with(&graph, "A", CyclePolicy::Strict);

    assert_eq!(lenient, ["C", "B", "A"]);
    assert_eq!(
        strict,
        Err(GraphError::CycleDetected(
            ["A", "B", "C", "A"].map(String::from).to_vec()
        ))
    );
}

#[test]
fn given_plain_hash_map_then_it_can_be_walked_directly() {
    let mut edges: HashMap<PackageName, Vec<PackageName>> = HashMap::new();
    edges.insert("app".into(), vec!["log".into(), "serde".into()]);
    edges.insert("serde".into(), vec!["serde_derive".into()]);

    assert_eq!(
        depth_first(&edges, "app"),
        ["app", "serde", "serde_derive", "log"]
    );
    assert_eq!(
        topological_order(&edges, "app"),
        ["log", "serde_derive", "serde", "app"]
    );
}

#[test]
fn given_same_graph_walked_twice_then_results_are_identical() {
    let graph = reference_graph();

    assert_eq!(depth_first(&graph, "A"), depth_first(&graph, "A"));
    assert_eq!(topological_order(&graph, "A"), topological_order(&graph, "A"));
}
