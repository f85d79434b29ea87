//! Traversal property-based tests
//!
//! Random graphs, acyclic and arbitrary, checked against invariants that
//! MUST hold for every input.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::arithmetic_side_effects)]

use std::collections::{HashMap, HashSet};

use depwalk_graph::{
    DependencyGraph, DependencySource, GraphError, depth_first, topological_order,
    topological_order_strict,
};
use proptest::prelude::*;

const NODES: usize = 12;

fn name(index: usize) -> String {
    format!("p{index}")
}

/// Each package only depends on higher-numbered packages.
fn acyclic_graph() -> impl Strategy<Value = DependencyGraph> {
    prop::collection::vec(prop::collection::vec(0..NODES, 0..5), NODES).prop_map(|lists| {
        lists
            .into_iter()
            .enumerate()
            .map(|(index, deps)| {
                let deps: Vec<String> = deps
                    .into_iter()
                    .filter(|&dep| dep > index)
                    .map(name)
                    .collect();
                (name(index), deps)
            })
            .collect()
    })
}

/// Any edges at all, including self-loops, cycles and repeats. Indices past
/// the last key produce dangling references.
fn arbitrary_graph() -> impl Strategy<Value = DependencyGraph> {
    prop::collection::vec(prop::collection::vec(0..NODES + 3, 0..5), NODES).prop_map(|lists| {
        lists
            .into_iter()
            .enumerate()
            .map(|(index, deps)| (name(index), deps.into_iter().map(name).collect::<Vec<_>>()))
            .collect()
    })
}

fn reachable(graph: &DependencyGraph, start: &str) -> HashSet<String> {
    let mut seen = HashSet::from([start.to_owned()]);
    let mut queue = vec![start.to_owned()];
    while let Some(package) = queue.pop() {
        for dep in graph.dependencies_of(&package) {
            if seen.insert(dep.clone()) {
                queue.push(dep.clone());
            }
        }
    }
    seen
}

fn positions(order: &[String]) -> HashMap<&str, usize> {
    order
        .iter()
        .enumerate()
        .map(|(index, package)| (package.as_str(), index))
        .collect()
}

fn assert_exactly_reachable(graph: &DependencyGraph, start: &str, order: &[String]) {
    let unique: HashSet<String> = order.iter().cloned().collect();
    assert_eq!(unique.len(), order.len(), "duplicates in {order:?}");
    assert_eq!(unique, reachable(graph, start));
}

fn assert_dependencies_first(graph: &DependencyGraph, order: &[String]) {
    let at = positions(order);
    for package in order {
        for dep in graph.dependencies_of(package) {
            assert!(
                at[dep.as_str()] < at[package.as_str()],
                "{dep} must precede {package} in {order:?}"
            );
        }
    }
}

proptest! {
    #[test]
    fn depth_first_visits_exactly_the_reachable_set(graph in arbitrary_graph(), start in 0..NODES) {
        let start = name(start);
        let order = depth_first(&graph, &start);

        prop_assert_eq!(order.first(), Some(&start));
        assert_exactly_reachable(&graph, &start, &order);
    }

    #[test]
    fn topological_order_visits_exactly_the_reachable_set(graph in arbitrary_graph(), start in 0..NODES) {
        let start = name(start);
        let order = topological_order(&graph, &start);

        prop_assert_eq!(order.last(), Some(&start));
        assert_exactly_reachable(&graph, &start, &order);
    }

    #[test]
    fn topological_order_respects_every_edge_when_acyclic(graph in acyclic_graph(), start in 0..NODES) {
        let start = name(start);
        let order = topological_order(&graph, &start);

        assert_dependencies_first(&graph, &order);
    }

    #[test]
    fn strict_and_lenient_agree_when_acyclic(graph in acyclic_graph(), start in 0..NODES) {
        let start = name(start);

        prop_assert_eq!(
            topological_order_strict(&graph, &start),
            Ok(topological_order(&graph, &start))
        );
    }

    #[test]
    fn strict_result_is_either_valid_order_or_real_cycle(graph in arbitrary_graph(), start in 0..NODES) {
        let start = name(start);

        match topological_order_strict(&graph, &start) {
            Ok(order) => assert_dependencies_first(&graph, &order),
            Err(GraphError::CycleDetected(path)) => {
                prop_assert!(path.len() >= 2);
                prop_assert_eq!(path.first(), path.last());
                for pair in path.windows(2) {
                    prop_assert!(graph.dependencies_of(&pair[0]).contains(&pair[1]));
                }
            }
            Err(other) => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn traversals_are_deterministic(graph in arbitrary_graph(), start in 0..NODES) {
        let start = name(start);

        prop_assert_eq!(depth_first(&graph, &start), depth_first(&graph, &start));
        prop_assert_eq!(topological_order(&graph, &start), topological_order(&graph, &start));
    }
}

#[test]
fn deep_chain_does_not_exhaust_the_call_stack() {
    const DEPTH: usize = 200_000;
    let graph: DependencyGraph = (0..DEPTH)
        .map(|index| (name(index), vec![name(index.saturating_add(1))]))
        .collect();

    let walk = depth_first(&graph, "p0");
    let order = topological_order(&graph, "p0");

    assert_eq!(walk.len(), DEPTH.saturating_add(1));
    assert_eq!(order.len(), DEPTH.saturating_add(1));
    assert_eq!(order.first().map(String::as_str), Some("p200000"));
    assert_eq!(order.last().map(String::as_str), Some("p0"));
}

#[test]
fn deep_cycle_terminates_in_both_modes() {
    const DEPTH: usize = 50_000;
    let graph: DependencyGraph = (0..DEPTH)
        .map(|index| (name(index), vec![name((index + 1) % DEPTH)]))
        .collect();

    assert_eq!(topological_order(&graph, "p0").len(), DEPTH);
    match topological_order_strict(&graph, "p0") {
        Err(GraphError::CycleDetected(path)) => assert_eq!(path.len(), DEPTH.saturating_add(1)),
        other => panic!("expected cycle, got {other:?}"),
    }
}
