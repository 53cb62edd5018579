//! Graph fixtures and strategies shared by the integration suites.

#![allow(dead_code, reason = "each suite uses a different subset of fixtures")]

use karger_core::{Multigraph, VertexId};
use karger_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::{collection::vec, prelude::*, test_runner::Config as ProptestConfig};

/// Builds a graph from an undirected edge list.
#[must_use]
pub fn from_edges(edges: &[(i64, i64)]) -> Multigraph {
    let mut graph = Multigraph::new();
    for &(u, v) in edges {
        graph
            .add_edge(VertexId::new(u), VertexId::new(v))
            .expect("fixture edges must not be self-loops");
    }
    graph
}

/// Cycle `1 - 2 - ... - len - 1`.
#[must_use]
pub fn cycle(len: i64) -> Multigraph {
    let edges: Vec<(i64, i64)> = (1..=len).map(|v| (v, v % len + 1)).collect();
    from_edges(&edges)
}

/// Two triangles with no edge between them.
#[must_use]
pub fn two_triangles() -> Multigraph {
    from_edges(&[(1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4)])
}

/// Sum of adjacency lengths over all vertices.
#[must_use]
pub fn degree_sum(graph: &Multigraph) -> usize {
    graph
        .vertices()
        .map(|vertex| graph.degree(vertex).expect("listed vertex must exist"))
        .sum()
}

/// Returns `true` when some vertex lists itself as a neighbour.
#[must_use]
pub fn has_self_loop(graph: &Multigraph) -> bool {
    graph
        .vertices()
        .any(|vertex| graph.multiplicity(vertex, vertex) > 0)
}

/// Returns `true` when every edge multiplicity matches in both directions.
#[must_use]
pub fn is_symmetric(graph: &Multigraph) -> bool {
    graph.vertices().all(|u| {
        graph
            .neighbours(u)
            .expect("listed vertex must exist")
            .all(|v| graph.multiplicity(u, v) == graph.multiplicity(v, u))
    })
}

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Connected multigraphs: a spanning path over `0..n` plus random extra
/// edges, parallel ones included.
pub fn connected_multigraph() -> impl Strategy<Value = Multigraph> {
    (3_i64..12).prop_flat_map(|n| {
        vec((0..n, 0..n), 0..24).prop_map(move |extra| {
            let mut edges: Vec<(i64, i64)> = (1..n).map(|v| (v - 1, v)).collect();
            edges.extend(extra.into_iter().filter(|(u, v)| u != v));
            from_edges(&edges)
        })
    })
}
