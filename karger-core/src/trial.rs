//! Single contraction trial.
//!
//! A trial owns its graph, contracts randomly sampled vertex pairs until two
//! super-vertices remain, and reports the number of edges between them.

use rand::{Rng, seq::SliceRandom};
use tracing::trace;

use crate::{Result, error::KargerError, graph::Multigraph};

/// How a trial picks the pair of vertices to contract.
///
/// The two strategies induce different edge distributions: drawing a vertex
/// first gives every vertex the same chance regardless of its degree, so edges
/// at low-degree vertices are favoured compared with uniform edge sampling.
///
/// # Examples
/// ```
/// use karger_core::EdgeSampling;
///
/// assert_eq!(EdgeSampling::default(), EdgeSampling::VertexThenNeighbour);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EdgeSampling {
    /// Pick a vertex uniformly among those with incident edges, then one of
    /// its adjacency entries uniformly (weighted by multiplicity).
    #[default]
    VertexThenNeighbour,
    /// Pick one edge uniformly from the whole edge multiset.
    UniformEdge,
}

impl EdgeSampling {
    /// Stable label used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VertexThenNeighbour => "vertex-neighbour",
            Self::UniformEdge => "uniform-edge",
        }
    }
}

/// Result of one contraction trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    cut: usize,
    contractions: usize,
}

impl TrialOutcome {
    /// Number of edges crossing the cut found by the trial.
    #[must_use]
    #[rustfmt::skip]
    pub fn cut(&self) -> usize { self.cut }

    /// Number of contractions the trial performed.
    #[must_use]
    #[rustfmt::skip]
    pub fn contractions(&self) -> usize { self.contractions }
}

/// Runs one contraction trial, consuming `graph`.
///
/// Pairs are drawn with `sampling` and contracted until two vertices remain;
/// the cut is then the degree of either survivor. A connected graph with `n`
/// vertices takes exactly `n - 2` contractions. When edges run out while more
/// than two vertices remain the graph is disconnected and the cut is `0`.
///
/// # Errors
/// Returns [`KargerError::InsufficientVertices`] when `graph` has fewer than
/// two vertices.
///
/// # Examples
/// ```
/// use karger_core::{EdgeSampling, Multigraph, VertexId, run_trial};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let [a, b, c] = [1, 2, 3].map(VertexId::new);
/// let triangle = Multigraph::from_entries([(a, vec![b, c]), (b, vec![c])])?;
/// let mut rng = SmallRng::seed_from_u64(7);
/// let outcome = run_trial(triangle, &mut rng, EdgeSampling::default())?;
/// assert_eq!(outcome.cut(), 2);
/// assert_eq!(outcome.contractions(), 1);
/// # Ok::<(), karger_core::KargerError>(())
/// ```
pub fn run_trial<R>(
    mut graph: Multigraph,
    rng: &mut R,
    sampling: EdgeSampling,
) -> Result<TrialOutcome>
where
    R: Rng + ?Sized,
{
    let vertices = graph.vertex_count();
    if vertices < 2 {
        return Err(KargerError::InsufficientVertices { vertices });
    }

    let mut contractions = 0;
    while graph.vertex_count() > 2 {
        let Some((keep, absorb)) = draw_pair(&graph, rng, sampling) else {
            trace!(
                remaining = graph.vertex_count(),
                contractions, "no edges left, graph is disconnected"
            );
            return Ok(TrialOutcome {
                cut: 0,
                contractions,
            });
        };
        graph.contract_slots(keep, absorb);
        contractions += 1;
    }

    let cut = graph
        .live_slots()
        .first()
        .map_or(0, |&slot| graph.slot_neighbours(slot).len());
    Ok(TrialOutcome { cut, contractions })
}

fn draw_pair<R>(
    graph: &Multigraph,
    rng: &mut R,
    sampling: EdgeSampling,
) -> Option<(usize, usize)>
where
    R: Rng + ?Sized,
{
    if graph.endpoint_count() == 0 {
        return None;
    }
    match sampling {
        EdgeSampling::VertexThenNeighbour => {
            // Rejection keeps the draw uniform over vertices that still have
            // edges; at least one exists because endpoints are non-zero.
            let keep = loop {
                let &candidate = graph.live_slots().choose(rng)?;
                if !graph.slot_neighbours(candidate).is_empty() {
                    break candidate;
                }
            };
            let &absorb = graph.slot_neighbours(keep).choose(rng)?;
            Some((keep, absorb))
        }
        EdgeSampling::UniformEdge => {
            let mut offset = rng.gen_range(0..graph.endpoint_count());
            for &slot in graph.live_slots() {
                let neighbours = graph.slot_neighbours(slot);
                match neighbours.get(offset) {
                    Some(&absorb) => return Some((slot, absorb)),
                    None => offset -= neighbours.len(),
                }
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    use super::*;
    use crate::graph::VertexId;

    fn cycle(len: i64) -> Multigraph {
        Multigraph::from_entries(
            (1..=len).map(|v| (VertexId::new(v), [VertexId::new(v % len + 1)])),
        )
        .expect("cycle has no self-loops")
    }

    #[rstest]
    #[case::vertex_then_neighbour(EdgeSampling::VertexThenNeighbour)]
    #[case::uniform_edge(EdgeSampling::UniformEdge)]
    fn cycle_trials_always_cut_two_edges(#[case] sampling: EdgeSampling) {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..20 {
            let outcome = run_trial(cycle(6), &mut rng, sampling).expect("trial must run");
            assert_eq!(outcome.cut(), 2);
            assert_eq!(outcome.contractions(), 4);
        }
    }

    #[test]
    fn two_vertex_graph_needs_no_contraction() {
        let mut rng = SmallRng::seed_from_u64(1);
        let graph = Multigraph::from_entries([(VertexId::new(1), [VertexId::new(2); 3])])
            .expect("parallel edges are allowed");
        let outcome = run_trial(graph, &mut rng, EdgeSampling::default()).expect("trial must run");
        assert_eq!(outcome.cut(), 3);
        assert_eq!(outcome.contractions(), 0);
    }

    #[rstest]
    #[case::empty(0)]
    #[case::single(1)]
    fn rejects_graphs_without_a_cut(#[case] vertices: i64) {
        let mut graph = Multigraph::new();
        for v in 0..vertices {
            graph.add_vertex(VertexId::new(v));
        }
        let mut rng = SmallRng::seed_from_u64(1);
        let err = run_trial(graph, &mut rng, EdgeSampling::default())
            .expect_err("graphs below two vertices must fail");
        assert_eq!(
            err,
            KargerError::InsufficientVertices {
                vertices: usize::try_from(vertices).expect("small count"),
            }
        );
    }

    #[rstest]
    #[case::vertex_then_neighbour(EdgeSampling::VertexThenNeighbour)]
    #[case::uniform_edge(EdgeSampling::UniformEdge)]
    fn edgeless_graph_reports_zero_cut(#[case] sampling: EdgeSampling) {
        let mut graph = Multigraph::new();
        for v in 0..5 {
            graph.add_vertex(VertexId::new(v));
        }
        let mut rng = SmallRng::seed_from_u64(3);
        let outcome = run_trial(graph, &mut rng, sampling).expect("trial must run");
        assert_eq!(outcome.cut(), 0);
        assert_eq!(outcome.contractions(), 0);
    }

    #[test]
    fn isolated_vertex_leaves_a_zero_cut() {
        let mut graph = cycle(3);
        graph.add_vertex(VertexId::new(42));
        let mut rng = SmallRng::seed_from_u64(5);
        let outcome = run_trial(graph, &mut rng, EdgeSampling::VertexThenNeighbour)
            .expect("trial must run");
        assert_eq!(outcome.cut(), 0);
    }

    #[test]
    fn sampling_labels_are_stable() {
        assert_eq!(EdgeSampling::VertexThenNeighbour.as_str(), "vertex-neighbour");
        assert_eq!(EdgeSampling::UniformEdge.as_str(), "uniform-edge");
    }
}
