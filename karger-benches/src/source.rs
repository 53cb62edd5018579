//! Synthetic multigraphs with known minimum cuts.

use karger_core::{KargerError, Multigraph, VertexId};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur while generating benchmark graphs.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// The requested graph is too small for its family.
    #[error("{shape} needs at least {minimum} vertices, got {requested}")]
    TooFewVertices {
        /// Graph family name.
        shape: &'static str,
        /// Requested size.
        requested: usize,
        /// Smallest supported size.
        minimum: usize,
    },
    /// A vertex index does not fit in a vertex id.
    #[error("vertex index {index} does not fit in a vertex id")]
    Overflow {
        /// Offending index.
        index: usize,
    },
    /// Graph construction rejected an edge.
    #[error("graph construction failed: {0}")]
    Graph(#[from] KargerError),
}

/// Configuration for [`random_connected`].
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges added on top of the spanning tree; parallel edges allowed.
    pub extra_edges: usize,
    /// RNG seed.
    pub seed: u64,
}

/// Cycle over `vertex_count` vertices. Its minimum cut is 2.
///
/// # Errors
/// Returns [`SyntheticError::TooFewVertices`] below three vertices.
pub fn cycle(vertex_count: usize) -> Result<Multigraph, SyntheticError> {
    require("cycle", vertex_count, 3)?;
    let mut graph = Multigraph::new();
    for index in 1..vertex_count {
        connect(&mut graph, index - 1, index)?;
    }
    connect(&mut graph, vertex_count - 1, 0)?;
    Ok(graph)
}

/// Two complete graphs on `clique_size` vertices joined by one bridge. Its
/// minimum cut is 1.
///
/// # Errors
/// Returns [`SyntheticError::TooFewVertices`] for cliques below three
/// vertices.
pub fn barbell(clique_size: usize) -> Result<Multigraph, SyntheticError> {
    require("barbell clique", clique_size, 3)?;
    let mut graph = Multigraph::new();
    for offset in [0, clique_size] {
        for u in 0..clique_size {
            for v in (u + 1)..clique_size {
                connect(&mut graph, offset + u, offset + v)?;
            }
        }
    }
    connect(&mut graph, clique_size - 1, clique_size)?;
    Ok(graph)
}

/// Random spanning tree plus `extra_edges` random non-loop edges.
///
/// # Errors
/// Returns [`SyntheticError::TooFewVertices`] below two vertices.
pub fn random_connected(config: &RandomGraphConfig) -> Result<Multigraph, SyntheticError> {
    require("random connected graph", config.vertex_count, 2)?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Multigraph::new();
    for index in 1..config.vertex_count {
        let parent = rng.gen_range(0..index);
        connect(&mut graph, parent, index)?;
    }
    let mut added = 0;
    while added < config.extra_edges {
        let u = rng.gen_range(0..config.vertex_count);
        let v = rng.gen_range(0..config.vertex_count);
        if u != v {
            connect(&mut graph, u, v)?;
            added += 1;
        }
    }
    Ok(graph)
}

const fn require(
    shape: &'static str,
    requested: usize,
    minimum: usize,
) -> Result<(), SyntheticError> {
    if requested < minimum {
        return Err(SyntheticError::TooFewVertices {
            shape,
            requested,
            minimum,
        });
    }
    Ok(())
}

fn connect(graph: &mut Multigraph, u: usize, v: usize) -> Result<(), SyntheticError> {
    graph.add_edge(vertex(u)?, vertex(v)?)?;
    Ok(())
}

fn vertex(index: usize) -> Result<VertexId, SyntheticError> {
    i64::try_from(index)
        .map(VertexId::new)
        .map_err(|_| SyntheticError::Overflow { index })
}
