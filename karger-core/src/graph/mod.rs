//! Adjacency-list multigraph consumed by the contraction trials.
//!
//! Vertices are addressed externally by [`VertexId`] and stored in dense slots
//! so that the working copy a trial mutates is one flat [`Clone`] of the
//! arena. Each adjacency entry is one parallel-edge endpoint; the graph stays
//! symmetric and free of self-loops for its whole lifetime.

mod contract;

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::{Result, error::KargerError};

/// Identifier of a vertex within one graph snapshot.
///
/// # Examples
/// ```
/// use karger_core::VertexId;
///
/// let id = VertexId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(i64);

impl VertexId {
    /// Wraps a raw integer identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for VertexId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Undirected multigraph stored as adjacency sequences.
///
/// Equality is structural: two graphs are equal when they hold the same
/// vertices and the same adjacency multiset per vertex, whatever order the
/// edges were inserted in.
///
/// # Examples
/// ```
/// use karger_core::{Multigraph, VertexId};
///
/// let graph = Multigraph::from_entries([
///     (VertexId::new(1), vec![VertexId::new(2), VertexId::new(3)]),
///     (VertexId::new(2), vec![VertexId::new(3)]),
/// ])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.degree(VertexId::new(1)), Some(2));
/// # Ok::<(), karger_core::KargerError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Multigraph {
    ids: Vec<VertexId>,
    slots: HashMap<VertexId, usize>,
    adjacency: Vec<Vec<usize>>,
    live: Vec<usize>,
    live_pos: Vec<usize>,
    endpoints: usize,
}

impl Multigraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(vertex, neighbours)` entries.
    ///
    /// Every entry registers its source vertex, even when it lists no
    /// neighbours, and each neighbour is inserted as one undirected edge.
    /// Listing `2` under `1` and `1` under `2` therefore yields two parallel
    /// edges.
    ///
    /// # Errors
    /// Returns [`KargerError::SelfLoop`] when an entry lists its own vertex as
    /// a neighbour.
    pub fn from_entries<I, N>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexId, N)>,
        N: IntoIterator<Item = VertexId>,
    {
        let mut graph = Self::new();
        for (vertex, neighbours) in entries {
            graph.add_vertex(vertex);
            for neighbour in neighbours {
                graph.add_edge(vertex, neighbour)?;
            }
        }
        Ok(graph)
    }

    /// Registers `vertex` if it is not already present.
    pub fn add_vertex(&mut self, vertex: VertexId) {
        self.slot_or_insert(vertex);
    }

    /// Inserts one undirected edge between `u` and `v`, creating missing
    /// endpoints.
    ///
    /// # Errors
    /// Returns [`KargerError::SelfLoop`] when `u == v`; the graph is left
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// use karger_core::{KargerError, Multigraph, VertexId};
    ///
    /// let mut graph = Multigraph::new();
    /// graph.add_edge(VertexId::new(1), VertexId::new(2))?;
    /// graph.add_edge(VertexId::new(1), VertexId::new(2))?;
    /// assert_eq!(graph.multiplicity(VertexId::new(2), VertexId::new(1)), 2);
    /// assert!(graph.add_edge(VertexId::new(3), VertexId::new(3)).is_err());
    /// # Ok::<(), KargerError>(())
    /// ```
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        if u == v {
            return Err(KargerError::SelfLoop { vertex: u });
        }
        let left = self.slot_or_insert(u);
        let right = self.slot_or_insert(v);
        self.adjacency[left].push(right);
        self.adjacency[right].push(left);
        self.endpoints += 2;
        Ok(())
    }

    /// Number of vertices currently in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.live.len()
    }

    /// Number of edges, counting parallel edges separately.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.endpoints / 2
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Returns `true` when `vertex` is present.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.slots.contains_key(&vertex)
    }

    /// Length of the adjacency sequence of `vertex`, or `None` if absent.
    #[must_use]
    pub fn degree(&self, vertex: VertexId) -> Option<usize> {
        self.slots
            .get(&vertex)
            .map(|&slot| self.slot_neighbours(slot).len())
    }

    /// Iterates the adjacency sequence of `vertex`, one item per edge
    /// endpoint, or returns `None` if the vertex is absent.
    pub fn neighbours(&self, vertex: VertexId) -> Option<impl Iterator<Item = VertexId> + '_> {
        let slot = *self.slots.get(&vertex)?;
        Some(self.slot_neighbours(slot).iter().map(|&n| self.ids[n]))
    }

    /// Number of parallel edges joining `u` and `v`.
    #[must_use]
    pub fn multiplicity(&self, u: VertexId, v: VertexId) -> usize {
        match (self.slots.get(&u), self.slots.get(&v)) {
            (Some(&left), Some(&right)) => self
                .slot_neighbours(left)
                .iter()
                .filter(|&&n| n == right)
                .count(),
            _ => 0,
        }
    }

    /// Iterates the vertices currently in the graph.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.live.iter().map(|&slot| self.ids[slot])
    }

    /// Sorted snapshot of every adjacency sequence keyed by vertex.
    ///
    /// # Examples
    /// ```
    /// use karger_core::{Multigraph, VertexId};
    ///
    /// let graph = Multigraph::from_entries([(VertexId::new(2), [VertexId::new(1)])])?;
    /// let snapshot = graph.adjacency_multiset();
    /// assert_eq!(snapshot[&VertexId::new(1)], vec![VertexId::new(2)]);
    /// # Ok::<(), karger_core::KargerError>(())
    /// ```
    #[must_use]
    pub fn adjacency_multiset(&self) -> BTreeMap<VertexId, Vec<VertexId>> {
        self.live
            .iter()
            .map(|&slot| {
                let mut neighbours: Vec<VertexId> = self
                    .slot_neighbours(slot)
                    .iter()
                    .map(|&n| self.ids[n])
                    .collect();
                neighbours.sort_unstable();
                (self.ids[slot], neighbours)
            })
            .collect()
    }

    fn slot_or_insert(&mut self, vertex: VertexId) -> usize {
        if let Some(&slot) = self.slots.get(&vertex) {
            return slot;
        }
        let slot = self.ids.len();
        self.ids.push(vertex);
        self.adjacency.push(Vec::new());
        self.live_pos.push(self.live.len());
        self.live.push(slot);
        self.slots.insert(vertex, slot);
        slot
    }

    pub(crate) fn slot(&self, vertex: VertexId) -> Result<usize> {
        self.slots
            .get(&vertex)
            .copied()
            .ok_or(KargerError::UnknownVertex { vertex })
    }

    pub(crate) fn live_slots(&self) -> &[usize] {
        &self.live
    }

    pub(crate) fn slot_neighbours(&self, slot: usize) -> &[usize] {
        &self.adjacency[slot]
    }

    pub(crate) fn endpoint_count(&self) -> usize {
        self.endpoints
    }
}

impl PartialEq for Multigraph {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count()
            && self.endpoints == other.endpoints
            && self.adjacency_multiset() == other.adjacency_multiset()
    }
}

impl Eq for Multigraph {}
