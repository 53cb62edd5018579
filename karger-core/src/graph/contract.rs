//! Vertex contraction, the only primitive that mutates a graph during trials.

use crate::{Result, error::KargerError};

use super::{Multigraph, VertexId};

impl Multigraph {
    /// Merges `v` into `u`.
    ///
    /// Every edge endpoint `v` held towards some `w != u` moves to `u` with its
    /// multiplicity intact. Edges between `u` and `v` are dropped rather than
    /// re-inserted, so no self-loop appears on `u`. `v` is then removed and the
    /// vertex count shrinks by exactly one.
    ///
    /// # Errors
    /// Returns [`KargerError::SelfContraction`] when `u == v` and
    /// [`KargerError::UnknownVertex`] when either vertex is absent. The graph
    /// is unchanged on error.
    ///
    /// # Examples
    /// ```
    /// use karger_core::{Multigraph, VertexId};
    ///
    /// let [a, b, c] = [1, 2, 3].map(VertexId::new);
    /// let mut graph = Multigraph::from_entries([(a, vec![b, b, c]), (b, vec![c])])?;
    /// graph.contract(a, b)?;
    /// assert_eq!(graph.vertex_count(), 2);
    /// assert_eq!(graph.multiplicity(a, a), 0);
    /// assert_eq!(graph.multiplicity(a, c), 2);
    /// # Ok::<(), karger_core::KargerError>(())
    /// ```
    pub fn contract(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        if u == v {
            return Err(KargerError::SelfContraction { vertex: u });
        }
        let keep = self.slot(u)?;
        let absorb = self.slot(v)?;
        self.contract_slots(keep, absorb);
        Ok(())
    }

    /// Slot-level contraction used by the trial loop once both endpoints have
    /// been sampled from live slots.
    pub(crate) fn contract_slots(&mut self, keep: usize, absorb: usize) {
        debug_assert_ne!(keep, absorb, "contraction endpoints must differ");
        let absorbed = std::mem::take(&mut self.adjacency[absorb]);
        for &neighbour in &absorbed {
            if neighbour == keep {
                self.endpoints -= 2;
            } else {
                self.adjacency[keep].push(neighbour);
                self.adjacency[neighbour].push(keep);
            }
            let removed = remove_one(&mut self.adjacency[neighbour], absorb);
            debug_assert!(removed, "adjacency must be symmetric");
        }
        self.retire(absorb);
    }

    fn retire(&mut self, slot: usize) {
        self.slots.remove(&self.ids[slot]);
        let position = self.live_pos[slot];
        self.live.swap_remove(position);
        if let Some(&moved) = self.live.get(position) {
            self.live_pos[moved] = position;
        }
    }
}

fn remove_one(neighbours: &mut Vec<usize>, target: usize) -> bool {
    match neighbours.iter().position(|&n| n == target) {
        Some(index) => {
            neighbours.swap_remove(index);
            true
        }
        None => false,
    }
}
