//! Run orchestration for the Karger library.
//!
//! Provides the [`Karger`] entry point, which resolves the trial count for a
//! graph, prepares the random number generator and drives [`run_many`].

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    Result,
    estimator::TrialCount,
    graph::Multigraph,
    runner::{MinCutSummary, run_many},
    trial::EdgeSampling,
};

/// Validated run configuration.
///
/// # Examples
/// ```
/// use karger_core::{KargerBuilder, Multigraph, VertexId};
///
/// let [a, b, c, d] = [1, 2, 3, 4].map(VertexId::new);
/// let graph = Multigraph::from_entries([
///     (a, vec![b, c]),
///     (b, vec![c]),
///     (c, vec![d]),
/// ])?;
/// let karger = KargerBuilder::new().with_trials(200).with_seed(3).build()?;
/// let summary = karger.run(&graph)?;
/// assert_eq!(summary.min_cut(), 1);
/// assert_eq!(summary.trials(), 200);
/// # Ok::<(), karger_core::KargerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Karger {
    trials: TrialCount,
    seed: Option<u64>,
    sampling: EdgeSampling,
}

impl Karger {
    pub(crate) fn new(trials: TrialCount, seed: Option<u64>, sampling: EdgeSampling) -> Self {
        Self {
            trials,
            seed,
            sampling,
        }
    }

    /// Returns the trial policy.
    #[must_use]
    pub fn trials(&self) -> TrialCount {
        self.trials
    }

    /// Returns the RNG seed, if the run is reproducible.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the sampling strategy.
    #[must_use]
    pub fn sampling(&self) -> EdgeSampling {
        self.sampling
    }

    /// Number of trials a run against `graph` would perform.
    #[must_use]
    pub fn trial_count_for(&self, graph: &Multigraph) -> usize {
        self.trials.resolve(graph.vertex_count())
    }

    /// Estimates the minimum cut of `graph`.
    ///
    /// # Errors
    /// Returns [`crate::KargerError::InsufficientVertices`] when `graph` has
    /// fewer than two vertices.
    #[instrument(
        name = "core.run",
        err,
        skip(self, graph),
        fields(vertices = graph.vertex_count(), seeded = self.seed.is_some()),
    )]
    pub fn run(&self, graph: &Multigraph) -> Result<MinCutSummary> {
        let trial_count = self.trial_count_for(graph);
        debug!(trial_count, policy = ?self.trials, "resolved trial count");
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        run_many(graph, trial_count, &mut rng, self.sampling)
    }
}
