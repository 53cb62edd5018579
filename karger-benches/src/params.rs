//! Benchmark parameter types.

use std::fmt;

use karger_core::EdgeSampling;

/// Parameters for a single-trial benchmark run.
#[derive(Clone, Debug)]
pub struct TrialBenchParams {
    /// Graph family name.
    pub shape: &'static str,
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Pair sampling strategy.
    pub sampling: EdgeSampling,
}

impl fmt::Display for TrialBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},n={},{}",
            self.shape,
            self.vertex_count,
            self.sampling.as_str()
        )
    }
}

/// Parameters for a batch benchmark run.
#[derive(Clone, Debug)]
pub struct BatchBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Trials per batch.
    pub trials: usize,
}

impl fmt::Display for BatchBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},trials={}", self.vertex_count, self.trials)
    }
}
