//! Builder utilities for configuring [`Karger`] runs.
//!
//! Collects the trial policy, RNG seed and sampling strategy, and validates
//! them before a [`Karger`] instance is constructed.

use std::num::NonZeroUsize;

use crate::{
    Result,
    error::KargerError,
    estimator::TrialCount,
    karger::Karger,
    trial::EdgeSampling,
};

/// Configures and constructs [`Karger`] instances.
///
/// # Examples
/// ```
/// use karger_core::{EdgeSampling, KargerBuilder, TrialCount};
///
/// let karger = KargerBuilder::new()
///     .with_trials(64)
///     .with_seed(7)
///     .with_sampling(EdgeSampling::UniformEdge)
///     .build()
///     .expect("builder configuration is valid");
/// assert!(matches!(karger.trials(), TrialCount::Fixed(n) if n.get() == 64));
/// assert_eq!(karger.seed(), Some(7));
/// assert_eq!(karger.sampling(), EdgeSampling::UniformEdge);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KargerBuilder {
    trials: Option<usize>,
    seed: Option<u64>,
    sampling: EdgeSampling,
}

impl KargerBuilder {
    /// Creates a builder that uses the recommended trial count, OS entropy
    /// and vertex-then-neighbour sampling.
    ///
    /// # Examples
    /// ```
    /// use karger_core::{EdgeSampling, KargerBuilder};
    ///
    /// let builder = KargerBuilder::new();
    /// assert_eq!(builder.trials(), None);
    /// assert_eq!(builder.seed(), None);
    /// assert_eq!(builder.sampling(), EdgeSampling::VertexThenNeighbour);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests exactly `count` trials instead of the recommendation.
    #[must_use]
    pub fn with_trials(mut self, count: usize) -> Self {
        self.trials = Some(count);
        self
    }

    /// Applies an optional override; `None` restores the recommendation.
    #[must_use]
    pub fn with_trial_override(mut self, count: Option<usize>) -> Self {
        self.trials = count;
        self
    }

    /// Returns the requested trial count, if any.
    #[must_use]
    pub fn trials(&self) -> Option<usize> {
        self.trials
    }

    /// Seeds the random number generator so runs are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Selects how vertex pairs are drawn for contraction.
    #[must_use]
    pub fn with_sampling(mut self, sampling: EdgeSampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Returns the configured sampling strategy.
    #[must_use]
    pub fn sampling(&self) -> EdgeSampling {
        self.sampling
    }

    /// Validates the configuration and constructs a [`Karger`] instance.
    ///
    /// # Errors
    /// Returns [`KargerError::EmptyTrialSet`] when zero trials were requested.
    ///
    /// # Examples
    /// ```
    /// use karger_core::{KargerBuilder, KargerError};
    ///
    /// let err = KargerBuilder::new().with_trials(0).build().unwrap_err();
    /// assert_eq!(err, KargerError::EmptyTrialSet);
    /// ```
    pub fn build(self) -> Result<Karger> {
        let trials = match self.trials {
            None => TrialCount::Recommended,
            Some(count) => {
                TrialCount::Fixed(NonZeroUsize::new(count).ok_or(KargerError::EmptyTrialSet)?)
            }
        };
        Ok(Karger::new(trials, self.seed, self.sampling))
    }
}
