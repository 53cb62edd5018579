//! Multi-trial driver.
//!
//! Runs independent contraction trials against deep copies of a template
//! graph and folds their cuts into a [`BestCut`] accumulator.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled each completed batch emits:
//!
//! - `karger_trials_total` (counter)
//! - `karger_run_seconds` (histogram, seconds)

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::{
    Result,
    error::KargerError,
    graph::Multigraph,
    trial::{EdgeSampling, run_trial},
};

/// Smallest cut seen so far and how many trials produced it.
///
/// Folding is a pure reduction: a strictly smaller cut resets the count to
/// one and an equal cut increments it. [`BestCut::merge`] combines two partial
/// folds and is commutative and associative, so batches may be reduced in any
/// grouping.
///
/// # Examples
/// ```
/// use karger_core::BestCut;
///
/// let best = [4, 2, 3, 2].into_iter().fold(BestCut::new(), BestCut::observe);
/// assert_eq!(best.min_cut(), Some(2));
/// assert_eq!(best.occurrences(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestCut {
    min_cut: Option<usize>,
    occurrences: usize,
}

impl BestCut {
    /// Creates an accumulator that has not observed any trial.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_cut: None,
            occurrences: 0,
        }
    }

    /// Folds the cut of one trial into the accumulator.
    #[must_use]
    pub fn observe(self, cut: usize) -> Self {
        self.merge(Self {
            min_cut: Some(cut),
            occurrences: 1,
        })
    }

    /// Combines two accumulators.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match (self.min_cut, other.min_cut) {
            (None, _) => other,
            (_, None) => self,
            (Some(left), Some(right)) => match left.cmp(&right) {
                Ordering::Less => self,
                Ordering::Greater => other,
                Ordering::Equal => Self {
                    min_cut: Some(left),
                    occurrences: self.occurrences + other.occurrences,
                },
            },
        }
    }

    /// Smallest cut observed, or `None` before the first trial.
    #[must_use]
    #[rustfmt::skip]
    pub fn min_cut(&self) -> Option<usize> { self.min_cut }

    /// Number of trials that produced [`Self::min_cut`].
    #[must_use]
    #[rustfmt::skip]
    pub fn occurrences(&self) -> usize { self.occurrences }
}

/// Outcome of a batch of trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinCutSummary {
    min_cut: usize,
    occurrences: usize,
    trials: usize,
    elapsed: Duration,
}

impl MinCutSummary {
    /// Builds a summary from its parts.
    #[must_use]
    pub const fn new(min_cut: usize, occurrences: usize, trials: usize, elapsed: Duration) -> Self {
        Self {
            min_cut,
            occurrences,
            trials,
            elapsed,
        }
    }

    /// Smallest cut found across all trials.
    #[must_use]
    #[rustfmt::skip]
    pub fn min_cut(&self) -> usize { self.min_cut }

    /// Number of trials that found [`Self::min_cut`].
    #[must_use]
    #[rustfmt::skip]
    pub fn occurrences(&self) -> usize { self.occurrences }

    /// Number of trials performed.
    #[must_use]
    #[rustfmt::skip]
    pub fn trials(&self) -> usize { self.trials }

    /// Wall-clock time spent on the whole batch.
    #[must_use]
    #[rustfmt::skip]
    pub fn elapsed(&self) -> Duration { self.elapsed }
}

/// Runs `trial_count` independent trials on deep copies of `graph`.
///
/// `graph` itself is never mutated.
///
/// # Errors
/// Returns [`KargerError::InsufficientVertices`] when `graph` has fewer than
/// two vertices and [`KargerError::EmptyTrialSet`] when `trial_count` is zero.
///
/// # Examples
/// ```
/// use karger_core::{EdgeSampling, Multigraph, VertexId, run_many};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let [a, b, c, d] = [1, 2, 3, 4].map(VertexId::new);
/// let square = Multigraph::from_entries([(a, [b]), (b, [c]), (c, [d]), (d, [a])])?;
/// let mut rng = SmallRng::seed_from_u64(42);
/// let summary = run_many(&square, 50, &mut rng, EdgeSampling::default())?;
/// assert_eq!(summary.min_cut(), 2);
/// assert_eq!(summary.occurrences(), 50);
/// # Ok::<(), karger_core::KargerError>(())
/// ```
#[instrument(
    name = "core.run_many",
    err,
    skip(graph, rng),
    fields(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        trials = trial_count,
        sampling = sampling.as_str(),
    ),
)]
pub fn run_many<R>(
    graph: &Multigraph,
    trial_count: usize,
    rng: &mut R,
    sampling: EdgeSampling,
) -> Result<MinCutSummary>
where
    R: Rng + ?Sized,
{
    let vertices = graph.vertex_count();
    if vertices < 2 {
        return Err(KargerError::InsufficientVertices { vertices });
    }
    if trial_count == 0 {
        return Err(KargerError::EmptyTrialSet);
    }

    let started = Instant::now();
    let mut best = BestCut::new();
    for trial in 0..trial_count {
        let outcome = run_trial(graph.clone(), rng, sampling)?;
        best = best.observe(outcome.cut());
        debug!(
            trial,
            cut = outcome.cut(),
            best = best.min_cut(),
            "trial completed"
        );
    }
    let elapsed = started.elapsed();

    let min_cut = best.min_cut().ok_or(KargerError::EmptyTrialSet)?;
    let summary = MinCutSummary::new(min_cut, best.occurrences(), trial_count, elapsed);
    record_run(&summary);
    info!(
        min_cut,
        occurrences = summary.occurrences(),
        elapsed_secs = elapsed.as_secs_f64(),
        "trials completed"
    );
    Ok(summary)
}

#[cfg(feature = "metrics")]
fn record_run(summary: &MinCutSummary) {
    metrics::counter!("karger_trials_total").increment(summary.trials() as u64);
    metrics::histogram!("karger_run_seconds").record(summary.elapsed().as_secs_f64());
}

#[cfg(not(feature = "metrics"))]
fn record_run(_summary: &MinCutSummary) {}

#[cfg(test)]
mod tests {
    use proptest::{collection::vec, prelude::*, sample::Index};
    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    use super::*;
    use crate::{graph::VertexId, test_utils::suite_proptest_config};

    fn fold(cuts: &[usize]) -> BestCut {
        cuts.iter().copied().fold(BestCut::new(), BestCut::observe)
    }

    proptest! {
        #![proptest_config(suite_proptest_config(128))]

        #[test]
        fn merging_split_folds_matches_sequential_fold(
            cuts in vec(0_usize..6, 1..40),
            split in any::<Index>(),
        ) {
            let (left, right) = cuts.split_at(split.index(cuts.len()));
            prop_assert_eq!(fold(left).merge(fold(right)), fold(&cuts));
        }

        #[test]
        fn merge_is_commutative_and_associative(
            a in vec(0_usize..5, 0..10),
            b in vec(0_usize..5, 0..10),
            c in vec(0_usize..5, 0..10),
        ) {
            let (a, b, c) = (fold(&a), fold(&b), fold(&c));
            prop_assert_eq!(a.merge(b), b.merge(a));
            prop_assert_eq!(a.merge(b).merge(c), a.merge(b.merge(c)));
        }
    }

    #[test]
    fn new_accumulator_is_empty() {
        let best = BestCut::new();
        assert_eq!(best.min_cut(), None);
        assert_eq!(best.occurrences(), 0);
        assert_eq!(best, BestCut::default());
    }

    #[rstest]
    #[case::single(&[5], 5, 1)]
    #[case::smaller_resets(&[5, 5, 3], 3, 1)]
    #[case::equal_increments(&[3, 5, 3, 3], 3, 3)]
    #[case::larger_ignored(&[1, 9, 8], 1, 1)]
    #[case::zero_cut(&[2, 0, 0], 0, 2)]
    fn observe_tracks_minimum_and_count(
        #[case] cuts: &[usize],
        #[case] expected_cut: usize,
        #[case] expected_count: usize,
    ) {
        let best = fold(cuts);
        assert_eq!(best.min_cut(), Some(expected_cut));
        assert_eq!(best.occurrences(), expected_count);
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let best = BestCut::new().observe(4).observe(4);
        assert_eq!(best.merge(BestCut::new()), best);
        assert_eq!(BestCut::new().merge(best), best);
    }

    #[test]
    fn run_many_leaves_template_untouched() {
        let [a, b, c] = [1, 2, 3].map(VertexId::new);
        let graph = Multigraph::from_entries([(a, vec![b, c]), (b, vec![c])])
            .expect("triangle has no self-loops");
        let before = graph.clone();
        let mut rng = SmallRng::seed_from_u64(9);
        let summary =
            run_many(&graph, 10, &mut rng, EdgeSampling::default()).expect("run must succeed");
        assert_eq!(graph, before);
        assert_eq!(summary.trials(), 10);
        assert_eq!(summary.min_cut(), 2);
        assert_eq!(summary.occurrences(), 10);
    }

    #[test]
    fn run_many_rejects_zero_trials() {
        let graph = Multigraph::from_entries([(VertexId::new(1), [VertexId::new(2)])])
            .expect("edge is valid");
        let mut rng = SmallRng::seed_from_u64(9);
        let err = run_many(&graph, 0, &mut rng, EdgeSampling::default())
            .expect_err("zero trials must fail");
        assert_eq!(err, KargerError::EmptyTrialSet);
    }

    #[test]
    fn run_many_rejects_tiny_graphs() {
        let mut graph = Multigraph::new();
        graph.add_vertex(VertexId::new(1));
        let mut rng = SmallRng::seed_from_u64(9);
        let err = run_many(&graph, 3, &mut rng, EdgeSampling::default())
            .expect_err("single vertex must fail");
        assert_eq!(err, KargerError::InsufficientVertices { vertices: 1 });
    }

    #[cfg(feature = "metrics")]
    mod metrics_recording {
        use std::sync::{Arc, Mutex, PoisonError};

        use metrics::{
            Counter, CounterFn, Gauge, Histogram, HistogramFn, Key, KeyName, Metadata, Recorder,
            SharedString, Unit,
        };
        use rand::{SeedableRng, rngs::SmallRng};

        use super::super::run_many;
        use crate::{
            graph::{Multigraph, VertexId},
            trial::EdgeSampling,
        };

        #[derive(Debug, Clone, PartialEq)]
        enum Sample {
            Counter(String, u64),
            Histogram(String, f64),
        }

        type Samples = Arc<Mutex<Vec<Sample>>>;

        struct Handle {
            name: String,
            samples: Samples,
        }

        impl Handle {
            fn push(&self, sample: Sample) {
                self.samples
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(sample);
            }
        }

        impl CounterFn for Handle {
            fn increment(&self, value: u64) {
                self.push(Sample::Counter(self.name.clone(), value));
            }

            fn absolute(&self, value: u64) {
                self.push(Sample::Counter(self.name.clone(), value));
            }
        }

        impl HistogramFn for Handle {
            fn record(&self, value: f64) {
                self.push(Sample::Histogram(self.name.clone(), value));
            }
        }

        #[derive(Default)]
        struct CapturingRecorder {
            samples: Samples,
        }

        impl CapturingRecorder {
            fn handle(&self, key: &Key) -> Arc<Handle> {
                Arc::new(Handle {
                    name: key.name().to_owned(),
                    samples: Arc::clone(&self.samples),
                })
            }
        }

        impl Recorder for CapturingRecorder {
            fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
            fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
            fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

            fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
                Counter::from_arc(self.handle(key))
            }

            fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
                Gauge::noop()
            }

            fn register_histogram(&self, key: &Key, _: &Metadata<'_>) -> Histogram {
                Histogram::from_arc(self.handle(key))
            }
        }

        #[test]
        fn run_many_records_trials_and_duration() {
            let [a, b, c] = [1, 2, 3].map(VertexId::new);
            let graph = Multigraph::from_entries([(a, vec![b, c]), (b, vec![c])])
                .expect("triangle has no self-loops");
            let recorder = CapturingRecorder::default();
            let mut rng = SmallRng::seed_from_u64(3);

            metrics::with_local_recorder(&recorder, || {
                run_many(&graph, 7, &mut rng, EdgeSampling::default())
            })
            .expect("run must succeed");

            let samples = recorder
                .samples
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone();
            assert_eq!(samples.len(), 2);
            assert!(samples.contains(&Sample::Counter("karger_trials_total".to_owned(), 7)));
            assert!(samples.iter().any(|sample| matches!(
                sample,
                Sample::Histogram(name, secs) if name == "karger_run_seconds" && *secs >= 0.0
            )));
        }
    }
}
