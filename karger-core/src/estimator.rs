//! Trial-count estimation.
//!
//! Repeating contraction `C(n, 2) · ln n` times drives the probability of
//! missing the minimum cut below `1/n`. Overrides supplied by users are
//! validated here and fall back to that recommendation when unusable.

use std::{num::NonZeroUsize, sync::Arc};

use tracing::warn;

use crate::{Result, error::KargerError};

/// Policy used to decide how many trials a run performs.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use karger_core::TrialCount;
///
/// assert_eq!(TrialCount::Recommended.resolve(10), 103);
/// assert_eq!(TrialCount::Recommended.resolve(2), 1);
/// let fixed = TrialCount::Fixed(NonZeroUsize::new(5).expect("non-zero"));
/// assert_eq!(fixed.resolve(10), 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrialCount {
    /// Use [`recommended_trials`] for the graph being processed, but never
    /// fewer than one trial.
    #[default]
    Recommended,
    /// Use exactly this many trials.
    Fixed(NonZeroUsize),
}

impl TrialCount {
    /// Resolves the policy against a graph with `vertices` vertices.
    #[must_use]
    pub fn resolve(self, vertices: usize) -> usize {
        match self {
            Self::Recommended => recommended_trials(vertices).max(1),
            Self::Fixed(count) => count.get(),
        }
    }
}

/// Returns `floor(C(n, 2) · ln n)` for `n = vertices`, or `0` when the graph
/// is too small to have a cut.
///
/// # Examples
/// ```
/// use karger_core::recommended_trials;
///
/// assert_eq!(recommended_trials(10), 103);
/// assert_eq!(recommended_trials(2), 0);
/// assert_eq!(recommended_trials(1), 0);
/// ```
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_arithmetic,
    reason = "the amplification bound is defined over the reals and floored"
)]
pub fn recommended_trials(vertices: usize) -> usize {
    if vertices < 2 {
        return 0;
    }
    let pairs = vertices.saturating_mul(vertices - 1) / 2;
    let bound = (pairs as f64) * (vertices as f64).ln();
    bound.floor() as usize
}

/// Parses a user-supplied trial count.
///
/// Blank input means "no override".
///
/// # Errors
/// Returns [`KargerError::InvalidTrialCount`] when the trimmed input is not a
/// positive integer.
///
/// # Examples
/// ```
/// use karger_core::parse_trial_override;
///
/// assert_eq!(parse_trial_override("  ")?, None);
/// assert_eq!(parse_trial_override("42")?.map(|n| n.get()), Some(42));
/// assert!(parse_trial_override("0").is_err());
/// # Ok::<(), karger_core::KargerError>(())
/// ```
pub fn parse_trial_override(input: &str) -> Result<Option<NonZeroUsize>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<NonZeroUsize>()
        .map(Some)
        .map_err(|_| KargerError::InvalidTrialCount {
            input: Arc::from(trimmed),
        })
}

/// Resolves a user-supplied trial count for a graph with `vertices`
/// vertices.
///
/// Blank input yields [`TrialCount::Recommended`]. Invalid input logs a
/// warning and yields the recommendation too.
///
/// # Examples
/// ```
/// use karger_core::{recommended_trials, resolve_trials};
///
/// assert_eq!(resolve_trials(10, ""), recommended_trials(10));
/// assert_eq!(resolve_trials(10, "-3"), recommended_trials(10));
/// assert_eq!(resolve_trials(10, "25"), 25);
/// assert_eq!(resolve_trials(2, ""), 1);
/// ```
#[must_use]
pub fn resolve_trials(vertices: usize, input: &str) -> usize {
    match parse_trial_override(input) {
        Ok(Some(count)) => count.get(),
        Ok(None) => TrialCount::Recommended.resolve(vertices),
        Err(error) => {
            let fallback = TrialCount::Recommended.resolve(vertices);
            warn!(
                %error,
                code = %error.code(),
                fallback,
                "invalid trial count, using recommended value"
            );
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 0)]
    #[case(3, 3)]
    #[case(4, 8)]
    #[case(10, 103)]
    #[case(50, 4_792)]
    #[case(200, 105_436)]
    fn recommended_trials_matches_bound(#[case] vertices: usize, #[case] expected: usize) {
        assert_eq!(recommended_trials(vertices), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n")]
    fn blank_override_is_none(#[case] input: &str) {
        assert_eq!(parse_trial_override(input), Ok(None));
    }

    #[rstest]
    #[case("1", 1)]
    #[case(" 250 ", 250)]
    #[case("+7", 7)]
    fn positive_override_is_accepted(#[case] input: &str, #[case] expected: usize) {
        let parsed = parse_trial_override(input).expect("input must parse");
        assert_eq!(parsed.map(NonZeroUsize::get), Some(expected));
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    #[case("abc")]
    #[case("1.5")]
    fn invalid_override_is_rejected(#[case] input: &str) {
        let err = parse_trial_override(input).expect_err("input must be rejected");
        assert_eq!(
            err,
            KargerError::InvalidTrialCount {
                input: Arc::from(input.trim()),
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("-3")]
    #[case("abc")]
    #[case("0")]
    fn resolve_falls_back_to_recommendation(#[case] input: &str) {
        assert_eq!(resolve_trials(12, input), recommended_trials(12));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    fn recommended_policy_runs_at_least_one_trial(#[case] vertices: usize) {
        assert_eq!(TrialCount::Recommended.resolve(vertices), 1);
        assert_eq!(resolve_trials(vertices, ""), 1);
        assert_eq!(resolve_trials(vertices, "abc"), 1);
    }

    #[test]
    fn resolve_honours_valid_override() {
        assert_eq!(resolve_trials(12, "9"), 9);
    }
}
