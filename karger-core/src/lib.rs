//! Karger core library.
//!
//! Estimates the global minimum edge cut of an undirected multigraph by
//! repeating randomized contraction trials and keeping the smallest cut seen.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod estimator;
mod graph;
mod karger;
mod runner;
mod trial;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::KargerBuilder,
    error::{KargerError, KargerErrorCode, Result},
    estimator::{TrialCount, parse_trial_override, recommended_trials, resolve_trials},
    graph::{Multigraph, VertexId},
    karger::Karger,
    runner::{BestCut, MinCutSummary, run_many},
    trial::{EdgeSampling, TrialOutcome, run_trial},
};
