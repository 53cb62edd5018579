//! Benchmark support crate for karger.
//!
//! Provides synthetic multigraphs and parameter types used by the Criterion
//! benchmarks for single trials and full trial batches.

pub mod error;
pub mod params;
pub mod source;
