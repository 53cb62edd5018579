//! Shared test utilities used across karger crates.

pub mod ci;
pub mod tracing;
