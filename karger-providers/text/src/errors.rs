use std::sync::Arc;

use karger_core::KargerError;
use thiserror::Error;

/// Failures while reading a graph file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextGraphError {
    /// The underlying reader failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// A data line contains something other than integers.
    #[error("line {line} is not a list of integers: `{content}`")]
    MalformedInput {
        /// 1-based line number.
        line: usize,
        /// Trimmed line text.
        content: Arc<str>,
    },
    /// A data line describes an edge the multigraph rejects.
    #[error("line {line}: {source}")]
    Graph {
        /// 1-based line number.
        line: usize,
        /// Rejection reported by the graph.
        #[source]
        source: KargerError,
    },
}
