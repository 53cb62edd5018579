//! Text provider for adjacency-list graph files.
//!
//! Each non-comment line lists a source vertex followed by its neighbours,
//! all as whitespace-separated integers. Every listed neighbour adds one
//! undirected edge, so a pair named on both lines becomes two parallel
//! edges. Lines starting with `#` are comments; one of them may carry a
//! description:
//!
//! ```text
//! # Description: two triangles joined by a bridge
//! 1 2 3
//! 2 3
//! 3 4
//! 4 5 6
//! 5 6
//! ```

mod description;
mod errors;
mod source;

pub use crate::{
    description::{DEFAULT_DESCRIPTION, description_marker, read_description},
    errors::TextGraphError,
    source::{GraphFile, parse_graph},
};
