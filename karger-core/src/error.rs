//! Error types for the Karger core library.
//!
//! Defines the error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::graph::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when building graphs or running contraction trials.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum KargerError {
    /// An edge joined a vertex to itself.
    #[error("vertex {vertex} cannot be joined to itself")]
    SelfLoop {
        /// Vertex named on both ends of the rejected edge.
        vertex: VertexId,
    },
    /// A vertex referenced by an operation is not present in the graph.
    #[error("vertex {vertex} is not present in the graph")]
    UnknownVertex {
        /// The missing vertex.
        vertex: VertexId,
    },
    /// A contraction named the same vertex as both endpoints.
    #[error("cannot contract vertex {vertex} into itself")]
    SelfContraction {
        /// Vertex named on both ends of the contraction.
        vertex: VertexId,
    },
    /// The graph is too small to have a cut.
    #[error("a cut needs at least 2 vertices (graph has {vertices})")]
    InsufficientVertices {
        /// Number of vertices in the rejected graph.
        vertices: usize,
    },
    /// A run was requested with zero trials.
    #[error("at least one trial is required")]
    EmptyTrialSet,
    /// A trial-count override was not a positive integer.
    #[error("trial count `{input}` is not a positive integer")]
    InvalidTrialCount {
        /// Raw text supplied by the caller.
        input: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`KargerError`] variants.
    enum KargerErrorCode for KargerError {
        /// An edge joined a vertex to itself.
        SelfLoop => SelfLoop { .. } => "KARGER_SELF_LOOP",
        /// A vertex referenced by an operation is not present in the graph.
        UnknownVertex => UnknownVertex { .. } => "KARGER_UNKNOWN_VERTEX",
        /// A contraction named the same vertex as both endpoints.
        SelfContraction => SelfContraction { .. } => "KARGER_SELF_CONTRACTION",
        /// The graph is too small to have a cut.
        InsufficientVertices => InsufficientVertices { .. } => "KARGER_INSUFFICIENT_VERTICES",
        /// A run was requested with zero trials.
        EmptyTrialSet => EmptyTrialSet => "KARGER_EMPTY_TRIAL_SET",
        /// A trial-count override was not a positive integer.
        InvalidTrialCount => InvalidTrialCount { .. } => "KARGER_INVALID_TRIAL_COUNT",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, KargerError>;
