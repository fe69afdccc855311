//! Error types for polytopo.
//!
//! This module defines all error types used throughout the library.
//!
//! Construction errors follow a single fail-hard policy: any structural
//! problem in the input corner buffer aborts construction with a typed
//! error. Query-time bad arguments, by contrast, never produce an error;
//! every accessor recovers locally by returning `None`, `false`, or zero.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while building mesh topology.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshError {
    /// A corner references a vertex index outside `[0, vertex_count)`.
    #[error("corner {corner} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// Position of the offending corner in the buffer.
        corner: usize,
        /// The out-of-range vertex value found there.
        vertex: i32,
    },

    /// A face has fewer than two corners.
    #[error("face {face} is degenerate ({size} corner)")]
    DegenerateFace {
        /// Index of the degenerate face.
        face: usize,
        /// Number of corners the face has.
        size: usize,
    },

    /// The sentinel structure of the buffer is broken: consecutive
    /// sentinels, a leading sentinel, or a face left unterminated at the
    /// end of the buffer.
    #[error("malformed face sentinel at buffer position {position}")]
    MalformedSentinel {
        /// Buffer position where the problem was detected.
        position: usize,
    },

    /// The edge graph handed to the builder already contains edges.
    #[error("edge graph must start empty but holds {edges} edges")]
    GraphNotEmpty {
        /// Number of edges found in the graph.
        edges: usize,
    },

    /// The partition handed to the classifier does not cover the corner
    /// count of the mesh.
    #[error("partition covers {actual} elements but the mesh has {expected} corners")]
    PartitionSizeMismatch {
        /// Corner count of the mesh.
        expected: usize,
        /// Universe size of the supplied partition.
        actual: usize,
    },
}
