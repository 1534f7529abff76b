//! Error types for matgraph-core.

use thiserror::Error;

/// Graph engine error types.
#[derive(Error, Debug)]
pub enum Error {
    /// A vertex referenced by an operation is not in the graph.
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    /// The vertex being inserted is already present.
    #[error("Vertex already exists: {0}")]
    DuplicateVertex(String),

    /// The graph holds `capacity` vertices and cannot grow.
    #[error("Graph is full: capacity {capacity} reached")]
    CapacityExceeded {
        /// Maximum number of vertices the graph can hold.
        capacity: usize,
    },

    /// Edge weight is not a strictly positive finite number.
    #[error("Edge weight must be positive and finite, got {0}")]
    InvalidWeight(f64),

    /// Both edge endpoints resolve to the same vertex.
    #[error("Self-loop edges are not allowed: {0}")]
    SelfLoop(String),

    /// A traversal or search was requested on a graph with no vertices.
    #[error("Graph is empty")]
    EmptyGraph,

    /// IO error during save or load.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted graph data violates a structural invariant.
    #[error("Corrupt graph data: {0}")]
    Corrupt(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
