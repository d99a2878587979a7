//! Error types for the graphwalk library.

use thiserror::Error;

/// All errors that can occur in the graphwalk library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Storage for the requested number of vertices could not be obtained.
    #[error("Cannot allocate graph storage for {0} vertices")]
    Allocation(usize),

    /// Vertex index outside `[0, vertex_count)`.
    #[error("Vertex {vertex} out of range: graph has {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    /// Dequeue on an empty queue.
    #[error("Attempted to dequeue from an empty queue")]
    EmptyQueue,

    /// Malformed or out-of-range input at the reader boundary.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graphwalk operations.
pub type GraphResult<T> = Result<T, GraphError>;
