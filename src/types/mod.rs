//! Core value types for the graphwalk library.

pub mod error;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use vertex::VertexId;

/// Largest vertex count a graph will accept.
pub const MAX_VERTICES: usize = u32::MAX as usize;
