//! Vertex identifiers.

use serde::Serialize;

/// Identifier of a vertex in `[0, vertex_count)`.
///
/// Only a [`Graph`](crate::graph::Graph) hands these out, after checking the index
/// against its vertex count, so an id obtained from a graph is always in range for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn new_unchecked(index: usize) -> Self {
        Self(index)
    }

    /// The zero-based index of this vertex.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<VertexId> for usize {
    fn from(v: VertexId) -> Self {
        v.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
