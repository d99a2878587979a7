//! FIFO queue of vertices used by breadth-first traversal.

use std::collections::VecDeque;

use crate::types::{GraphError, GraphResult, VertexId};

/// First-in, first-out queue of vertex ids.
#[derive(Debug, Default)]
pub struct VertexQueue {
    items: VecDeque<VertexId>,
}

impl VertexQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Append to the tail.
    pub fn enqueue(&mut self, v: VertexId) {
        self.items.push_back(v);
    }

    /// Remove and return the head.
    pub fn dequeue(&mut self) -> GraphResult<VertexId> {
        self.items.pop_front().ok_or(GraphError::EmptyQueue)
    }
}
