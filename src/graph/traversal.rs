//! Graph traversal algorithms (DFS and BFS).
//!
//! Both traversals are lazy iterators that borrow the graph mutably and write its
//! visited markers as they go. Run [`Graph::reset_visited`] between independent
//! runs, or use [`Graph::traverse`], which does it for you.

use serde::Serialize;

use crate::types::VertexId;

use super::{Graph, VertexQueue};

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalKind {
    /// Depth-first, pre-order.
    Dfs,
    /// Breadth-first, level order.
    Bfs,
}

impl TraversalKind {
    /// Return a human-readable name for this traversal.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
        }
    }

    /// Parse a traversal kind from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dfs" | "depth" | "depth_first" => Some(Self::Dfs),
            "bfs" | "breadth" | "breadth_first" => Some(Self::Bfs),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Depth-first traversal in pre-order.
///
/// Keeps an explicit stack of `(vertex, next neighbor position)` frames instead of
/// recursing, so path length is bounded by heap, not by the call stack.
pub struct Dfs<'g> {
    graph: &'g mut Graph,
    start: Option<VertexId>,
    stack: Vec<(VertexId, usize)>,
}

impl<'g> Dfs<'g> {
    pub(crate) fn new(graph: &'g mut Graph, start: VertexId) -> Self {
        Self {
            graph,
            start: Some(start),
            stack: Vec::new(),
        }
    }

    /// Mark `v` and open a frame for it, unless it is out of range or already seen.
    fn enter(&mut self, v: VertexId) -> bool {
        if !self.graph.contains(v) || self.graph.is_visited(v) {
            return false;
        }
        self.graph.mark_visited(v);
        self.stack.push((v, 0));
        true
    }
}

impl Iterator for Dfs<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        if let Some(start) = self.start.take() {
            return if self.enter(start) { Some(start) } else { None };
        }

        while let Some(frame) = self.stack.last_mut() {
            let (v, pos) = *frame;
            match self.graph.neighbor_at(v, pos) {
                Some(next) => {
                    frame.1 += 1;
                    if self.enter(next) {
                        return Some(next);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Breadth-first traversal in level order.
///
/// A vertex is marked when it is enqueued, not when it is dequeued, so no vertex
/// enters the queue twice.
pub struct Bfs<'g> {
    graph: &'g mut Graph,
    queue: VertexQueue,
}

impl<'g> Bfs<'g> {
    pub(crate) fn new(graph: &'g mut Graph, start: VertexId) -> Self {
        let mut queue = VertexQueue::new();
        if graph.contains(start) {
            graph.mark_visited(start);
            queue.enqueue(start);
        }
        Self { graph, queue }
    }
}

impl Iterator for Bfs<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        if self.queue.is_empty() {
            return None;
        }
        let current = match self.queue.dequeue() {
            Ok(v) => v,
            Err(e) => panic!("BFS queue invariant violated: {}", e),
        };

        let graph = &mut *self.graph;
        for pos in 0..graph.degree(current) {
            let Some(adj) = graph.neighbor_at(current, pos) else {
                break;
            };
            if graph.contains(adj) && !graph.is_visited(adj) {
                graph.mark_visited(adj);
                self.queue.enqueue(adj);
            }
        }
        Some(current)
    }
}

impl Graph {
    /// Depth-first traversal from `start`, without clearing earlier markers.
    pub fn dfs(&mut self, start: VertexId) -> Dfs<'_> {
        Dfs::new(self, start)
    }

    /// Breadth-first traversal from `start`, without clearing earlier markers.
    pub fn bfs(&mut self, start: VertexId) -> Bfs<'_> {
        Bfs::new(self, start)
    }

    /// Clear the markers, run one traversal to completion and return its order.
    pub fn traverse(&mut self, kind: TraversalKind, start: VertexId) -> Vec<VertexId> {
        self.reset_visited();
        let order: Vec<VertexId> = match kind {
            TraversalKind::Dfs => self.dfs(start).collect(),
            TraversalKind::Bfs => self.bfs(start).collect(),
        };
        log::debug!(
            "{} from {} visited {} of {} vertices",
            kind,
            start,
            order.len(),
            self.vertex_count()
        );
        order
    }
}
