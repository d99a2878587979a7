//! graphwalk — undirected adjacency-list graphs with DFS and BFS traversal.
//!
//! A [`Graph`] holds a fixed number of vertices, their neighbor lists and one visited
//! marker per vertex. [`Graph::dfs`] and [`Graph::bfs`] walk it lazily from a start
//! vertex; [`Graph::traverse`] clears the markers first and collects the order.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{
    render_adjacency, render_bfs, render_dfs, GraphExport, GraphInput, GraphReader, GraphSummary,
    TraversalReport,
};
pub use graph::{Bfs, Dfs, Graph, GraphBuilder, TraversalKind, VertexQueue};
pub use types::{GraphError, GraphResult, VertexId, MAX_VERTICES};
