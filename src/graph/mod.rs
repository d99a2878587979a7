//! In-memory graph operations — the core data structure.

pub mod adjacency;
pub mod builder;
pub mod queue;
pub mod traversal;

pub use adjacency::Graph;
pub use builder::GraphBuilder;
pub use queue::VertexQueue;
pub use traversal::{Bfs, Dfs, TraversalKind};
