//! Text input and output at the edge of the library.

pub mod reader;
pub mod render;

pub use reader::{GraphInput, GraphReader};
pub use render::{
    render_adjacency, render_bfs, render_dfs, render_order, GraphExport, GraphSummary,
    TraversalReport,
};
