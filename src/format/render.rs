//! Text and JSON renderings of graphs and traversal orders.

use serde::Serialize;

use crate::graph::{Graph, TraversalKind};
use crate::types::VertexId;

/// Adjacency dump, one `Vertex i: n1 n2 ...` line per vertex.
pub fn render_adjacency(graph: &Graph) -> String {
    let mut out = String::new();
    for v in graph.vertices() {
        out.push_str(&format!("Vertex {}:", v));
        for n in graph.neighbors(v) {
            out.push_str(&format!(" {}", n));
        }
        out.push('\n');
    }
    out
}

/// DFS order as `v1->v2->...->`.
pub fn render_dfs(order: &[VertexId]) -> String {
    order.iter().map(|v| format!("{}->", v)).collect()
}

/// BFS order as `v1 v2 ...`.
pub fn render_bfs(order: &[VertexId]) -> String {
    order
        .iter()
        .map(VertexId::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render an order in the notation of its traversal kind.
pub fn render_order(kind: TraversalKind, order: &[VertexId]) -> String {
    match kind {
        TraversalKind::Dfs => render_dfs(order),
        TraversalKind::Bfs => render_bfs(order),
    }
}

/// Shape statistics for a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub vertices: usize,
    pub edges: usize,
    pub self_loops: usize,
    pub min_degree: usize,
    pub max_degree: usize,
    pub isolated: Vec<VertexId>,
}

impl GraphSummary {
    pub fn of(graph: &Graph) -> Self {
        let degrees: Vec<usize> = graph.vertices().map(|v| graph.degree(v)).collect();
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            self_loops: graph.edges().iter().filter(|(s, d)| s == d).count(),
            min_degree: degrees.iter().copied().min().unwrap_or(0),
            max_degree: degrees.iter().copied().max().unwrap_or(0),
            isolated: graph.vertices().filter(|&v| graph.degree(v) == 0).collect(),
        }
    }
}

/// Full structural export: edge log plus the adjacency lists in neighbor order.
#[derive(Debug, Clone, Serialize)]
pub struct GraphExport {
    pub vertices: usize,
    pub edges: Vec<(VertexId, VertexId)>,
    pub adjacency: Vec<Vec<VertexId>>,
}

impl GraphExport {
    pub fn of(graph: &Graph) -> Self {
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edges().to_vec(),
            adjacency: graph
                .vertices()
                .map(|v| graph.neighbors(v).collect())
                .collect(),
        }
    }
}

/// The result of one traversal run.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalReport {
    pub kind: TraversalKind,
    pub start: VertexId,
    pub order: Vec<VertexId>,
}

impl TraversalReport {
    /// Reset the markers and run `kind` from `start`.
    pub fn run(graph: &mut Graph, kind: TraversalKind, start: VertexId) -> Self {
        let order = graph.traverse(kind, start);
        Self { kind, start, order }
    }

    /// The order in its traversal's text notation.
    pub fn render(&self) -> String {
        render_order(self.kind, &self.order)
    }
}
