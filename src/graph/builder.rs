//! Fluent API for building Graph instances.

use crate::types::GraphResult;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Edges are collected as raw index pairs and validated all at once by
/// [`GraphBuilder::build`].
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

impl GraphBuilder {
    /// Create a builder for a graph with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Add an undirected edge.
    pub fn edge(&mut self, src: usize, dest: usize) -> &mut Self {
        self.edges.push((src, dest));
        self
    }

    /// Add several undirected edges, in order.
    pub fn edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Build the final Graph. Fails on the first out-of-range endpoint.
    pub fn build(&self) -> GraphResult<Graph> {
        let mut graph = Graph::new(self.vertex_count)?;
        for &(src, dest) in &self.edges {
            graph.add_edge(src, dest)?;
        }
        Ok(graph)
    }
}
