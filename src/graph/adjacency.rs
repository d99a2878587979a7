//! Core graph structure — adjacency lists plus per-vertex visited markers.

use crate::types::{GraphError, GraphResult, VertexId, MAX_VERTICES};

/// An undirected graph over vertices `0..vertex_count`.
///
/// Neighbors are reported most recently inserted first. Storage appends to a
/// per-vertex `Vec` and [`Graph::neighbors`] walks it backwards.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Per-vertex neighbor lists, in insertion order.
    adjacency: Vec<Vec<VertexId>>,
    /// Visited markers written by traversals.
    visited: Vec<bool>,
    /// Every accepted edge, in insertion order.
    edges: Vec<(VertexId, VertexId)>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> GraphResult<Self> {
        if vertex_count == 0 || vertex_count > MAX_VERTICES {
            return Err(GraphError::Allocation(vertex_count));
        }

        let mut adjacency: Vec<Vec<VertexId>> = Vec::new();
        let mut visited: Vec<bool> = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::Allocation(vertex_count))?;
        visited
            .try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::Allocation(vertex_count))?;
        adjacency.resize_with(vertex_count, Vec::new);
        visited.resize(vertex_count, false);

        log::debug!("Created graph with {} vertices", vertex_count);

        Ok(Self {
            adjacency,
            visited,
            edges: Vec::new(),
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges accepted by [`Graph::add_edge`].
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check an index against the vertex range and turn it into a [`VertexId`].
    pub fn vertex(&self, index: usize) -> GraphResult<VertexId> {
        if index < self.vertex_count() {
            Ok(VertexId::new_unchecked(index))
        } else {
            Err(GraphError::InvalidVertex {
                vertex: index,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertex_count()).map(VertexId::new_unchecked)
    }

    pub(crate) fn contains(&self, v: VertexId) -> bool {
        v.index() < self.vertex_count()
    }

    /// Add an undirected edge between `src` and `dest`.
    ///
    /// Self-loops and parallel edges are kept as duplicate entries. An endpoint
    /// outside the vertex range leaves the graph untouched.
    pub fn add_edge(&mut self, src: usize, dest: usize) -> GraphResult<()> {
        let (src, dest) = match (self.vertex(src), self.vertex(dest)) {
            (Ok(s), Ok(d)) => (s, d),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("Rejected edge ({}, {}): {}", src, dest, e);
                return Err(e);
            }
        };

        self.adjacency[src.index()].push(dest);
        self.adjacency[dest.index()].push(src);
        self.edges.push((src, dest));
        Ok(())
    }

    /// Neighbors of `v`, most recently inserted first. Empty for an unknown vertex.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency
            .get(v.index())
            .map(|list| list.as_slice())
            .unwrap_or(&[])
            .iter()
            .rev()
            .copied()
    }

    /// The `pos`-th neighbor of `v` in [`Graph::neighbors`] order.
    pub(crate) fn neighbor_at(&self, v: VertexId, pos: usize) -> Option<VertexId> {
        let list = self.adjacency.get(v.index())?;
        let idx = list.len().checked_sub(pos + 1)?;
        Some(list[idx])
    }

    /// Number of adjacency entries of `v` (a self-loop counts twice).
    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacency.get(v.index()).map_or(0, Vec::len)
    }

    /// Every accepted edge, in insertion order.
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// Whether `v` has been marked by a traversal since the last reset.
    pub fn is_visited(&self, v: VertexId) -> bool {
        self.visited.get(v.index()).copied().unwrap_or(false)
    }

    /// Number of vertices currently marked visited.
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&seen| seen).count()
    }

    pub(crate) fn mark_visited(&mut self, v: VertexId) {
        self.visited[v.index()] = true;
    }

    /// Clear every visited marker.
    ///
    /// Must run between two traversals that are meant to be independent.
    pub fn reset_visited(&mut self) {
        self.visited.fill(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_at_follows_neighbors_order() {
        let mut graph = Graph::new(4).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(0, 3).unwrap();

        let v0 = graph.vertex(0).unwrap();
        let listed: Vec<VertexId> = graph.neighbors(v0).collect();
        let indexed: Vec<VertexId> = (0..graph.degree(v0))
            .map(|pos| graph.neighbor_at(v0, pos).unwrap())
            .collect();
        assert_eq!(listed, indexed);
        assert!(graph.neighbor_at(v0, 3).is_none());
    }

    #[test]
    fn contains_checks_range() {
        let graph = Graph::new(2).unwrap();
        assert!(graph.contains(VertexId::new_unchecked(1)));
        assert!(!graph.contains(VertexId::new_unchecked(2)));
    }
}
