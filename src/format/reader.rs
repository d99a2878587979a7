//! Reads the whitespace-separated integer graph description.
//!
//! Layout: `N E`, then `E` pairs `src dest`, then any number of start vertices.

use std::io::Read;
use std::path::Path;

use crate::graph::Graph;
use crate::types::error::{GraphError, GraphResult};
use crate::types::VertexId;

/// A parsed graph together with the start vertices that followed it.
///
/// Start vertices are kept as read and only range-checked by [`GraphInput::start`],
/// so commands that never traverse are not affected by them.
#[derive(Debug)]
pub struct GraphInput {
    pub graph: Graph,
    pub starts: Vec<i64>,
}

impl GraphInput {
    /// The start vertex at `position`, checked against the graph.
    ///
    /// `None` when fewer than `position + 1` start vertices were given.
    pub fn start(&self, position: usize) -> Option<GraphResult<VertexId>> {
        let raw = *self.starts.get(position)?;
        let vertex_count = self.graph.vertex_count();
        Some(
            usize::try_from(raw)
                .ok()
                .and_then(|i| self.graph.vertex(i).ok())
                .ok_or_else(|| {
                    GraphError::InvalidInput(format!(
                        "start vertex must be between 0 and {}",
                        vertex_count - 1
                    ))
                }),
        )
    }
}

/// Reader for graph descriptions.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph description file.
    pub fn read_from_file(path: &Path) -> GraphResult<GraphInput> {
        let data = std::fs::read(path)?;
        log::debug!("Read {} bytes from {}", data.len(), path.display());
        Self::parse_bytes(&data)
    }

    /// Read from any reader.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<GraphInput> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::parse_bytes(&data)
    }

    /// Parse raw bytes; anything that is not UTF-8 is rejected as invalid input.
    pub fn parse_bytes(data: &[u8]) -> GraphResult<GraphInput> {
        let text = std::str::from_utf8(data)
            .map_err(|_| GraphError::InvalidInput("input is not valid UTF-8".to_string()))?;
        Self::parse(text)
    }

    /// Parse an in-memory graph description.
    pub fn parse(data: &str) -> GraphResult<GraphInput> {
        let mut tokens = Tokens::new(data);

        let vertex_count = tokens.next_int("vertex count")?;
        if vertex_count <= 0 {
            return Err(GraphError::InvalidInput(
                "vertex count must be a positive integer".to_string(),
            ));
        }
        let edge_count = tokens.next_int("edge count")?;
        if edge_count < 0 {
            return Err(GraphError::InvalidInput(
                "edge count must be zero or positive".to_string(),
            ));
        }

        let vertex_count = to_index(vertex_count)?;
        let mut graph = Graph::new(vertex_count)?;
        for i in 0..edge_count {
            let src = tokens.next_int(&format!("source of edge {}", i))?;
            let dest = tokens.next_int(&format!("destination of edge {}", i))?;
            graph.add_edge(endpoint(src, vertex_count)?, endpoint(dest, vertex_count)?)?;
        }

        let mut starts = Vec::new();
        while let Some(raw) = tokens.next_opt_int("start vertex")? {
            starts.push(raw);
        }

        log::debug!(
            "Parsed graph: {} vertices, {} edges, {} start vertices",
            graph.vertex_count(),
            graph.edge_count(),
            starts.len()
        );

        Ok(GraphInput { graph, starts })
    }
}

/// Whitespace tokenizer that parses integers and names what it expected on failure.
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a str) -> Self {
        Self {
            inner: data.split_whitespace(),
        }
    }

    fn next_int(&mut self, what: &str) -> GraphResult<i64> {
        self.next_opt_int(what)?
            .ok_or_else(|| GraphError::InvalidInput(format!("missing {}", what)))
    }

    fn next_opt_int(&mut self, what: &str) -> GraphResult<Option<i64>> {
        match self.inner.next() {
            None => Ok(None),
            Some(tok) => tok.parse::<i64>().map(Some).map_err(|_| {
                GraphError::InvalidInput(format!("expected integer {}, found {:?}", what, tok))
            }),
        }
    }
}

fn to_index(value: i64) -> GraphResult<usize> {
    usize::try_from(value).map_err(|_| GraphError::Allocation(usize::MAX))
}

/// Map a raw endpoint to an index. Range checks against the graph happen in `add_edge`.
fn endpoint(value: i64, vertex_count: usize) -> GraphResult<usize> {
    usize::try_from(value).map_err(|_| {
        GraphError::InvalidInput(format!(
            "edge endpoint {} must be between 0 and {}",
            value,
            vertex_count - 1
        ))
    })
}
