//! CLI command implementations.

use std::path::Path;

use crate::format::{
    render_adjacency, GraphExport, GraphInput, GraphReader, GraphSummary, TraversalReport,
};
use crate::graph::TraversalKind;
use crate::types::{GraphError, GraphResult};

/// Read a graph description from `path`, or from stdin when no path is given.
pub fn load_input(path: Option<&Path>) -> GraphResult<GraphInput> {
    match path {
        Some(p) => GraphReader::read_from_file(p),
        None => GraphReader::read_from(&mut std::io::stdin().lock()),
    }
}

/// Run the traversal of `kind` from the start vertex at `position`.
///
/// Markers are reset first, so steps of one session are independent.
pub fn session_step(
    input: &mut GraphInput,
    position: usize,
    kind: TraversalKind,
) -> GraphResult<TraversalReport> {
    let start = match input.start(position) {
        Some(start) => start?,
        None => {
            return Err(GraphError::InvalidInput(format!(
                "missing {} start vertex",
                kind.name().to_uppercase()
            )))
        }
    };
    Ok(TraversalReport::run(&mut input.graph, kind, start))
}

/// DFS from the first start vertex, then BFS from the second.
pub fn run_session(input: &mut GraphInput) -> GraphResult<(TraversalReport, TraversalReport)> {
    let dfs = session_step(input, 0, TraversalKind::Dfs)?;
    let bfs = session_step(input, 1, TraversalKind::Bfs)?;
    Ok((dfs, bfs))
}

/// Run a DFS and then a BFS over one graph description.
///
/// In text mode the DFS order is printed before the BFS start is checked.
pub fn cmd_run(path: Option<&Path>, json: bool) -> GraphResult<()> {
    let mut input = load_input(path)?;
    if input.starts.len() > 2 {
        log::warn!(
            "Ignoring {} extra start vertices after the BFS start",
            input.starts.len() - 2
        );
    }

    if json {
        let (dfs, bfs) = run_session(&mut input)?;
        let info = serde_json::json!({ "dfs": dfs, "bfs": bfs });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        let dfs = session_step(&mut input, 0, TraversalKind::Dfs)?;
        println!("DFS traversal: {}", dfs.render());
        let bfs = session_step(&mut input, 1, TraversalKind::Bfs)?;
        println!("BFS traversal: {}", bfs.render());
    }
    Ok(())
}

/// Print the adjacency lists.
pub fn cmd_show(path: &Path, json: bool) -> GraphResult<()> {
    let input = GraphReader::read_from_file(path)?;
    if json {
        let export = GraphExport::of(&input.graph);
        println!("{}", serde_json::to_string_pretty(&export.adjacency)?);
    } else {
        print!("{}", render_adjacency(&input.graph));
    }
    Ok(())
}

/// Print shape statistics.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let input = GraphReader::read_from_file(path)?;
    let summary = GraphSummary::of(&input.graph);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", summary.vertices);
        println!("Edges: {}", summary.edges);
        println!("Self-loops: {}", summary.self_loops);
        println!(
            "Degree: min {}, max {}",
            summary.min_degree, summary.max_degree
        );
        if summary.isolated.is_empty() {
            println!("Isolated vertices: none");
        } else {
            let ids: Vec<String> = summary.isolated.iter().map(|v| v.to_string()).collect();
            println!("Isolated vertices: {}", ids.join(" "));
        }
    }
    Ok(())
}

/// Run one traversal from `start`.
pub fn cmd_traverse(
    path: &Path,
    kind: TraversalKind,
    start: usize,
    json: bool,
) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?.graph;
    let start = graph.vertex(start)?;
    let report = TraversalReport::run(&mut graph, kind, start);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render());
    }
    Ok(())
}

/// Export the graph structure as JSON.
pub fn cmd_export(path: &Path, pretty: bool) -> GraphResult<()> {
    let input = GraphReader::read_from_file(path)?;
    let export = GraphExport::of(&input.graph);
    let out = if pretty {
        serde_json::to_string_pretty(&export)?
    } else {
        serde_json::to_string(&export)?
    };
    println!("{}", out);
    Ok(())
}
