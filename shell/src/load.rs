use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use prim_mst_core::{GraphStore, Weight};
use tracing::info;

use crate::command::parse_edge_line;
use crate::settings::Settings;

/// The graph a session starts with when no file is given.
pub const DEMO_EDGES: [(&str, &str, Weight); 13] = [
    ("A", "B", 3),
    ("A", "C", 1),
    ("B", "D", 4),
    ("C", "D", 2),
    ("C", "E", 8),
    ("D", "F", 10),
    ("F", "G", 11),
    ("F", "H", 9),
    ("G", "I", 12),
    ("H", "K", 13),
    ("K", "B", 10),
    ("F", "I", 11),
    ("H", "C", 9),
];

pub fn demo_graph() -> GraphStore {
    GraphStore::from_edges(DEMO_EDGES)
}

/// Parse `u v weight` lines into a store, in file order.
pub fn parse_graph(text: &str) -> Result<GraphStore> {
    let mut graph = GraphStore::new();
    for (lineno, line) in text.lines().enumerate() {
        if let Some((u, v, w)) =
            parse_edge_line(line).with_context(|| format!("line {}", lineno + 1))?
        {
            graph.add_edge(u, v, w);
        }
    }
    Ok(graph)
}

pub fn load_graph_file(path: &Path) -> Result<GraphStore> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading graph file {}", path.display()))?;
    let graph =
        parse_graph(&text).with_context(|| format!("parsing graph file {}", path.display()))?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Build the starting graph from settings: file, empty, or demo.
pub fn initial_graph(settings: &Settings) -> Result<GraphStore> {
    if let Some(path) = &settings.graph {
        return load_graph_file(path);
    }
    if settings.empty {
        return Ok(GraphStore::new());
    }
    Ok(demo_graph())
}
