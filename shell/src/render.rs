use prim_mst_core::{total_weight, GraphSnapshot, MstEdge, Weight};
use serde::Serialize;

/// Everything a renderer needs for one frame: graph, tree, highlighted path.
///
/// Built from owned or borrowed snapshots after a mutate-and-recompute cycle
/// completes, so a renderer never reads the store mid-mutation.
#[derive(Debug, Serialize)]
pub struct RenderPayload<'a> {
    pub root: &'a str,
    pub graph: GraphSnapshot,
    pub mst: &'a [MstEdge],
    pub mst_weight: Weight,
    pub mst_generation: u64,
    pub stale: bool,
    pub unreached: &'a [String],
    pub path: &'a [String],
}

/// Serializable form of a path query result.
#[derive(Debug, Serialize)]
pub struct PathPayload<'a> {
    pub src: &'a str,
    pub dest: &'a str,
    pub found: bool,
    pub path: &'a [String],
    pub cost: Option<Weight>,
}

#[derive(Debug, Serialize)]
pub struct MstPayload<'a> {
    pub root: &'a str,
    pub edges: &'a [MstEdge],
    pub total_weight: Weight,
    pub stale: bool,
}

pub fn mst_lines(root: &str, mst: &[MstEdge]) -> Vec<String> {
    if mst.is_empty() {
        return vec![format!("[MST] root {root}: no edges")];
    }
    let mut lines: Vec<String> = mst
        .iter()
        .map(|e| format!("[MST] {} - {} ({})", e.parent, e.child, e.weight))
        .collect();
    lines.push(format!("[MST] root {root}: {} edges, total weight {}", mst.len(), total_weight(mst)));
    lines
}

pub fn path_line<S: AsRef<str>>(path: &[S]) -> String {
    let joined: Vec<&str> = path.iter().map(|s| s.as_ref()).collect();
    format!("[PATH] {}", joined.join(" -> "))
}

pub fn snapshot_lines(payload: &RenderPayload<'_>) -> Vec<String> {
    let mut lines = Vec::with_capacity(payload.graph.nodes.len() + 2);
    for node in &payload.graph.nodes {
        let edges: Vec<String> = node
            .edges
            .iter()
            .map(|e| format!("{}:{}", e.target, e.weight))
            .collect();
        lines.push(format!("[GRAPH] {} -> [{}]", node.name, edges.join(", ")));
    }
    lines.extend(mst_lines(payload.root, payload.mst));
    if !payload.path.is_empty() {
        lines.push(path_line(payload.path));
    }
    lines
}
