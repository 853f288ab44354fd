use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use tracing::{debug, trace};

use crate::graph::{GraphStore, Weight};

/// One edge of a computed spanning tree, oriented from the node it was
/// discovered through (`parent`) toward the node it connected (`child`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MstEdge {
    pub parent: String,
    pub child: String,
    pub weight: Weight,
}

impl MstEdge {
    pub fn new(parent: impl Into<String>, child: impl Into<String>, weight: Weight) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
            weight,
        }
    }

    /// True if this edge joins `a` and `b`, in either orientation.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.parent == a && self.child == b) || (self.parent == b && self.child == a)
    }
}

/// Heap entry. `seq` is the discovery order, so equal weights pop in the
/// order they were pushed.
struct Candidate<'g> {
    weight: Weight,
    seq: u64,
    parent: &'g str,
    child: &'g str,
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for Candidate<'_> {}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate<'_> {
    // Reversed: BinaryHeap is a max-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Prim's algorithm from `start`, lazy-deletion variant.
///
/// Each call owns its own heap and visited set. Stale heap entries (edges
/// into nodes that were reached later via a cheaper edge) are discarded on
/// extraction. Returns edges in the order they joined the tree.
///
/// Returns an empty list if `start` is not in the graph. On a disconnected
/// graph only `start`'s component is spanned; use [`unreached_nodes`] to
/// tell a partial tree from a full one.
pub fn compute_mst(graph: &GraphStore, start: &str) -> Vec<MstEdge> {
    let Some((start, _)) = graph.adjacency().get_key_value(start) else {
        debug!(start, "mst root not in graph");
        return Vec::new();
    };
    let start = start.as_str();

    let mut result = Vec::new();
    let mut visited: HashSet<&str> = HashSet::with_capacity(graph.node_count());
    let mut heap: BinaryHeap<Candidate<'_>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    visited.insert(start);
    for edge in graph.neighbors(start) {
        heap.push(Candidate {
            weight: edge.weight,
            seq,
            parent: start,
            child: &edge.target,
        });
        seq += 1;
    }

    while let Some(candidate) = heap.pop() {
        if !visited.insert(candidate.child) {
            trace!(child = candidate.child, "discarding stale candidate");
            continue;
        }

        result.push(MstEdge::new(candidate.parent, candidate.child, candidate.weight));

        for edge in graph.neighbors(candidate.child) {
            if !visited.contains(edge.target.as_str()) {
                heap.push(Candidate {
                    weight: edge.weight,
                    seq,
                    parent: candidate.child,
                    child: &edge.target,
                });
                seq += 1;
            }
        }
    }

    debug!(
        start,
        edges = result.len(),
        nodes = graph.node_count(),
        candidates = seq,
        "mst computed"
    );
    result
}

/// Sum of all edge weights in a tree.
pub fn total_weight(mst: &[MstEdge]) -> Weight {
    mst.iter().map(|e| e.weight).sum()
}

/// Nodes of `graph` not covered by a tree rooted at `start`, sorted by name.
///
/// Non-empty means `mst` spans only part of the graph: either the graph is
/// disconnected or it changed since `mst` was computed. If `start` itself is
/// not in the graph, every node is reported.
pub fn unreached_nodes(graph: &GraphStore, start: &str, mst: &[MstEdge]) -> Vec<String> {
    let mut covered: HashSet<&str> = mst
        .iter()
        .flat_map(|e| [e.parent.as_str(), e.child.as_str()])
        .collect();
    if graph.contains(start) {
        covered.insert(start);
    }

    let mut missing: Vec<String> = graph
        .nodes()
        .filter(|n| !covered.contains(n))
        .map(str::to_string)
        .collect();
    missing.sort();
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> GraphStore {
        GraphStore::from_edges([
            ("A", "B", 3),
            ("A", "C", 1),
            ("B", "D", 4),
            ("C", "D", 2),
            ("C", "E", 8),
        ])
    }

    #[test]
    fn test_mst_scenario_order() {
        let mst = compute_mst(&scenario(), "A");
        assert_eq!(
            mst,
            vec![
                MstEdge::new("A", "C", 1),
                MstEdge::new("C", "D", 2),
                MstEdge::new("A", "B", 3),
                MstEdge::new("C", "E", 8),
            ]
        );
        assert_eq!(total_weight(&mst), 14);
    }

    #[test]
    fn test_mst_any_root_same_weight() {
        let g = scenario();
        for root in ["A", "B", "C", "D", "E"] {
            let mst = compute_mst(&g, root);
            assert_eq!(mst.len(), 4, "root {root}");
            assert_eq!(total_weight(&mst), 14, "root {root}");
        }
    }

    #[test]
    fn test_mst_start_not_in_graph() {
        assert!(compute_mst(&scenario(), "Z").is_empty());
        assert!(compute_mst(&GraphStore::new(), "A").is_empty());
    }

    #[test]
    fn test_mst_isolated_start() {
        let mut g = scenario();
        g.add_node("lonely");
        assert!(compute_mst(&g, "lonely").is_empty());
    }

    #[test]
    fn test_mst_disconnected_spans_start_component() {
        let mut g = scenario();
        g.add_edge("X", "Y", 1);
        let mst = compute_mst(&g, "A");
        assert_eq!(mst.len(), 4);
        assert!(mst.iter().all(|e| e.child != "X" && e.child != "Y"));
        assert_eq!(unreached_nodes(&g, "A", &mst), vec!["X", "Y"]);

        let other = compute_mst(&g, "Y");
        assert_eq!(other, vec![MstEdge::new("Y", "X", 1)]);
    }

    #[test]
    fn test_mst_prefers_cheaper_parallel_edge() {
        let g = GraphStore::from_edges([("A", "B", 9), ("A", "B", 2)]);
        assert_eq!(compute_mst(&g, "A"), vec![MstEdge::new("A", "B", 2)]);
    }

    #[test]
    fn test_mst_tie_keeps_discovery_order() {
        let g = GraphStore::from_edges([("A", "B", 5), ("A", "C", 5), ("A", "D", 5)]);
        let children: Vec<String> = compute_mst(&g, "A").into_iter().map(|e| e.child).collect();
        assert_eq!(children, vec!["B", "C", "D"]);
    }

    #[test]
    fn test_mst_negative_weights() {
        let g = GraphStore::from_edges([("A", "B", -4), ("B", "C", 2), ("A", "C", -1)]);
        let mst = compute_mst(&g, "A");
        assert_eq!(total_weight(&mst), -5);
    }

    #[test]
    fn test_mst_self_loop_ignored() {
        let g = GraphStore::from_edges([("A", "A", 0), ("A", "B", 1)]);
        assert_eq!(compute_mst(&g, "A"), vec![MstEdge::new("A", "B", 1)]);
    }

    #[test]
    fn test_mst_does_not_follow_later_mutation() {
        let mut g = scenario();
        let before = compute_mst(&g, "A");
        g.remove_node("C");
        assert_eq!(before.len(), 4);
        let after = compute_mst(&g, "A");
        assert_eq!(after, vec![MstEdge::new("A", "B", 3), MstEdge::new("B", "D", 4)]);
        assert_eq!(unreached_nodes(&g, "A", &after), vec!["E"]);
    }

    #[test]
    fn test_unreached_unknown_root() {
        let g = scenario();
        assert_eq!(unreached_nodes(&g, "Z", &[]).len(), 5);
    }

    #[test]
    fn test_edge_connects_either_orientation() {
        let e = MstEdge::new("A", "B", 1);
        assert!(e.connects("A", "B"));
        assert!(e.connects("B", "A"));
        assert!(!e.connects("A", "C"));
    }
}
