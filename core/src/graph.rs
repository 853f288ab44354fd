use std::collections::HashMap;

/// Integer edge weight. Sign is not validated.
pub type Weight = i64;

/// One directed adjacency entry. An undirected edge {u, v} is stored as
/// two of these: `target = v` in u's list and `target = u` in v's list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub target: String,
    pub weight: Weight,
}

/// Undirected weighted graph keyed by node name.
///
/// Each edge lives in both endpoints' adjacency lists with the same weight.
/// Parallel edges are kept; nothing is deduplicated. Every mutation that
/// changes the store bumps `generation`, which callers compare against the
/// generation an MST was computed at. The store never recomputes anything.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    adjacency: HashMap<String, Vec<Edge>>,
    generation: u64,
}

/// Owned, node-sorted copy of the adjacency mapping for handing to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphSnapshot {
    pub generation: u64,
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeSnapshot {
    pub name: String,
    pub edges: Vec<Edge>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known node count.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(node_count),
            generation: 0,
        }
    }

    /// Bulk load from `(u, v, weight)` triples, in the order given.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, Weight)>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight);
        }
        graph
    }

    /// Add an undirected edge, creating either endpoint if absent.
    pub fn add_edge(&mut self, u: impl Into<String>, v: impl Into<String>, weight: Weight) {
        let u = u.into();
        let v = v.into();
        self.adjacency.entry(u.clone()).or_default().push(Edge {
            target: v.clone(),
            weight,
        });
        self.adjacency.entry(v).or_default().push(Edge { target: u, weight });
        self.generation += 1;
    }

    /// Create an isolated node. Returns false if it already exists.
    pub fn add_node(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.adjacency.contains_key(&name) {
            return false;
        }
        self.adjacency.insert(name, Vec::new());
        self.generation += 1;
        true
    }

    /// Remove a node and every edge pointing at it. Returns false if absent.
    pub fn remove_node(&mut self, name: &str) -> bool {
        if self.adjacency.remove(name).is_none() {
            return false;
        }
        for edges in self.adjacency.values_mut() {
            edges.retain(|e| e.target != name);
        }
        self.generation += 1;
        true
    }

    /// Remove the first u→v entry from u's list and the first v→u entry
    /// from v's list, matched by name only. Returns false if neither existed.
    pub fn remove_edge(&mut self, u: &str, v: &str) -> bool {
        let forward = self.remove_first_entry(u, v);
        let backward = self.remove_first_entry(v, u);
        let removed = forward || backward;
        if removed {
            self.generation += 1;
        }
        removed
    }

    fn remove_first_entry(&mut self, from: &str, to: &str) -> bool {
        let Some(edges) = self.adjacency.get_mut(from) else {
            return false;
        };
        match edges.iter().position(|e| e.target == to) {
            Some(idx) => {
                edges.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Adjacency list for a node; empty for unknown nodes.
    pub fn neighbors(&self, name: &str) -> &[Edge] {
        self.adjacency.get(name).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Borrowed view of the full adjacency mapping.
    pub fn adjacency(&self) -> &HashMap<String, Vec<Edge>> {
        &self.adjacency
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(|k| k.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges. A self-loop stores two entries in one
    /// list and counts once, like any other edge.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|v| v.len()).sum::<usize>() / 2
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        let mut nodes: Vec<NodeSnapshot> = self
            .adjacency
            .iter()
            .map(|(name, edges)| NodeSnapshot {
                name: name.clone(),
                edges: edges.clone(),
            })
            .collect();
        nodes.sort_by(|a, b| a.name.cmp(&b.name));
        GraphSnapshot {
            generation: self.generation,
            nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GraphStore {
        GraphStore::from_edges([
            ("A", "B", 3),
            ("A", "C", 1),
            ("B", "D", 4),
            ("C", "D", 2),
            ("C", "E", 8),
        ])
    }

    fn has_entry(g: &GraphStore, from: &str, to: &str) -> bool {
        g.neighbors(from).iter().any(|e| e.target == to)
    }

    #[test]
    fn test_add_edge_creates_both_directions() {
        let mut g = GraphStore::new();
        g.add_edge("X", "Y", 7);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.neighbors("X"), &[Edge { target: "Y".into(), weight: 7 }]);
        assert_eq!(g.neighbors("Y"), &[Edge { target: "X".into(), weight: 7 }]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_parallel_edges_retained() {
        let mut g = GraphStore::new();
        g.add_edge("X", "Y", 7);
        g.add_edge("X", "Y", 2);
        assert_eq!(g.neighbors("X").len(), 2);
        assert_eq!(g.neighbors("Y").len(), 2);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_add_node_existing() {
        let mut g = sample();
        let gen = g.generation();
        assert!(!g.add_node("A"));
        assert_eq!(g.generation(), gen);
        assert!(g.add_node("Z"));
        assert!(g.neighbors("Z").is_empty());
        assert_eq!(g.generation(), gen + 1);
    }

    #[test]
    fn test_remove_node_cascades() {
        let mut g = sample();
        assert!(g.remove_node("C"));
        assert!(!g.contains("C"));
        for name in ["A", "B", "D", "E"] {
            assert!(!has_entry(&g, name, "C"), "{name} still points at C");
        }
        // E lost its only edge but stays as an isolated node
        assert!(g.contains("E"));
        assert!(g.neighbors("E").is_empty());
    }

    #[test]
    fn test_remove_node_absent_is_noop() {
        let mut g = sample();
        let gen = g.generation();
        assert!(!g.remove_node("Q"));
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.generation(), gen);
    }

    #[test]
    fn test_remove_edge_idempotent() {
        let mut g = sample();
        assert!(g.remove_edge("A", "B"));
        assert!(!has_entry(&g, "A", "B"));
        assert!(!has_entry(&g, "B", "A"));
        let gen = g.generation();
        assert!(!g.remove_edge("A", "B"));
        assert_eq!(g.generation(), gen);
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn test_remove_edge_first_match_only() {
        let mut g = GraphStore::new();
        g.add_edge("X", "Y", 5);
        g.add_edge("X", "Y", 9);
        g.remove_edge("Y", "X");
        assert_eq!(g.neighbors("X"), &[Edge { target: "Y".into(), weight: 9 }]);
        assert_eq!(g.neighbors("Y"), &[Edge { target: "X".into(), weight: 9 }]);
    }

    #[test]
    fn test_remove_edge_unknown_nodes() {
        let mut g = sample();
        assert!(!g.remove_edge("A", "nope"));
        assert!(!g.remove_edge("nope", "A"));
        assert_eq!(g.edge_count(), 5);
    }

    #[test]
    fn test_self_loop_add_remove() {
        let mut g = GraphStore::new();
        g.add_edge("S", "S", 1);
        assert_eq!(g.neighbors("S").len(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(g.remove_edge("S", "S"));
        assert!(g.neighbors("S").is_empty());
    }

    #[test]
    fn test_generation_counts_mutations() {
        let mut g = GraphStore::new();
        assert_eq!(g.generation(), 0);
        g.add_edge("A", "B", 1);
        g.add_node("C");
        g.remove_edge("A", "B");
        g.remove_node("C");
        assert_eq!(g.generation(), 4);
    }

    #[test]
    fn test_snapshot_sorted_and_detached() {
        let mut g = sample();
        let snap = g.snapshot();
        let names: Vec<&str> = snap.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(snap.generation, g.generation());

        g.remove_node("A");
        assert_eq!(snap.nodes.len(), 5);
        assert_eq!(snap.nodes[0].edges.len(), 2);
    }
}
