use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::graph::Weight;
use crate::mst::MstEdge;

/// Ordered node names from source to destination. Empty means "no path".
pub type Path = Vec<String>;

/// A found path together with its summed MST edge weight.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathReport {
    pub path: Path,
    pub cost: Weight,
}

/// Undirected adjacency view over an MST edge list. Each edge contributes
/// both directions; neighbor order follows the edge list.
#[derive(Debug, Default)]
pub struct MstIndex<'m> {
    adjacency: HashMap<&'m str, Vec<&'m str>>,
}

impl<'m> MstIndex<'m> {
    pub fn new(mst: &'m [MstEdge]) -> Self {
        let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
        for e in mst {
            adjacency.entry(e.parent.as_str()).or_default().push(e.child.as_str());
            adjacency.entry(e.child.as_str()).or_default().push(e.parent.as_str());
        }
        Self { adjacency }
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn neighbors(&self, node: &str) -> &[&'m str] {
        self.adjacency.get(node).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Path-carrying BFS from `src` to `dest`.
    ///
    /// Each frontier entry is a full path. A node is marked visited when a
    /// path ending in it is dequeued, so several partial paths may pass
    /// through a node before it is committed. On a tree the first path to
    /// reach `dest` is the unique tree path.
    pub fn find_path(&self, src: &str, dest: &str) -> Path {
        if !self.contains(src) || !self.contains(dest) {
            debug!(src, dest, "path endpoint not in mst");
            return Vec::new();
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<Vec<&str>> = VecDeque::new();
        queue.push_back(vec![src]);

        while let Some(path) = queue.pop_front() {
            let Some(&last) = path.last() else {
                continue;
            };
            if last == dest {
                debug!(src, dest, hops = path.len() - 1, "mst path found");
                return path.into_iter().map(str::to_string).collect();
            }
            if !visited.insert(last) {
                continue;
            }
            for &next in self.neighbors(last) {
                let mut extended = path.clone();
                extended.push(next);
                queue.push_back(extended);
            }
        }

        debug!(src, dest, "no mst path");
        Vec::new()
    }
}

/// Shortest-hop path between `src` and `dest` using only MST edges.
///
/// Returns an empty path if either endpoint is absent from the MST or the
/// two are in different components. An MST with no edges has no nodes, so
/// even `src == dest` yields an empty path there.
pub fn find_path_in_mst(src: &str, dest: &str, mst: &[MstEdge]) -> Path {
    MstIndex::new(mst).find_path(src, dest)
}

/// Sum of MST edge weights along `path`.
///
/// Each consecutive pair takes the weight of the first MST edge joining it
/// in either orientation. Pairs with no matching edge add 0, so a path that
/// was not produced from this MST still yields a number rather than failing.
pub fn path_cost<S: AsRef<str>>(path: &[S], mst: &[MstEdge]) -> Weight {
    path.windows(2)
        .map(|pair| {
            let (u, v) = (pair[0].as_ref(), pair[1].as_ref());
            mst.iter()
                .find(|e| e.connects(u, v))
                .map(|e| e.weight)
                .unwrap_or(0)
        })
        .sum()
}

/// Find a path and its cost. `None` is the "no path" outcome.
pub fn query_path(src: &str, dest: &str, mst: &[MstEdge]) -> Option<PathReport> {
    let path = find_path_in_mst(src, dest, mst);
    if path.is_empty() {
        return None;
    }
    let cost = path_cost(&path, mst);
    Some(PathReport { path, cost })
}
