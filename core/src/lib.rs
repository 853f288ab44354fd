//! prim-mst-core: In-memory weighted graph engine.
//!
//! A pure Rust library that maintains an undirected weighted adjacency list,
//! computes a minimum spanning tree with Prim's algorithm from a chosen root,
//! and answers hop-shortest path and path cost queries restricted to that tree.
//!
//! The store is the single mutable source of truth. Spanning trees and paths
//! are owned snapshots with no reference back into it. Mutations never
//! recompute a tree: callers re-run [`compute_mst`] after changing the store,
//! and can compare [`GraphStore::generation`] values to detect a stale tree.
//!
//! No operation here fails. Unknown nodes and edges give no-ops or empty
//! results, and "no path" is an empty [`Path`].

mod graph;
mod mst;
mod path;

pub use graph::{Edge, GraphSnapshot, GraphStore, NodeSnapshot, Weight};
pub use mst::{compute_mst, total_weight, unreached_nodes, MstEdge};
pub use path::{find_path_in_mst, path_cost, query_path, MstIndex, Path, PathReport};
