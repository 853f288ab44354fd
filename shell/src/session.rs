use std::io::{BufRead, Write};

use anyhow::Result;
use prim_mst_core::{
    compute_mst, query_path, total_weight, unreached_nodes, GraphStore, MstEdge, Path,
};
use tracing::{debug, info, warn};

use crate::command::{self, Command, HELP};
use crate::render::{self, MstPayload, PathPayload, RenderPayload};

/// Whether the read loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive session: the graph, the current root, and the last tree
/// and path derived from it.
///
/// The store never recomputes on its own. The session does it on the
/// caller's behalf after each mutation when `auto_recompute` is on;
/// otherwise the tree stays at `mst_generation` and is reported stale.
pub struct Session {
    graph: GraphStore,
    root: String,
    mst: Vec<MstEdge>,
    /// Store generation the current tree was computed at.
    mst_generation: u64,
    unreached: Vec<String>,
    last_path: Path,
    auto_recompute: bool,
    json: bool,
}

impl Session {
    pub fn new(graph: GraphStore, root: impl Into<String>, auto_recompute: bool, json: bool) -> Self {
        let mut session = Self {
            graph,
            root: root.into(),
            mst: Vec::new(),
            mst_generation: 0,
            unreached: Vec::new(),
            last_path: Vec::new(),
            auto_recompute,
            json,
        };
        session.recompute();
        session
    }

    pub fn is_stale(&self) -> bool {
        self.mst_generation < self.graph.generation()
    }

    /// Re-run Prim's algorithm from the current root.
    pub fn recompute(&mut self) {
        self.mst = compute_mst(&self.graph, &self.root);
        self.mst_generation = self.graph.generation();
        self.unreached = unreached_nodes(&self.graph, &self.root, &self.mst);
        info!(
            root = %self.root,
            edges = self.mst.len(),
            weight = total_weight(&self.mst),
            generation = self.mst_generation,
            "spanning tree recomputed"
        );
        if !self.unreached.is_empty() {
            warn!(
                root = %self.root,
                unreached = self.unreached.len(),
                "spanning tree covers only part of the graph"
            );
        }
    }

    /// Called after every mutation.
    fn after_mutation<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.last_path.clear();
        if !self.is_stale() {
            return Ok(());
        }
        if self.auto_recompute {
            self.recompute();
            self.report_partial(out)?;
        } else {
            debug!(
                mst_generation = self.mst_generation,
                generation = self.graph.generation(),
                "spanning tree stale, auto_recompute off"
            );
        }
        Ok(())
    }

    fn report_partial<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.unreached.is_empty() {
            return Ok(());
        }
        if !self.graph.contains(&self.root) {
            writeln!(out, "[WARN] Root {} is not in the graph; spanning tree is empty.", self.root)?;
        } else {
            writeln!(
                out,
                "[WARN] Partial spanning tree, unreached from {}: {}",
                self.root,
                self.unreached.join(", ")
            )?;
        }
        Ok(())
    }

    fn warn_if_stale<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.is_stale() {
            writeln!(
                out,
                "[WARN] Spanning tree is stale (generation {} < {}); run 'recompute'.",
                self.mst_generation,
                self.graph.generation()
            )?;
        }
        Ok(())
    }

    pub fn render_payload(&self) -> RenderPayload<'_> {
        RenderPayload {
            root: &self.root,
            graph: self.graph.snapshot(),
            mst: &self.mst,
            mst_weight: total_weight(&self.mst),
            mst_generation: self.mst_generation,
            stale: self.is_stale(),
            unreached: &self.unreached,
            path: &self.last_path,
        }
    }

    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow> {
        debug!(?cmd, "executing");
        match cmd {
            Command::AddNode(name) => {
                if self.graph.add_node(name.as_str()) {
                    writeln!(out, "[OK] Added node {name}.")?;
                    self.after_mutation(out)?;
                } else {
                    writeln!(out, "[WARN] Node already exists.")?;
                }
            }
            Command::AddEdge(u, v, weight) => {
                self.graph.add_edge(u.as_str(), v.as_str(), weight);
                writeln!(out, "[OK] Added edge {u} - {v} ({weight}).")?;
                self.after_mutation(out)?;
            }
            Command::RemoveNode(name) => {
                if self.graph.remove_node(&name) {
                    writeln!(out, "[OK] Removed node {name}.")?;
                    self.after_mutation(out)?;
                } else {
                    writeln!(out, "[WARN] Node {name} does not exist.")?;
                }
            }
            Command::RemoveEdge(u, v) => {
                if self.graph.remove_edge(&u, &v) {
                    writeln!(out, "[OK] Removed edge {u} - {v}.")?;
                    self.after_mutation(out)?;
                } else {
                    writeln!(out, "[WARN] No edge between {u} and {v}.")?;
                }
            }
            Command::Root(root) => {
                self.root = root;
                self.last_path.clear();
                self.recompute();
                writeln!(out, "[OK] Root set to {}.", self.root)?;
                self.report_partial(out)?;
            }
            Command::Recompute => {
                self.last_path.clear();
                self.recompute();
                writeln!(out, "[OK] Spanning tree recomputed from {}.", self.root)?;
                self.report_partial(out)?;
            }
            Command::Mst => self.show_mst(out)?,
            Command::Path(src, dest) => self.show_path(&src, &dest, out)?,
            Command::Snapshot => {
                let payload = self.render_payload();
                if self.json {
                    serde_json::to_writer_pretty(&mut *out, &payload)?;
                    writeln!(out)?;
                } else {
                    for line in render::snapshot_lines(&payload) {
                        writeln!(out, "{line}")?;
                    }
                }
            }
            Command::Status => {
                writeln!(
                    out,
                    "[STATUS] nodes={} edges={} root={} generation={} mst_generation={} {}",
                    self.graph.node_count(),
                    self.graph.edge_count(),
                    self.root,
                    self.graph.generation(),
                    self.mst_generation,
                    if self.is_stale() { "stale" } else { "fresh" }
                )?;
                self.report_partial(out)?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Exit => {
                writeln!(out, "[EXIT] Exiting simulator.")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn show_mst<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.json {
            let payload = MstPayload {
                root: &self.root,
                edges: &self.mst,
                total_weight: total_weight(&self.mst),
                stale: self.is_stale(),
            };
            serde_json::to_writer_pretty(&mut *out, &payload)?;
            writeln!(out)?;
            return Ok(());
        }
        self.warn_if_stale(out)?;
        for line in render::mst_lines(&self.root, &self.mst) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn show_path<W: Write>(&mut self, src: &str, dest: &str, out: &mut W) -> Result<()> {
        if !self.json {
            self.warn_if_stale(out)?;
        }
        let report = query_path(src, dest, &self.mst);
        match &report {
            Some(found) => {
                info!(src, dest, hops = found.path.len() - 1, cost = found.cost, "path found");
                self.last_path = found.path.clone();
            }
            None => {
                info!(src, dest, "no path in spanning tree");
                self.last_path.clear();
            }
        }

        if self.json {
            let payload = PathPayload {
                src,
                dest,
                found: report.is_some(),
                path: &self.last_path,
                cost: report.as_ref().map(|r| r.cost),
            };
            serde_json::to_writer_pretty(&mut *out, &payload)?;
            writeln!(out)?;
            return Ok(());
        }

        match report {
            Some(found) => {
                writeln!(out, "{}", render::path_line(&found.path))?;
                writeln!(out, "[COST] {}", found.cost)?;
            }
            None => writeln!(out, "[WARN] No path found from {src} to {dest}.")?,
        }
        Ok(())
    }
}

/// Read commands line by line until `exit` or end of input.
///
/// Malformed lines are reported and skipped; only I/O and serialization
/// failures end the loop with an error.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W, prompt: bool) -> Result<()> {
    if prompt {
        write!(out, "> ")?;
        out.flush()?;
    }
    for line in input.lines() {
        let line = line?;
        match command::parse(&line) {
            Ok(Some(cmd)) => {
                if session.execute(cmd, out)? == Flow::Exit {
                    return Ok(());
                }
            }
            Ok(None) => {}
            Err(err) => {
                debug!(%err, line = %line, "rejected input");
                writeln!(out, "[ERROR] {err}")?;
            }
        }
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
    }
    Ok(())
}
