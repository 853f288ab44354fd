//! prim-mst: interactive shell over the prim-mst-core engine.
//!
//! Reads one command per line from stdin, mutates the graph, recomputes the
//! spanning tree, and answers tree path queries. `snapshot` hands the graph,
//! tree and last path to whatever renders them.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod command;
mod load;
mod render;
mod session;
mod settings;

use session::Session;
use settings::Settings;

fn main() -> Result<()> {
    let settings = Settings::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let graph = load::initial_graph(&settings)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        root = %settings.root,
        auto_recompute = settings.auto_recompute,
        "starting session"
    );

    let mut session = Session::new(graph, settings.root.as_str(), settings.auto_recompute, settings.json);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("prim-mst: type 'help' for commands");
    }
    let mut stdout = io::stdout().lock();
    session::run(&mut session, stdin.lock(), &mut stdout, interactive)
}
