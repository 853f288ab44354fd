use std::path::PathBuf;

use clap::Parser;

/// Session settings. Every option can also come from the environment.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about = "Interactive Prim's MST explorer", long_about = None)]
pub struct Settings {
    /// Root node for Prim's algorithm
    #[clap(long, env = "PRIM_MST_ROOT", default_value = "A")]
    pub root: String,

    /// Start with an empty graph instead of the built-in demo graph
    #[clap(long, conflicts_with = "graph")]
    pub empty: bool,

    /// Preload edges from a file of `u v weight` lines
    #[clap(long, env = "PRIM_MST_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Recompute the MST after every mutation. When off, the tree is
    /// reported stale until `recompute` or `root` is issued.
    #[clap(
        long,
        env = "PRIM_MST_AUTO_RECOMPUTE",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub auto_recompute: bool,

    /// Default log filter; RUST_LOG takes precedence when set
    #[clap(long, env = "PRIM_MST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Print mst, path and snapshot results as JSON
    #[clap(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::try_parse_from(["prim-mst"]).unwrap();
        assert_eq!(s.root, "A");
        assert!(s.auto_recompute);
        assert!(!s.empty);
        assert!(!s.json);
    }

    #[test]
    fn test_auto_recompute_off() {
        let s = Settings::try_parse_from(["prim-mst", "--auto-recompute", "false", "--root", "C"])
            .unwrap();
        assert!(!s.auto_recompute);
        assert_eq!(s.root, "C");
    }

    #[test]
    fn test_empty_conflicts_with_graph() {
        assert!(Settings::try_parse_from(["prim-mst", "--empty", "--graph", "g.txt"]).is_err());
    }
}
