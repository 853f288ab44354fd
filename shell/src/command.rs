use prim_mst_core::Weight;
use thiserror::Error;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddNode(String),
    AddEdge(String, String, Weight),
    RemoveNode(String),
    RemoveEdge(String, String),
    /// Change the Prim root and recompute.
    Root(String),
    Recompute,
    Mst,
    Path(String, String),
    Snapshot,
    Status,
    Help,
    Exit,
}

/// Malformed input. Reported to the user; the session carries on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{command}' expects {expected} argument(s), got {got}")]
    Arity {
        command: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("invalid weight '{0}'")]
    InvalidWeight(String),
}

pub const HELP: &str = "\
commands:
  add-node N          add an isolated node
  add-edge U V W      add an undirected edge with integer weight W
  remove-node N       remove a node and all its edges
  remove-edge U V     remove one edge between U and V
  root N              re-run Prim's algorithm from N
  recompute           re-run Prim's algorithm from the current root
  mst                 show the current spanning tree
  path S D            find the tree path from S to D and its cost
  snapshot            dump graph, tree and last path for rendering
  status              show graph size and tree freshness
  help                show this text
  exit                quit";

fn expect_args(command: &'static str, args: &[&str], expected: usize) -> Result<(), CommandError> {
    if args.len() != expected {
        return Err(CommandError::Arity {
            command,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// Parse a whitespace-separated command line. Blank lines yield `None`.
///
/// Accepts the long names above plus the numeric menu choices 0-6.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();

    let cmd = match head.to_lowercase().as_str() {
        "add-node" | "0" => {
            expect_args("add-node", &args, 1)?;
            Command::AddNode(args[0].to_string())
        }
        "add-edge" | "1" => {
            expect_args("add-edge", &args, 3)?;
            let weight = args[2]
                .parse::<Weight>()
                .map_err(|_| CommandError::InvalidWeight(args[2].to_string()))?;
            Command::AddEdge(args[0].to_string(), args[1].to_string(), weight)
        }
        "remove-node" | "2" => {
            expect_args("remove-node", &args, 1)?;
            Command::RemoveNode(args[0].to_string())
        }
        "remove-edge" | "3" => {
            expect_args("remove-edge", &args, 2)?;
            Command::RemoveEdge(args[0].to_string(), args[1].to_string())
        }
        "root" | "4" => {
            expect_args("root", &args, 1)?;
            Command::Root(args[0].to_string())
        }
        "path" | "5" => {
            expect_args("path", &args, 2)?;
            Command::Path(args[0].to_string(), args[1].to_string())
        }
        "exit" | "quit" | "6" => Command::Exit,
        "recompute" => Command::Recompute,
        "mst" => Command::Mst,
        "snapshot" => Command::Snapshot,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(cmd))
}

/// Parse a `u v weight` edge line from a graph file.
/// Blank lines and `#` comments yield `None`.
pub fn parse_edge_line(line: &str) -> Result<Option<(String, String, Weight)>, CommandError> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }
    let parts: Vec<&str> = line.split_whitespace().collect();
    expect_args("edge", &parts, 3)?;
    let weight = parts[2]
        .parse::<Weight>()
        .map_err(|_| CommandError::InvalidWeight(parts[2].to_string()))?;
    Ok(Some((parts[0].to_string(), parts[1].to_string(), weight)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_edge() {
        assert_eq!(
            parse("add-edge A B 3"),
            Ok(Some(Command::AddEdge("A".into(), "B".into(), 3)))
        );
        assert_eq!(
            parse("  1   X  Y  -2 "),
            Ok(Some(Command::AddEdge("X".into(), "Y".into(), -2)))
        );
    }

    #[test]
    fn test_parse_bad_weight() {
        assert_eq!(
            parse("add-edge A B heavy"),
            Err(CommandError::InvalidWeight("heavy".into()))
        );
    }

    #[test]
    fn test_parse_wrong_arity() {
        assert_eq!(
            parse("add-edge A B"),
            Err(CommandError::Arity {
                command: "add-edge",
                expected: 3,
                got: 2
            })
        );
        assert!(parse("path A").is_err());
        assert!(parse("remove-node").is_err());
    }

    #[test]
    fn test_parse_blank_and_unknown() {
        assert_eq!(parse("   "), Ok(None));
        assert_eq!(parse("fly A"), Err(CommandError::Unknown("fly".into())));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("MST"), Ok(Some(Command::Mst)));
        assert_eq!(parse("6"), Ok(Some(Command::Exit)));
        assert_eq!(parse("root C"), Ok(Some(Command::Root("C".into()))));
        assert_eq!(
            parse("remove-edge A B"),
            Ok(Some(Command::RemoveEdge("A".into(), "B".into())))
        );
    }

    #[test]
    fn test_parse_edge_line() {
        assert_eq!(
            parse_edge_line("A B 3  # first"),
            Ok(Some(("A".into(), "B".into(), 3)))
        );
        assert_eq!(parse_edge_line("# comment only"), Ok(None));
        assert_eq!(parse_edge_line(""), Ok(None));
        assert!(parse_edge_line("A B").is_err());
    }
}
