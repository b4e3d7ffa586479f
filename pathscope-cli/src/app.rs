use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pathscope::graph::algorithms::TieBreak;

/// pathscope - shortest routes and ranked alternatives over weighted graphs
#[derive(Debug, Parser)]
#[command(name = "pathscope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON graph description. Uses the built-in 16-node reference network when omitted.
    #[arg(long, global = true, value_name = "FILE")]
    pub graph: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the shortest route between two nodes and its ranked alternatives.
    Route {
        /// Start node (defaults to 0 on the reference network).
        #[arg(long, value_name = "NODE")]
        from: Option<String>,

        /// Target node (defaults to 15 on the reference network).
        #[arg(long, value_name = "NODE")]
        to: Option<String>,

        /// Number of alternative routes to list.
        #[arg(short, long, default_value_t = 3)]
        alternatives: usize,

        /// Only consider alternatives with at most this many edges.
        #[arg(long, value_name = "EDGES")]
        max_depth: Option<usize>,

        /// Stop enumerating candidate routes after this many.
        #[arg(long, value_name = "COUNT")]
        max_paths: Option<usize>,

        /// Ordering of equal-weight routes: enumeration or node-order.
        #[arg(long, default_value_t = TieBreak::Enumeration)]
        tie_break: TieBreak,

        /// Output format: text or dot. `dot` cannot be combined with --json.
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List every simple path between two nodes, ranked by total weight.
    Paths {
        /// Start node (defaults to 0 on the reference network).
        #[arg(long, value_name = "NODE")]
        from: Option<String>,

        /// Target node (defaults to 15 on the reference network).
        #[arg(long, value_name = "NODE")]
        to: Option<String>,

        /// Stop after enumerating this many paths.
        #[arg(short, long, value_name = "COUNT")]
        limit: Option<usize>,
    },

    /// Display graph overview: node and edge counts, degrees, and optional distances.
    Info {
        /// List shortest distances from this node.
        #[arg(long, value_name = "NODE")]
        from: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_route() {
        let cli = Cli::parse_from([
            "pathscope",
            "route",
            "--from",
            "3",
            "--to",
            "12",
            "-a",
            "5",
            "--tie-break",
            "node-order",
            "--json",
        ]);
        assert!(cli.global.json);
        match cli.command {
            Command::Route {
                from,
                to,
                alternatives,
                tie_break,
                format,
                ..
            } => {
                assert_eq!(from.as_deref(), Some("3"));
                assert_eq!(to.as_deref(), Some("12"));
                assert_eq!(alternatives, 5);
                assert_eq!(tie_break, TieBreak::NodeOrder);
                assert_eq!(format, "text");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["pathscope", "paths"]);
        assert!(cli.global.graph.is_none());
        assert!(!cli.global.verbose);
        assert!(matches!(
            cli.command,
            Command::Paths {
                from: None,
                to: None,
                limit: None
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_tie_break() {
        let result = Cli::try_parse_from(["pathscope", "route", "--tie-break", "random"]);
        assert!(result.is_err());
    }
}
