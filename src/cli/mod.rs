//! Command-line interface for pathrider
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pathrider_core::format::OutputFormat;
pub use args::{ConnectArgs, QueryOptions, StreamArgs};
use parse::parse_output_format;

/// Pathrider - find the paths connecting or streaming from nodes of a
/// directed network
#[derive(Parser, Debug)]
#[command(name = "pathrider")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(
        long,
        global = true,
        default_value = "human",
        value_parser = parse_output_format
    )]
    pub format: OutputFormat,

    /// Suppress progress output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log stage sizes and timings to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `pathrider_core::graph=trace`)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file [default: $PATHRIDER_CONFIG_DIR/config.toml or
    /// the user config directory]
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the paths connecting source nodes to target nodes
    Connect(ConnectArgs),

    /// Find the paths upstream or downstream of seed nodes
    Stream(StreamArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pathrider_core::config::DuplicateEdgePolicy;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_connect() {
        let cli = Cli::try_parse_from([
            "pathrider", "connect", "-s", "-o", "res.sif", "net.sif", "src.txt", "tgt.txt",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Connect(args)) => {
                assert!(args.shortest);
                assert_eq!(args.options.out, Some(PathBuf::from("res.sif")));
                assert_eq!(args.sources, PathBuf::from("src.txt"));
                assert!(args.options.duplicate_edges.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_stream_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pathrider",
            "stream",
            "--terminal",
            "--duplicate-edges",
            "reject",
            "net.sif",
            "seeds.txt",
            "down",
            "--format",
            "json",
            "-q",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
        match cli.command {
            Some(Commands::Stream(args)) => {
                assert!(args.terminal);
                assert_eq!(args.direction, "down");
                assert_eq!(args.options.duplicate_edges, Some(DuplicateEdgePolicy::Reject));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["pathrider", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_parse_connect_requires_three_files() {
        assert!(Cli::try_parse_from(["pathrider", "connect", "net.sif", "src.txt"]).is_err());
    }
}
