use std::path::PathBuf;

use clap::Args;

use super::parse::parse_duplicate_edges;
use pathrider_core::config::DuplicateEdgePolicy;

/// Options shared by every query
#[derive(Args, Debug, Clone)]
pub struct QueryOptions {
    /// Remove the nodes listed in FILE (one per line) before querying
    #[arg(long, short, value_name = "FILE")]
    pub blacklist: Option<PathBuf>,

    /// Output network file, must end in .sif [default: out.sif]
    #[arg(long, short, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Repeated source/target pairs in the network: merge their labels or
    /// reject the network [default: merge]
    #[arg(long, value_name = "POLICY", value_parser = parse_duplicate_edges)]
    pub duplicate_edges: Option<DuplicateEdgePolicy>,
}

#[derive(Args, Debug, Clone)]
pub struct ConnectArgs {
    /// Network file (SIF: source<TAB>interaction<TAB>target)
    pub network: PathBuf,

    /// Source nodes, one per line
    pub sources: PathBuf,

    /// Target nodes, one per line
    pub targets: PathBuf,

    /// Also write the shortest connecting paths to <out>-shortest.sif
    #[arg(long, short)]
    pub shortest: bool,

    #[command(flatten)]
    pub options: QueryOptions,
}

#[derive(Args, Debug, Clone)]
pub struct StreamArgs {
    /// Network file (SIF: source<TAB>interaction<TAB>target)
    pub network: PathBuf,

    /// Seed nodes, one per line
    pub seeds: PathBuf,

    /// Stream direction: up or down
    pub direction: String,

    /// Also write the terminal nodes to <out>-terminal.txt
    #[arg(long, short)]
    pub terminal: bool,

    #[command(flatten)]
    pub options: QueryOptions,
}
