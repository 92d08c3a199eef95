//! Input and output steps shared by the query commands

use std::path::{Path, PathBuf};

use super::report::Reporter;
use crate::cli::QueryOptions;
use pathrider_core::config::{DuplicateEdgePolicy, PathriderConfig};
use pathrider_core::error::Result;
use pathrider_core::network::{EdgeSet, Network};
use pathrider_core::sif;

/// Query settings after applying flag > config file > default precedence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub out: PathBuf,
    pub duplicate_edges: DuplicateEdgePolicy,
}

impl Settings {
    /// Resolve and validate. The output path is checked here so a bad
    /// extension fails before any input is read.
    pub fn resolve(options: &QueryOptions, config: &PathriderConfig) -> Result<Self> {
        let settings = Self {
            out: options
                .out
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output.out)),
            duplicate_edges: options
                .duplicate_edges
                .unwrap_or(config.network.duplicate_edges),
        };
        sif::validate_output_path(&settings.out)?;
        tracing::debug!(
            out = %settings.out.display(),
            duplicate_edges = %settings.duplicate_edges,
            "resolved_settings"
        );
        Ok(settings)
    }
}

pub fn read_network(
    reporter: &Reporter,
    path: &Path,
    policy: DuplicateEdgePolicy,
) -> Result<Network> {
    reporter.progress(format_args!("reading {}", path.display()));
    sif::read_network(path, policy)
}

/// Read a node list against `network`, reporting dropped nodes
pub fn read_nodes(reporter: &mut Reporter, path: &Path, network: &Network) -> Result<Vec<String>> {
    reporter.progress(format_args!("reading {}", path.display()));
    let list = sif::read_nodes(path, network)?;
    reporter.dropped(path, &list.dropped);
    Ok(list.nodes)
}

/// Blacklisted nodes along with the file they came from
pub struct Blacklist<'p> {
    path: &'p Path,
    nodes: Vec<String>,
}

pub fn read_blacklist<'p>(
    reporter: &mut Reporter,
    path: Option<&'p Path>,
    network: &Network,
) -> Result<Option<Blacklist<'p>>> {
    path.map(|path| -> Result<Blacklist<'p>> {
        Ok(Blacklist {
            path,
            nodes: read_nodes(reporter, path, network)?,
        })
    })
    .transpose()
}

/// Remove the blacklisted nodes, if any
pub fn apply_blacklist(
    reporter: &Reporter,
    network: Network,
    blacklist: Option<Blacklist>,
) -> Result<Network> {
    match blacklist {
        None => Ok(network),
        Some(blacklist) => {
            reporter.progress(format_args!("blacklisting from {}", blacklist.path.display()));
            network.without_nodes(&blacklist.nodes)
        }
    }
}

pub fn write_edges(
    reporter: &mut Reporter,
    path: &Path,
    network: &Network,
    edges: &EdgeSet,
) -> Result<()> {
    reporter.progress(format_args!("writing {}", path.display()));
    let rows = sif::write_network(path, network, edges.as_slice())?;
    reporter.written(path, rows);
    Ok(())
}

pub fn write_nodes(reporter: &mut Reporter, path: &Path, nodes: &[String]) -> Result<()> {
    reporter.progress(format_args!("writing {}", path.display()));
    sif::write_nodes(path, nodes)?;
    reporter.written(path, nodes.len());
    Ok(())
}
