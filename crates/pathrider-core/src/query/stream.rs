use std::time::Instant;

use super::{record, QueryWarning};
use crate::graph::{propagate, terminal_nodes, Adjacency, Direction};
use crate::network::{EdgeSet, Network};

/// Options for [`stream`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamOptions {
    /// Also report the terminal nodes of the streamed paths
    pub terminal: bool,
}

/// Results of a stream query
#[derive(Debug, Clone, Default)]
pub struct StreamReport {
    /// Edges upstream or downstream of the seeds
    pub edges: EdgeSet,
    /// Nodes without predecessors (up) or successors (down) within `edges`,
    /// when requested and paths exist
    pub terminal_nodes: Option<Vec<String>>,
    pub warnings: Vec<QueryWarning>,
}

/// Find the edges upstream (`Up`) or downstream (`Down`) of `seeds`
pub fn stream(
    network: &Network,
    seeds: &[String],
    direction: Direction,
    options: StreamOptions,
) -> StreamReport {
    let start = Instant::now();
    let report = stream_stages(network, seeds, direction, options);
    crate::trace_time!(start, "stream", edges = report.edges.len());
    report
}

fn stream_stages(
    network: &Network,
    seeds: &[String],
    direction: Direction,
    options: StreamOptions,
) -> StreamReport {
    let mut report = StreamReport {
        edges: propagate(seeds, &Adjacency::build(network.edges(), direction)),
        ..StreamReport::default()
    };
    tracing::debug!(%direction, edges = report.edges.len(), "streamed");

    if report.edges.is_empty() {
        record(&mut report.warnings, QueryWarning::NoStreamPaths { direction });
        return report;
    }

    if options.terminal {
        let terminals = terminal_nodes(&Adjacency::build(report.edges.as_slice(), direction));
        tracing::debug!(%direction, terminal_nodes = terminals.len(), "terminal_nodes");
        if terminals.is_empty() {
            record(&mut report.warnings, QueryWarning::NoTerminalNodes { direction });
        }
        report.terminal_nodes = Some(terminals);
    }

    report
}
