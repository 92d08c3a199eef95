use std::time::Instant;

use super::{record, QueryWarning};
use crate::graph::{all_shortest_paths, backward_edges, forward_edges, intersect_edges};
use crate::network::{EdgeSet, Network};

/// Options for [`connect`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectOptions {
    /// Also compute the shortest connecting paths
    pub shortest: bool,
}

/// Results of a connect query, stage by stage
#[derive(Debug, Clone, Default)]
pub struct ConnectReport {
    /// Edges reachable from the sources
    pub forward: EdgeSet,
    /// Edges reaching the targets
    pub backward: EdgeSet,
    /// Edges on a path from a source to a target
    pub connecting: EdgeSet,
    /// Edges on a shortest source-to-target path, when requested and
    /// connecting paths exist
    pub shortest: Option<EdgeSet>,
    pub warnings: Vec<QueryWarning>,
}

/// Find the edges on any path from `sources` to `targets`.
///
/// Runs forward propagation from the sources and backward propagation from
/// the targets, then keeps the edges found by both. With
/// [`ConnectOptions::shortest`] the connecting edges are further reduced to
/// the edges lying on shortest source-to-target paths.
pub fn connect(
    network: &Network,
    sources: &[String],
    targets: &[String],
    options: ConnectOptions,
) -> ConnectReport {
    let start = Instant::now();
    let report = connect_stages(network, sources, targets, options);
    crate::trace_time!(start, "connect", connecting = report.connecting.len());
    report
}

fn connect_stages(
    network: &Network,
    sources: &[String],
    targets: &[String],
    options: ConnectOptions,
) -> ConnectReport {
    let mut report = ConnectReport {
        forward: forward_edges(sources, network.edges()),
        backward: backward_edges(targets, network.edges()),
        ..ConnectReport::default()
    };
    tracing::debug!(
        forward = report.forward.len(),
        backward = report.backward.len(),
        "propagated"
    );

    if report.forward.is_empty() {
        record(&mut report.warnings, QueryWarning::NoForwardPaths);
    }
    if report.backward.is_empty() {
        record(&mut report.warnings, QueryWarning::NoBackwardPaths);
    }
    if report.forward.is_empty() || report.backward.is_empty() {
        return report;
    }

    report.connecting = intersect_edges(&report.forward, &report.backward);
    tracing::debug!(connecting = report.connecting.len(), "intersected");
    if report.connecting.is_empty() {
        record(&mut report.warnings, QueryWarning::NoConnectingPaths);
        return report;
    }

    if options.shortest {
        let shortest = all_shortest_paths(sources, targets, report.connecting.as_slice());
        tracing::debug!(shortest = shortest.len(), "shortest_paths");
        if shortest.is_empty() {
            record(&mut report.warnings, QueryWarning::NoShortestPaths);
        }
        report.shortest = Some(shortest);
    }

    report
}
