//! `pathrider connect` - paths from source nodes to target nodes
//!
//! Writes the connecting edges to `<out>`, and with `--shortest` the edges
//! on shortest connecting paths to `<out>-shortest.sif`.

use tracing::debug;

use super::dispatch::CommandContext;
use super::report::Reporter;
use super::session::{self, Settings};
use crate::cli::ConnectArgs;
use pathrider_core::error::Result;
use pathrider_core::query::{self, ConnectOptions, QueryWarning};
use pathrider_core::sif;

/// Execute the connect command
pub fn execute(ctx: &CommandContext, args: &ConnectArgs) -> Result<()> {
    let settings = Settings::resolve(&args.options, ctx.config)?;
    let mut reporter = Reporter::new(ctx.cli, "connect");

    let network = session::read_network(&reporter, &args.network, settings.duplicate_edges)?;
    let blacklist =
        session::read_blacklist(&mut reporter, args.options.blacklist.as_deref(), &network)?;
    let network = session::apply_blacklist(&reporter, network, blacklist)?;
    let sources = session::read_nodes(&mut reporter, &args.sources, &network)?;
    let targets = session::read_nodes(&mut reporter, &args.targets, &network)?;
    reporter.count("network_nodes", network.nodes().len());
    reporter.count("network_edges", network.edges().len());

    debug!(elapsed = ?ctx.start.elapsed(), "read_inputs");

    reporter.progress(format_args!("forwarding {}", args.sources.display()));
    reporter.progress(format_args!("backwarding {}", args.targets.display()));
    let report = query::connect(
        &network,
        &sources,
        &targets,
        ConnectOptions {
            shortest: args.shortest,
        },
    );
    reporter.count("forward_edges", report.forward.len());
    reporter.count("backward_edges", report.backward.len());
    reporter.count("connecting_edges", report.connecting.len());

    debug!(elapsed = ?ctx.start.elapsed(), "connect");

    let both = format!("{} {}", args.sources.display(), args.targets.display());
    for warning in report.warnings {
        let subject = match &warning {
            QueryWarning::NoForwardPaths => args.sources.display().to_string(),
            QueryWarning::NoBackwardPaths => args.targets.display().to_string(),
            _ => both.clone(),
        };
        reporter.warn(subject, warning);
    }

    if !report.connecting.is_empty() {
        session::write_edges(&mut reporter, &settings.out, &network, &report.connecting)?;
    }

    if let Some(shortest) = &report.shortest {
        reporter.count("shortest_edges", shortest.len());
        if !shortest.is_empty() {
            let path = sif::derived_path(&settings.out, "shortest.sif");
            session::write_edges(&mut reporter, &path, &network, shortest)?;
        }
    }

    debug!(elapsed = ?ctx.start.elapsed(), "write_outputs");

    reporter.finish()
}
