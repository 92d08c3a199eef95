//! `pathrider stream` - paths upstream or downstream of seed nodes
//!
//! Writes the streamed edges to `<out>`, and with `--terminal` the nodes
//! where the streamed paths end to `<out>-terminal.txt`.

use tracing::debug;

use super::dispatch::CommandContext;
use super::report::Reporter;
use super::session::{self, Settings};
use crate::cli::StreamArgs;
use pathrider_core::error::Result;
use pathrider_core::graph::Direction;
use pathrider_core::query::{self, StreamOptions};
use pathrider_core::sif;

/// Execute the stream command
pub fn execute(ctx: &CommandContext, args: &StreamArgs) -> Result<()> {
    let settings = Settings::resolve(&args.options, ctx.config)?;
    let direction: Direction = args.direction.parse()?;
    let mut reporter = Reporter::new(ctx.cli, "stream");
    reporter.set_direction(direction);

    let network = session::read_network(&reporter, &args.network, settings.duplicate_edges)?;
    let blacklist =
        session::read_blacklist(&mut reporter, args.options.blacklist.as_deref(), &network)?;
    let network = session::apply_blacklist(&reporter, network, blacklist)?;
    let seeds = session::read_nodes(&mut reporter, &args.seeds, &network)?;
    reporter.count("network_nodes", network.nodes().len());
    reporter.count("network_edges", network.edges().len());

    debug!(elapsed = ?ctx.start.elapsed(), "read_inputs");

    reporter.progress(format_args!("{}streaming {}", direction, args.seeds.display()));
    let report = query::stream(
        &network,
        &seeds,
        direction,
        StreamOptions {
            terminal: args.terminal,
        },
    );
    reporter.count("stream_edges", report.edges.len());

    debug!(elapsed = ?ctx.start.elapsed(), "stream");

    for warning in report.warnings {
        reporter.warn(args.seeds.display(), warning);
    }

    if !report.edges.is_empty() {
        session::write_edges(&mut reporter, &settings.out, &network, &report.edges)?;
    }

    if let Some(terminals) = &report.terminal_nodes {
        reporter.count("terminal_nodes", terminals.len());
        if !terminals.is_empty() {
            let path = sif::derived_path(&settings.out, "terminal.txt");
            session::write_nodes(&mut reporter, &path, terminals)?;
        }
    }

    debug!(elapsed = ?ctx.start.elapsed(), "write_outputs");

    reporter.finish()
}
