//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use pathrider_core::config::PathriderConfig;
use pathrider_core::bail_usage;
use pathrider_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a PathriderConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a PathriderConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Invoked without a subcommand
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        bail_usage!("missing command, expecting one of: connect, stream (see `pathrider --help`)")
    }
}
