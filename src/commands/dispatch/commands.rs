use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{connect, stream};
use pathrider_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Connect(args) => connect::execute(ctx, args),
            Commands::Stream(args) => stream::execute(ctx, args),
        }
    }
}
