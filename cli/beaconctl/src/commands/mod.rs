//! CLI command definitions and dispatch.

mod counts;
mod todo;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Client views over the beacon feed.
#[derive(Parser)]
#[command(name = "beaconctl", version, about)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the notification counters and render the counter view.
    Counts(counts::CountsArgs),
    /// Load a todo through the keyed store and render its phases.
    Todo(todo::TodoArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Counts(args) => counts::run(args, self.output).await,
            Commands::Todo(args) => todo::run(args, self.output).await,
        }
    }
}
