//! beaconctl - CLI client for the beacon feed
//!
//! Renders counter and todo views driven by the shared reactive store,
//! populated from the feed server.

use anyhow::Result;
use clap::Parser;

mod client;
mod commands;
mod config;
mod error;
mod output;
mod views;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Run the command
    if let Err(e) = cli.run().await {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
