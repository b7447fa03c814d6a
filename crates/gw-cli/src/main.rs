//! Groundwork CLI - idempotent schema migrations and reference-data seeding

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::common::ExitCode;
use commands::{migrate, seed, verify};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match &cli.command {
        cli::Commands::Migrate(args) => migrate::execute(args, &cli.global).await,
        cli::Commands::Seed(args) => seed::execute(args, &cli.global).await,
        cli::Commands::Verify => verify::execute(&cli.global).await,
    };

    match result {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast_ref::<ExitCode>() {
            // Diagnostics were already printed; just set the exit status.
            Some(code) => std::process::exit(code.0),
            None => Err(err),
        },
    }
}
