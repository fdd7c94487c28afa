//! Contract Draft CLI
//!
//! Command-line collaborator for the contract draft generator: collects a
//! contract type and field values, invokes the orchestrator, prints the
//! generated draft, and optionally forwards it to a storage backend.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("contract_draft_core=info".parse()?)
                .add_directive("warn".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Types => commands::types::execute(),
        Commands::Generate(args) => commands::generate::execute(args).await,
        Commands::Send(args) => commands::send::execute(args).await,
    }
}
