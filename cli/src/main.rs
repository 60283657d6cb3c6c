mod cli;
mod commands;
mod telemetry;

use clap::Parser;
use cli::{Cli, Commands};
use telemetry::setup_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_telemetry(cli.log_dir.as_deref());

    match cli.command {
        Commands::Balances(args) => commands::balances(args).await,
        Commands::TreeInfo(args) => commands::tree_info(args).await,
        Commands::Split(args) => commands::split(args).await,
        Commands::Combine(args) => commands::combine(args).await,
        Commands::Confirm(args) => commands::confirm(args).await,
    }
}
