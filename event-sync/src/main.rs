mod api;
mod cli;
mod config;
mod transfer;

use anyhow::Result;
use clap::Parser;
use colored::*;

use cli::{Cli, Commands};
use cli::commands::import::handle_import_command;
use cli::commands::team_limits::handle_team_limits_command;

fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "event_sync=debug" } else { "event_sync=info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let transform_config = config::load_transform_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Import(args) => handle_import_command(args, transform_config).await,
        Commands::TeamLimits(args) => handle_team_limits_command(args).await,
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    setup_logging(cli.verbose);
    log::debug!("event-sync {} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
