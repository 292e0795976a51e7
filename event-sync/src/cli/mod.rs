//! Command-line interface

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::import::ImportCommands;
use commands::team_limits::TeamLimitsCommands;

#[derive(Parser, Debug)]
#[command(name = "event-sync", version, about = "Import festival event sheets into MongoDB")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Transform settings file (defaults to <config dir>/event-sync/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upsert events from a spreadsheet
    Import(ImportCommands),
    /// Set team limits on events that already exist
    TeamLimits(TeamLimitsCommands),
}
