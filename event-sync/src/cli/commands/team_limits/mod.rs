//! `team-limits` command

mod handler;

use std::path::PathBuf;

use clap::Args;

use super::DatabaseArgs;

pub use handler::handle_team_limits_command;

#[derive(Args, Debug, Clone)]
pub struct TeamLimitsCommands {
    /// CSV with eventName,teamLimit columns ("max" means no limit)
    #[arg(default_value = "data/team-limits.csv")]
    pub file: PathBuf,

    /// Print the parsed limits instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}
