//! `import` command

mod handler;

use std::path::PathBuf;

use clap::Args;

use super::DatabaseArgs;

pub use handler::handle_import_command;

#[derive(Args, Debug, Clone)]
pub struct ImportCommands {
    /// Spreadsheet to import (.xlsx, .xls, .ods or .csv)
    pub file: PathBuf,

    /// Worksheet name (defaults to the first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Print the transformed events as JSON instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}
