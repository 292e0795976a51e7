//! Subcommand arguments and handlers

pub mod import;
pub mod team_limits;

use clap::Args;

use crate::config::DatabaseOverrides;

/// Connection flags shared by every command that writes
#[derive(Args, Debug, Clone, Default)]
pub struct DatabaseArgs {
    /// MongoDB connection string (overrides MONGODB_URI)
    #[arg(long)]
    pub uri: Option<String>,

    /// Database name (overrides DB_NAME)
    #[arg(long)]
    pub database: Option<String>,

    /// Collection name (overrides COLLECTION_NAME)
    #[arg(long)]
    pub collection: Option<String>,
}

impl From<DatabaseArgs> for DatabaseOverrides {
    fn from(args: DatabaseArgs) -> Self {
        DatabaseOverrides {
            uri: args.uri,
            database: args.database,
            collection: args.collection,
        }
    }
}
