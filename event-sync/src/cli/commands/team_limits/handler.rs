//! Team limit command handler

use anyhow::Result;
use colored::*;

use super::TeamLimitsCommands;
use crate::api::operations::apply_team_limits;
use crate::api::{MongoStore, OperationResult};
use crate::config::DatabaseConfig;
use crate::transfer::read_team_limits;
use crate::transfer::team_limits::{TeamLimit, UNLIMITED_TEAMS};

/// Patch `teamLimit` on existing events; never creates documents
pub async fn handle_team_limits_command(args: TeamLimitsCommands) -> Result<()> {
    let limits = read_team_limits(&args.file)?;
    log::info!("Read {} team limits from {}", limits.len(), args.file.display());

    if args.dry_run {
        for limit in &limits {
            println!("{}", describe_limit(limit));
        }
        return Ok(());
    }

    let db_config = DatabaseConfig::from_env(args.database.into())?;
    let store = MongoStore::connect(&db_config).await?;

    let results = apply_team_limits(&store, &db_config.collection, &limits).await?;
    for result in &results {
        println!("{}", describe_result(result));
    }

    let missing = results.iter().filter(|r| !r.is_matched()).count();
    if missing > 0 {
        log::warn!("{} events from the list do not exist in the collection", missing);
    }

    Ok(())
}

fn describe_limit(limit: &TeamLimit) -> String {
    if limit.team_limit == UNLIMITED_TEAMS {
        format!("{}: unlimited", limit.event_name)
    } else {
        format!("{}: {}", limit.event_name, limit.team_limit)
    }
}

fn describe_result(result: &OperationResult) -> String {
    let name = result.operation.key_value();
    if result.is_matched() {
        format!("{} {}", "Updated:".green(), name)
    } else {
        format!("{} {}", "Not Found:".yellow(), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::operations::{Operation, WriteOutcome};
    use mongodb::bson::doc;

    #[test]
    fn test_describe_limit() {
        assert_eq!(describe_limit(&TeamLimit::new("BGMI", UNLIMITED_TEAMS)), "BGMI: unlimited");
        assert_eq!(describe_limit(&TeamLimit::new("Model Forge", 20)), "Model Forge: 20");
    }

    #[test]
    fn test_describe_result() {
        colored::control::set_override(false);
        let op = Operation::update("events", "eventName", "Loadrix", doc! { "teamLimit": 35_i64 });

        let updated = OperationResult::new(op.clone(), WriteOutcome::Unchanged);
        let missing = OperationResult::new(op, WriteOutcome::NotFound);

        assert_eq!(describe_result(&updated), "Updated: Loadrix");
        assert_eq!(describe_result(&missing), "Not Found: Loadrix");
    }
}
