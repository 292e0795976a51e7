//! MongoDB-backed event store

use anyhow::{Context, Result};
use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use super::EventStore;
use super::operations::{Operation, OperationResult, WriteOutcome};
use crate::config::DatabaseConfig;

/// Event store talking to a MongoDB deployment
pub struct MongoStore {
    client: Client,
    database: String,
}

impl MongoStore {
    /// Connect and ping the server so bad URIs fail before any write
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .context("Failed to parse MONGODB_URI")?;
        options.app_name = Some(config.app_name.clone());
        options.server_selection_timeout = Some(config.timeout);

        let client = Client::with_options(options).context("Failed to create MongoDB client")?;
        client
            .database(&config.database)
            .run_command(doc! { "ping": 1 })
            .await
            .with_context(|| format!("Failed to reach MongoDB database '{}'", config.database))?;

        log::info!("Connected to MongoDB database '{}'", config.database);
        Ok(Self {
            client,
            database: config.database.clone(),
        })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.client.database(&self.database).collection(name)
    }
}

#[async_trait]
impl EventStore for MongoStore {
    async fn execute(&self, operation: &Operation) -> Result<OperationResult> {
        let result = self
            .collection(operation.collection())
            .update_one(operation.filter(), operation.update_document())
            .upsert(operation.is_upsert())
            .await
            .with_context(|| {
                format!(
                    "{} failed for {}='{}'",
                    operation.operation_type(),
                    operation.key_field(),
                    operation.key_value()
                )
            })?;

        let outcome = write_outcome(
            result.upserted_id.is_some(),
            result.matched_count,
            result.modified_count,
        );

        Ok(OperationResult::new(operation.clone(), outcome))
    }
}

/// Classify an `update_one` response
fn write_outcome(upserted: bool, matched: u64, modified: u64) -> WriteOutcome {
    if upserted {
        WriteOutcome::Inserted
    } else if modified > 0 {
        WriteOutcome::Modified
    } else if matched > 0 {
        WriteOutcome::Unchanged
    } else {
        WriteOutcome::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_outcome() {
        // an upsert that creates a document reports no match
        assert_eq!(write_outcome(true, 0, 0), WriteOutcome::Inserted);
        assert_eq!(write_outcome(false, 1, 1), WriteOutcome::Modified);
        assert_eq!(write_outcome(false, 1, 0), WriteOutcome::Unchanged);
        assert_eq!(write_outcome(false, 0, 0), WriteOutcome::NotFound);
    }
}
