//! Turn events and team limits into writes and execute them in order

use anyhow::{Context, Result};
use mongodb::bson::{self, Bson, Document, doc};

use crate::api::EventStore;
use crate::transfer::{Event, TeamLimit};

use super::{Operation, OperationResult, WriteOutcome};

/// Key every event document is matched on
pub const EVENT_KEY: &str = "eventName";

/// Counts of what a batch of writes did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub inserted: usize,
    pub modified: usize,
    pub unchanged: usize,
    pub not_found: usize,
}

impl WriteSummary {
    fn record(&mut self, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Inserted => self.inserted += 1,
            WriteOutcome::Modified => self.modified += 1,
            WriteOutcome::Unchanged => self.unchanged += 1,
            WriteOutcome::NotFound => self.not_found += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.inserted + self.modified + self.unchanged + self.not_found
    }
}

/// Fields owned by the web app, initialised only when an event is created
fn insert_defaults() -> Document {
    doc! {
        "registrations": Bson::Array(Vec::new()),
        "isActive": false,
    }
}

/// Build the upsert for one event
pub fn event_upsert(collection: &str, event: &Event) -> Result<Operation> {
    let set = bson::to_document(event)
        .with_context(|| format!("Failed to serialize event '{}'", event.event_name))?;
    Ok(Operation::upsert(
        collection,
        EVENT_KEY,
        &event.event_name,
        set,
        insert_defaults(),
    ))
}

/// Upsert events in order, stopping at the first failed write
pub async fn write_events(
    store: &dyn EventStore,
    collection: &str,
    events: &[Event],
) -> Result<WriteSummary> {
    let mut summary = WriteSummary::default();

    for event in events {
        let operation = event_upsert(collection, event)?;
        let result = store
            .execute(&operation)
            .await
            .with_context(|| format!("Failed to upsert event '{}'", event.event_name))?;

        log::debug!("{} -> {:?}", event.event_name, result.outcome);
        summary.record(result.outcome);
    }

    Ok(summary)
}

/// Set `teamLimit` on events that already exist; unknown names are reported,
/// not created
pub async fn apply_team_limits(
    store: &dyn EventStore,
    collection: &str,
    limits: &[TeamLimit],
) -> Result<Vec<OperationResult>> {
    let mut results = Vec::with_capacity(limits.len());

    for limit in limits {
        let operation = Operation::update(
            collection,
            EVENT_KEY,
            &limit.event_name,
            doc! { "teamLimit": limit.team_limit },
        );
        let result = store
            .execute(&operation)
            .await
            .with_context(|| format!("Failed to update team limit for '{}'", limit.event_name))?;
        results.push(result);
    }

    Ok(results)
}
