//! Storage seam for event writes

use anyhow::Result;
use async_trait::async_trait;

use super::operations::{Operation, OperationResult};

/// Anything that can execute write operations against the event collection
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Execute one operation and report what it did to the matched document
    async fn execute(&self, operation: &Operation) -> Result<OperationResult>;
}

/// In-memory store with the same upsert semantics as the database
#[cfg(test)]
pub mod memory {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use anyhow::{Result, bail};
    use async_trait::async_trait;
    use mongodb::bson::Document;

    use super::EventStore;
    use crate::api::operations::{Operation, OperationResult, WriteOutcome};

    #[derive(Debug, Default)]
    pub struct MemoryStore {
        docs: Mutex<HashMap<(String, String), Document>>,
        /// Key value whose write fails, to exercise error paths
        fail_on: Option<String>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Store that rejects writes for one key
        pub fn failing_on(key: &str) -> Self {
            Self {
                fail_on: Some(key.to_string()),
                ..Self::default()
            }
        }

        pub fn insert(&self, collection: &str, key: &str, doc: Document) {
            self.docs
                .lock()
                .unwrap()
                .insert((collection.to_string(), key.to_string()), doc);
        }

        pub fn get(&self, collection: &str, key: &str) -> Option<Document> {
            self.docs
                .lock()
                .unwrap()
                .get(&(collection.to_string(), key.to_string()))
                .cloned()
        }

        pub fn len(&self) -> usize {
            self.docs.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl EventStore for MemoryStore {
        async fn execute(&self, operation: &Operation) -> Result<OperationResult> {
            if self.fail_on.as_deref() == Some(operation.key_value()) {
                bail!("simulated write failure for '{}'", operation.key_value());
            }

            let key = (
                operation.collection().to_string(),
                operation.key_value().to_string(),
            );
            let mut docs = self.docs.lock().unwrap();

            let outcome = if let Some(existing) = docs.get_mut(&key) {
                let set = match operation {
                    Operation::Upsert { set, .. } | Operation::Update { set, .. } => set,
                };
                let before = existing.clone();
                for (field, value) in set {
                    existing.insert(field.clone(), value.clone());
                }
                if *existing == before {
                    WriteOutcome::Unchanged
                } else {
                    WriteOutcome::Modified
                }
            } else {
                match operation {
                    Operation::Upsert {
                        key_field,
                        key_value,
                        set,
                        set_on_insert,
                        ..
                    } => {
                        let mut doc = Document::new();
                        doc.insert(key_field.clone(), key_value.clone());
                        for (field, value) in set.iter().chain(set_on_insert.iter()) {
                            doc.insert(field.clone(), value.clone());
                        }
                        docs.insert(key, doc);
                        WriteOutcome::Inserted
                    }
                    Operation::Update { .. } => WriteOutcome::NotFound,
                }
            };

            Ok(OperationResult::new(operation.clone(), outcome))
        }
    }
}
