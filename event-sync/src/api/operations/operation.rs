//! Core Operation types for event collection writes

use mongodb::bson::{Bson, Document, doc};

/// Represents a single write that can be executed against the event store
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Create the document if no document matches the key, update it otherwise
    Upsert {
        /// Collection name (e.g., "events")
        collection: String,
        /// Field matched against (e.g., "eventName")
        key_field: String,
        /// Key value to match against
        key_value: String,
        /// Fields written on every run
        set: Document,
        /// Fields written only when the document is created
        set_on_insert: Document,
    },
    /// Update an existing document; never inserts
    Update {
        /// Collection name
        collection: String,
        /// Field matched against
        key_field: String,
        /// Key value to match against
        key_value: String,
        /// Fields to overwrite
        set: Document,
    },
}

/// What a write did to the matched document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No document matched and a new one was created
    Inserted,
    /// A document matched and at least one field changed
    Modified,
    /// A document matched but already held the same values
    Unchanged,
    /// No document matched and the operation does not insert
    NotFound,
}

/// Result of executing an Operation
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult {
    /// The operation that was executed
    pub operation: Operation,
    pub outcome: WriteOutcome,
}

impl Operation {
    /// Create a new Upsert operation
    pub fn upsert(
        collection: impl Into<String>,
        key_field: impl Into<String>,
        key_value: impl Into<String>,
        set: Document,
        set_on_insert: Document,
    ) -> Self {
        Self::Upsert {
            collection: collection.into(),
            key_field: key_field.into(),
            key_value: key_value.into(),
            set,
            set_on_insert,
        }
    }

    /// Create a new Update operation
    pub fn update(
        collection: impl Into<String>,
        key_field: impl Into<String>,
        key_value: impl Into<String>,
        set: Document,
    ) -> Self {
        Self::Update {
            collection: collection.into(),
            key_field: key_field.into(),
            key_value: key_value.into(),
            set,
        }
    }

    /// Get the collection name for this operation
    pub fn collection(&self) -> &str {
        match self {
            Self::Upsert { collection, .. } => collection,
            Self::Update { collection, .. } => collection,
        }
    }

    pub fn key_field(&self) -> &str {
        match self {
            Self::Upsert { key_field, .. } => key_field,
            Self::Update { key_field, .. } => key_field,
        }
    }

    pub fn key_value(&self) -> &str {
        match self {
            Self::Upsert { key_value, .. } => key_value,
            Self::Update { key_value, .. } => key_value,
        }
    }

    /// Get the operation type as a string
    pub fn operation_type(&self) -> &'static str {
        match self {
            Self::Upsert { .. } => "upsert",
            Self::Update { .. } => "update",
        }
    }

    /// Whether a missing document gets created
    pub fn is_upsert(&self) -> bool {
        matches!(self, Self::Upsert { .. })
    }

    /// Query document selecting the target
    pub fn filter(&self) -> Document {
        let mut filter = Document::new();
        filter.insert(self.key_field(), self.key_value());
        filter
    }

    /// Update document with `$set` and, for upserts, `$setOnInsert`
    pub fn update_document(&self) -> Document {
        match self {
            Self::Upsert {
                set, set_on_insert, ..
            } => {
                let mut update = doc! { "$set": set.clone() };
                if !set_on_insert.is_empty() {
                    update.insert("$setOnInsert", Bson::Document(set_on_insert.clone()));
                }
                update
            }
            Self::Update { set, .. } => doc! { "$set": set.clone() },
        }
    }
}

impl OperationResult {
    pub fn new(operation: Operation, outcome: WriteOutcome) -> Self {
        Self { operation, outcome }
    }

    /// Check if a document matched the key (or was created)
    pub fn is_matched(&self) -> bool {
        !matches!(self.outcome, WriteOutcome::NotFound)
    }
}
