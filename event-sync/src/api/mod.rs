//! Event collection access
//!
//! Writes are expressed as `Operation`s and executed through the
//! `EventStore` trait, backed by MongoDB in production.

pub mod mongo;
pub mod operations;
pub mod store;

pub use mongo::MongoStore;
pub use operations::{OperationResult, WriteSummary};
pub use store::EventStore;
