//! Event collection write operations
//!
//! Operations are built from transformed events or team limits and executed
//! one at a time through an `EventStore`.

pub mod operation;
pub mod writer;

pub use operation::{Operation, OperationResult, WriteOutcome};
pub use writer::{WriteSummary, apply_team_limits, write_events};
