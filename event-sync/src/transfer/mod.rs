//! Spreadsheet-to-event transfer
//!
//! Loads sheet rows, groups them into event documents with their points of
//! contact, and reads the team limit list used by the patch command.

pub mod types;
pub mod transform;
pub mod source;
pub mod team_limits;

pub use types::*;
pub use transform::{Diagnostic, EventTransformer};
pub use source::load_rows;
pub use team_limits::{TeamLimit, read_team_limits};
