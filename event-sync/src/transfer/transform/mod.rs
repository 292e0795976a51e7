//! Transform engine for turning sheet rows into event documents

mod coerce;
mod diagnostics;
mod engine;
mod text;

pub use diagnostics::Diagnostic;
pub use engine::EventTransformer;
