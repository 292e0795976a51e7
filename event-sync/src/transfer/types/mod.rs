//! Core types for event imports

mod value;
mod row;
mod event;
mod config;

pub use value::*;
pub use row::*;
pub use event::*;
pub use config::*;
