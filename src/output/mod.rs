//! Output boundary: turning the catalog into JSON files.
//!
//! ## Key Types
//!
//! - `OutputTable`: the five destinations (cards, buildings, onus tiles,
//!   hand cards, market cards)
//! - `Sink`: persists encoded text; `FsSink` writes files
//! - `ExportReport`: per-table success or failure

pub mod export;
pub mod sink;
pub mod tables;

pub use export::{export, ExportReport};
pub use sink::{FsSink, Sink};
pub use tables::{encode, records, OutputTable};
