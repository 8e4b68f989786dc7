//! Core types: object ids, run configuration, errors.
//!
//! Everything here is independent of the concrete tables; the other
//! modules build on it.

pub mod entity;
pub mod config;
pub mod error;

pub use entity::{IdSequence, ObjectId};
pub use config::GeneratorConfig;
pub use error::DataError;
