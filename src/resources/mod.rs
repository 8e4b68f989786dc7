//! Resource model: the key vocabulary, unit values and quantity sets.
//!
//! ## Key Types
//!
//! - `QuantityKey`: closed vocabulary of resources, actions and bug types
//! - `ValueTable`: per-key unit values used for balance scoring
//! - `QuantitySet`: per-key counts, each slot either a count or unset
//! - `KeyMode`: whether unauthored keys become zeros or stay unset

pub mod key;
pub mod set;
pub mod values;

pub use key::{Namespace, QuantityKey};
pub use set::{KeyMode, QuantitySet};
pub use values::ValueTable;
