//! Per-unit balance values.
//!
//! Values roughly follow the Fibonacci sequence. An action whose value is
//! negative is one that benefits whoever "pays" it (discarding thins a
//! hand), which is why the balance formula subtracts cost magnitudes.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::key::QuantityKey;
use crate::core::DataError;

/// Lookup from key to unit value.
///
/// ## Example
///
/// ```
/// use hive_tables::resources::{QuantityKey, ValueTable};
///
/// let table = ValueTable::standard();
/// assert_eq!(table.unit_value(QuantityKey::Clay).unwrap(), 1.0);
///
/// let partial = ValueTable::new().with(QuantityKey::Clay, 1.0);
/// assert!(partial.unit_value(QuantityKey::Metal).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueTable {
    values: FxHashMap<QuantityKey, f64>,
}

impl ValueTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The table the shipped data is balanced against.
    #[must_use]
    pub fn standard() -> Self {
        use QuantityKey::*;
        [
            (Clay, 1.0),
            (Metal, 2.0),
            (Honey, 2.0),
            (Larvae, 3.0),
            (Clarity, 5.0),
            (DiscardCard, -1.0),
            (PlaceMeeple, 2.0),
            (DrawCard, 3.0),
            (TrashCard, 2.0),
            (Explore, 3.0),
            (Worker, 0.5),
            (Smart, 1.5),
            (Strong, 1.0),
            (Flying, 2.0),
        ]
        .into_iter()
        .collect()
    }

    /// Set a key's unit value (builder pattern).
    #[must_use]
    pub fn with(mut self, key: QuantityKey, value: f64) -> Self {
        self.values.insert(key, value);
        self
    }

    /// Remove a key's unit value (builder pattern).
    #[must_use]
    pub fn without(mut self, key: QuantityKey) -> Self {
        self.values.remove(&key);
        self
    }

    /// Unit value of `key`.
    ///
    /// Fails with [`DataError::UnknownKey`] when the key has no entry.
    pub fn unit_value(&self, key: QuantityKey) -> Result<f64, DataError> {
        self.values
            .get(&key)
            .copied()
            .ok_or(DataError::UnknownKey { key })
    }

    /// Check whether `key` has an entry.
    #[must_use]
    pub fn contains(&self, key: QuantityKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(QuantityKey, f64)> for ValueTable {
    fn from_iter<I: IntoIterator<Item = (QuantityKey, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
