//! Quantity sets: bundles of costs, profits, taxes or bonuses.
//!
//! A set always holds a slot for every vocabulary key. A slot is either a
//! count (possibly zero) or unset. Unset slots contribute nothing to value
//! and are skipped by every renderer; explicit zeros are skipped by the
//! repeated-token renderer but shown by the counted one.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::key::QuantityKey;

/// How keys left out of an authored set are filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMode {
    /// Missing keys become explicit zeros.
    ZeroFill,
    /// Missing keys stay unset.
    Unset,
}

/// Mapping from every [`QuantityKey`] to an optional count.
///
/// ## Example
///
/// ```
/// use hive_tables::resources::{KeyMode, QuantityKey, QuantitySet};
///
/// let cost = QuantitySet::from_partial([(QuantityKey::Clay, 2)], KeyMode::Unset)
///     .with(QuantityKey::Honey, 1);
///
/// assert_eq!(cost.count(QuantityKey::Clay), 2);
/// assert_eq!(cost.get(QuantityKey::Metal), None);
/// assert_eq!(cost.total(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuantitySet {
    counts: [Option<u32>; QuantityKey::COUNT],
}

impl QuantitySet {
    /// Create a set with no authored keys.
    #[must_use]
    pub fn new(mode: KeyMode) -> Self {
        let fill = match mode {
            KeyMode::ZeroFill => Some(0),
            KeyMode::Unset => None,
        };
        Self {
            counts: [fill; QuantityKey::COUNT],
        }
    }

    /// An all-unset set.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(KeyMode::Unset)
    }

    /// Build a set from a subset of keys, filling the rest per `mode`.
    ///
    /// A key listed twice keeps its last count.
    #[must_use]
    pub fn from_partial<I>(partial: I, mode: KeyMode) -> Self
    where
        I: IntoIterator<Item = (QuantityKey, u32)>,
    {
        partial
            .into_iter()
            .fold(Self::new(mode), |set, (key, count)| set.with(key, count))
    }

    /// Set a count (builder pattern).
    #[must_use]
    pub fn with(mut self, key: QuantityKey, count: u32) -> Self {
        self.set(key, count);
        self
    }

    /// Set a count in place.
    pub fn set(&mut self, key: QuantityKey, count: u32) {
        self.counts[key.index()] = Some(count);
    }

    /// Clear a slot back to unset.
    pub fn unset(&mut self, key: QuantityKey) {
        self.counts[key.index()] = None;
    }

    /// The slot for `key`: `None` when unset.
    #[must_use]
    pub fn get(&self, key: QuantityKey) -> Option<u32> {
        self.counts[key.index()]
    }

    /// Count for `key`, treating unset as zero.
    #[must_use]
    pub fn count(&self, key: QuantityKey) -> u32 {
        self.get(key).unwrap_or(0)
    }

    /// Every slot in vocabulary order, unset ones included.
    pub fn iter(&self) -> impl Iterator<Item = (QuantityKey, Option<u32>)> + '_ {
        QuantityKey::ALL.into_iter().map(|k| (k, self.get(k)))
    }

    /// Slots holding a count (zero included), in vocabulary order.
    pub fn defined(&self) -> impl Iterator<Item = (QuantityKey, u32)> + '_ {
        self.iter().filter_map(|(k, c)| c.map(|c| (k, c)))
    }

    /// Counts per key in vocabulary order, unset read as zero.
    #[must_use]
    pub fn counts(&self) -> [u32; QuantityKey::COUNT] {
        QuantityKey::ALL.map(|k| self.count(k))
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.defined().fold(0, |acc, (_, c)| acc.saturating_add(c))
    }

    /// True when no key has a non-zero count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defined().all(|(_, c)| c == 0)
    }

    /// Every defined count multiplied by `factor`, saturating at `u32::MAX`;
    /// unset slots stay unset.
    #[must_use]
    pub fn scaled(&self, factor: u32) -> Self {
        Self {
            counts: self.counts.map(|c| c.map(|c| c.saturating_mul(factor))),
        }
    }
}

impl Default for QuantitySet {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for QuantitySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.defined().count()))?;
        for (key, count) in self.defined() {
            map.serialize_entry(&key, &count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for QuantitySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<QuantityKey, u32>::deserialize(deserializer)?;
        Ok(Self::from_partial(map, KeyMode::Unset))
    }
}
