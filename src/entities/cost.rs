//! Entity costs and authored quantity lists.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::resources::{KeyMode, QuantityKey, QuantitySet};

/// An authored subset of keys and counts, as written in a table.
///
/// SmallVec keeps the usual one to four entries inline.
pub type Partial = SmallVec<[(QuantityKey, u32); 4]>;

/// Collect key/count pairs into a [`Partial`].
#[must_use]
pub fn partial<I>(pairs: I) -> Partial
where
    I: IntoIterator<Item = (QuantityKey, u32)>,
{
    pairs.into_iter().collect()
}

/// What an entity costs.
///
/// Serialized untagged: a quantity map, a bare number, or `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cost {
    /// No cost at all.
    #[default]
    None,
    /// A bundle of keys.
    Set(QuantitySet),
    /// A single number, used by later card revisions.
    Scalar(u32),
}

impl Cost {
    /// True when nothing has to be paid.
    #[must_use]
    pub fn is_free(&self) -> bool {
        match self {
            Cost::None => true,
            Cost::Set(set) => set.is_empty(),
            Cost::Scalar(n) => *n == 0,
        }
    }
}

/// A cost as written in a table, before keys are filled.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CostSpec {
    #[default]
    None,
    Set(Partial),
    Scalar(u32),
}

impl CostSpec {
    /// Fill the authored keys into a [`Cost`].
    #[must_use]
    pub fn resolve(&self, mode: KeyMode) -> Cost {
        match self {
            CostSpec::None => Cost::None,
            CostSpec::Set(pairs) => Cost::Set(QuantitySet::from_partial(pairs.iter().copied(), mode)),
            CostSpec::Scalar(n) => Cost::Scalar(*n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use QuantityKey::*;

    #[test]
    fn test_resolve_set_respects_mode() {
        let spec = CostSpec::Set(partial([(Larvae, 1)]));

        match spec.resolve(KeyMode::ZeroFill) {
            Cost::Set(set) => assert_eq!(set.get(Clay), Some(0)),
            other => panic!("expected set, got {other:?}"),
        }
        match spec.resolve(KeyMode::Unset) {
            Cost::Set(set) => assert_eq!(set.get(Clay), None),
            other => panic!("expected set, got {other:?}"),
        }
    }

    #[test]
    fn test_is_free() {
        assert!(Cost::None.is_free());
        assert!(Cost::Scalar(0).is_free());
        assert!(Cost::Set(QuantitySet::empty()).is_free());
        assert!(!Cost::Scalar(2).is_free());
    }

    #[test]
    fn test_untagged_serialization() {
        assert_eq!(serde_json::to_string(&Cost::None).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Cost::Scalar(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&Cost::Set(QuantitySet::empty().with(Honey, 2))).unwrap(),
            r#"{"honey":2}"#
        );

        let back: Cost = serde_json::from_str("3").unwrap();
        assert_eq!(back, Cost::Scalar(3));
    }
}
