//! The closed quantity-key vocabulary.
//!
//! Keys fall into three namespaces:
//!
//! - Resources: clay, metal, honey, larvae, clarity
//! - Actions: discard-card, place-meeple, draw-card, trash-card, explore
//! - Bug types: worker, smart, strong, flying
//!
//! Declaration order is the canonical iteration order used when a
//! quantity set is stringified.

use serde::{Deserialize, Serialize};

/// Namespace a key belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    Resource,
    Action,
    BugType,
}

/// A named quantity used in costs, profits, taxes and bonuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityKey {
    Clay,
    Metal,
    Honey,
    Larvae,
    Clarity,

    DiscardCard,
    PlaceMeeple,
    DrawCard,
    TrashCard,
    Explore,

    Worker,
    Smart,
    Strong,
    Flying,
}

impl QuantityKey {
    /// Number of keys in the vocabulary.
    pub const COUNT: usize = 14;

    /// Every key, in declaration order.
    pub const ALL: [QuantityKey; Self::COUNT] = [
        QuantityKey::Clay,
        QuantityKey::Metal,
        QuantityKey::Honey,
        QuantityKey::Larvae,
        QuantityKey::Clarity,
        QuantityKey::DiscardCard,
        QuantityKey::PlaceMeeple,
        QuantityKey::DrawCard,
        QuantityKey::TrashCard,
        QuantityKey::Explore,
        QuantityKey::Worker,
        QuantityKey::Smart,
        QuantityKey::Strong,
        QuantityKey::Flying,
    ];

    /// Position in [`QuantityKey::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Which namespace this key belongs to.
    #[must_use]
    pub const fn namespace(self) -> Namespace {
        use QuantityKey::*;
        match self {
            Clay | Metal | Honey | Larvae | Clarity => Namespace::Resource,
            DiscardCard | PlaceMeeple | DrawCard | TrashCard | Explore => Namespace::Action,
            Worker | Smart | Strong | Flying => Namespace::BugType,
        }
    }

    /// The snake_case name used in JSON.
    #[must_use]
    pub const fn name(self) -> &'static str {
        use QuantityKey::*;
        match self {
            Clay => "clay",
            Metal => "metal",
            Honey => "honey",
            Larvae => "larvae",
            Clarity => "clarity",
            DiscardCard => "discard_card",
            PlaceMeeple => "place_meeple",
            DrawCard => "draw_card",
            TrashCard => "trash_card",
            Explore => "explore",
            Worker => "worker",
            Smart => "smart",
            Strong => "strong",
            Flying => "flying",
        }
    }

    /// The display token, `_<name>`.
    #[must_use]
    pub fn token(self) -> String {
        format!("_{}", self.name())
    }

    /// Look up a key by its snake_case name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Look up a key by its display token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        token.strip_prefix('_').and_then(Self::from_name)
    }

    /// Keys of one namespace, in declaration order.
    pub fn in_namespace(namespace: Namespace) -> impl Iterator<Item = QuantityKey> {
        Self::ALL
            .into_iter()
            .filter(move |k| k.namespace() == namespace)
    }
}

impl std::fmt::Display for QuantityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_index() {
        for (i, key) in QuantityKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn test_namespaces_partition_vocabulary() {
        let resources = QuantityKey::in_namespace(Namespace::Resource).count();
        let actions = QuantityKey::in_namespace(Namespace::Action).count();
        let bugs = QuantityKey::in_namespace(Namespace::BugType).count();

        assert_eq!(resources, 5);
        assert_eq!(actions, 5);
        assert_eq!(bugs, 4);
        assert_eq!(resources + actions + bugs, QuantityKey::COUNT);
    }

    #[test]
    fn test_token_round_trip() {
        for key in QuantityKey::ALL {
            assert_eq!(QuantityKey::from_token(&key.token()), Some(key));
        }
        assert_eq!(QuantityKey::from_token("clay"), None);
        assert_eq!(QuantityKey::from_token("_gold"), None);
    }

    #[test]
    fn test_name_matches_serde() {
        for key in QuantityKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.name()));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(QuantityKey::DrawCard.to_string(), "draw_card");
        assert_eq!(QuantityKey::Honey.token(), "_honey");
    }
}
