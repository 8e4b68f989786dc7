//! Entity system: cards, buildings, onus tiles and the catalog.
//!
//! ## Key Types
//!
//! - `CardSpec` / `BuildingSpec` / `OnusSpec`: authored fields with
//!   documented defaults (builder pattern)
//! - `Card` / `Building` / `Onus`: finished, immutable records carrying
//!   their value and display strings
//! - `Cost`: a quantity set, a scalar, or nothing
//! - `Catalog`: owns one run's id sequence and every entity built in it

pub mod building;
pub mod card;
pub mod catalog;
pub mod cost;
pub mod onus;

use serde::{Deserialize, Serialize};

use crate::balance::Valued;
use crate::core::ObjectId;
use crate::resources::QuantitySet;

pub use building::{Building, BuildingSpec, BOARD_TIER};
pub use card::{Card, CardSpec, Deck};
pub use catalog::{BuildContext, Catalog};
pub use cost::{partial, Cost, CostSpec, Partial};
pub use onus::{Onus, OnusSpec};

/// The three record kinds, serialized as each record's `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Card,
    Building,
    Onus,
}

/// Borrowed view of any entity in a catalog.
#[derive(Clone, Copy, Debug)]
pub enum EntityRef<'a> {
    Card(&'a Card),
    Building(&'a Building),
    Onus(&'a Onus),
}

impl<'a> EntityRef<'a> {
    #[must_use]
    pub fn id(&self) -> ObjectId {
        match self {
            EntityRef::Card(c) => c.id,
            EntityRef::Building(b) => b.id,
            EntityRef::Onus(o) => o.id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Card(_) => EntityKind::Card,
            EntityRef::Building(_) => EntityKind::Building,
            EntityRef::Onus(_) => EntityKind::Onus,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        match self {
            EntityRef::Card(c) => &c.name,
            EntityRef::Building(b) => &b.name,
            EntityRef::Onus(o) => &o.name,
        }
    }

    #[must_use]
    pub fn tier(&self) -> u8 {
        match self {
            EntityRef::Card(c) => c.tier,
            EntityRef::Building(b) => b.tier,
            EntityRef::Onus(o) => o.tier,
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            EntityRef::Card(c) => c.value,
            EntityRef::Building(b) => b.value,
            EntityRef::Onus(o) => o.value,
        }
    }
}

impl Valued for EntityRef<'_> {
    fn profits(&self) -> Option<&QuantitySet> {
        match self {
            EntityRef::Card(c) => c.profits(),
            EntityRef::Building(b) => b.profits(),
            EntityRef::Onus(o) => o.profits(),
        }
    }

    fn bonus(&self) -> Option<&QuantitySet> {
        match self {
            EntityRef::Card(c) => c.bonus(),
            EntityRef::Building(b) => b.bonus(),
            EntityRef::Onus(o) => o.bonus(),
        }
    }

    fn tax(&self) -> Option<&QuantitySet> {
        match self {
            EntityRef::Card(c) => c.tax(),
            EntityRef::Building(b) => b.tax(),
            EntityRef::Onus(o) => o.tax(),
        }
    }

    fn cost(&self) -> &Cost {
        match self {
            EntityRef::Card(c) => c.cost(),
            EntityRef::Building(b) => b.cost(),
            EntityRef::Onus(o) => o.cost(),
        }
    }
}
