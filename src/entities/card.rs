//! Bug cards.
//!
//! A card is authored as a [`CardSpec`] and turned into an immutable
//! [`Card`] by the catalog, which assigns the id and computes the value
//! and display strings.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::catalog::BuildContext;
use super::cost::{partial, Cost, CostSpec, Partial};
use super::EntityKind;
use crate::balance::Valued;
use crate::core::{DataError, ObjectId};
use crate::render::{compose_outcome, stringify, stringify_cost, EMPTY_MARKER};
use crate::resources::{Namespace, QuantityKey, QuantitySet};

/// Which pile a card starts in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Deck {
    /// Dealt to every player at the start.
    Hand,
    /// Bought from the central market.
    #[default]
    Market,
}

/// Authored card fields with their defaults.
///
/// ## Example
///
/// ```
/// use hive_tables::entities::{CardSpec, Deck};
/// use hive_tables::resources::QuantityKey::*;
///
/// let spec = CardSpec::new("Worker Bee")
///     .with_power(1, 1)
///     .with_cost([(Larvae, 1), (Honey, 2)])
///     .with_type(Worker)
///     .with_type(Flying)
///     .in_hand();
///
/// assert_eq!(spec.tier, 1);
/// assert_eq!(spec.deck, Deck::Hand);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CardSpec {
    pub name: String,
    /// Default 1.
    pub tier: u8,
    pub card_text: String,
    pub flavor_text: String,
    pub production_power: u32,
    pub combat_power: u32,
    pub cost: CostSpec,
    pub profits: Option<Partial>,
    /// Bug-type tags in authoring order; the first two are surfaced.
    pub types: SmallVec<[QuantityKey; 2]>,
    pub deck: Deck,
}

impl CardSpec {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tier: 1,
            card_text: String::new(),
            flavor_text: String::new(),
            production_power: 0,
            combat_power: 0,
            cost: CostSpec::None,
            profits: None,
            types: SmallVec::new(),
            deck: Deck::Market,
        }
    }

    #[must_use]
    pub fn with_tier(mut self, tier: u8) -> Self {
        self.tier = tier;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.card_text = text.into();
        self
    }

    #[must_use]
    pub fn with_flavor(mut self, text: impl Into<String>) -> Self {
        self.flavor_text = text.into();
        self
    }

    /// Set production and combat power.
    #[must_use]
    pub fn with_power(mut self, production: u32, combat: u32) -> Self {
        self.production_power = production;
        self.combat_power = combat;
        self
    }

    /// Cost as a bundle of keys.
    #[must_use]
    pub fn with_cost<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (QuantityKey, u32)>,
    {
        self.cost = CostSpec::Set(partial(pairs));
        self
    }

    /// Cost as a single number.
    #[must_use]
    pub fn with_scalar_cost(mut self, cost: u32) -> Self {
        self.cost = CostSpec::Scalar(cost);
        self
    }

    #[must_use]
    pub fn with_profits<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (QuantityKey, u32)>,
    {
        self.profits = Some(partial(pairs));
        self
    }

    /// Append a bug-type tag.
    #[must_use]
    pub fn with_type(mut self, key: QuantityKey) -> Self {
        self.types.push(key);
        self
    }

    /// Start the card in the hand instead of the market.
    #[must_use]
    pub fn in_hand(mut self) -> Self {
        self.deck = Deck::Hand;
        self
    }
}

/// A finished card record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Card {
    #[serde(rename = "objectId")]
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub tier: u8,
    pub name: String,
    pub card_text: String,
    pub flavor_text: String,
    pub production_power: u32,
    pub combat_power: u32,
    pub cost: Cost,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profits: Option<QuantitySet>,
    pub types: QuantitySet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_type: Option<QuantityKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_type: Option<QuantityKey>,
    pub deck: Deck,
    pub value: f64,
    pub cost_str: String,
    pub profits_str: String,
    pub outcome_str: String,
}

impl Card {
    pub(crate) fn build(
        id: ObjectId,
        spec: CardSpec,
        ctx: &BuildContext<'_>,
    ) -> Result<Self, DataError> {
        let mut types = QuantitySet::empty();
        for key in &spec.types {
            if key.namespace() != Namespace::BugType {
                return Err(DataError::NotABugType {
                    key: *key,
                    entity: spec.name,
                });
            }
            types.set(*key, types.count(*key) + 1);
        }

        let cost = spec.cost.resolve(ctx.key_mode);
        let profits = spec.profits.map(|p| ctx.set(&p));

        let cost_str = stringify_cost(&cost, ctx.token_style);
        let profits_str = profits
            .as_ref()
            .map_or_else(|| EMPTY_MARKER.to_string(), |p| stringify(p, ctx.token_style));
        let shown_cost = (!cost.is_free()).then_some(cost_str.as_str());
        let outcome_str = compose_outcome(shown_cost, &profits_str);

        let mut card = Self {
            id,
            kind: EntityKind::Card,
            tier: spec.tier,
            name: spec.name,
            card_text: spec.card_text,
            flavor_text: spec.flavor_text,
            production_power: spec.production_power,
            combat_power: spec.combat_power,
            cost,
            profits,
            types,
            primary_type: spec.types.first().copied(),
            secondary_type: spec.types.get(1).copied(),
            deck: spec.deck,
            value: 0.0,
            cost_str,
            profits_str,
            outcome_str,
        };
        card.value = ctx.valuer.value(&card)?;
        Ok(card)
    }
}

impl Valued for Card {
    fn profits(&self) -> Option<&QuantitySet> {
        self.profits.as_ref()
    }

    fn cost(&self) -> &Cost {
        &self.cost
    }
}
