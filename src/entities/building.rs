//! Buildings.
//!
//! Tier-1 buildings are placed on the board at setup, one of each, so
//! their printed supply defaults to zero. Other tiers default to the
//! configured supply.

use serde::Serialize;

use super::catalog::BuildContext;
use super::cost::{partial, Cost, CostSpec, Partial};
use super::EntityKind;
use crate::balance::Valued;
use crate::core::{DataError, ObjectId};
use crate::render::{compose_outcome, stringify, stringify_cost};
use crate::resources::{QuantityKey, QuantitySet};

/// Tier whose buildings start on the board.
pub const BOARD_TIER: u8 = 1;

/// Authored building fields with their defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildingSpec {
    pub name: String,
    /// Default 0.
    pub tier: u8,
    pub card_text: String,
    pub flavor_text: String,
    pub defence: u32,
    pub cost: CostSpec,
    pub profits: Partial,
    /// `None` picks the tier default.
    pub amount: Option<u32>,
}

impl BuildingSpec {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tier: 0,
            card_text: String::new(),
            flavor_text: String::new(),
            defence: 0,
            cost: CostSpec::None,
            profits: Partial::new(),
            amount: None,
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

    #[must_use]
    pub fn with_defence(mut self, defence: u32) -> Self {
        self.defence = defence;
        self
    }

    #[must_use]
    pub fn with_cost<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (QuantityKey, u32)>,
    {
        self.cost = CostSpec::Set(partial(pairs));
        self
    }

    #[must_use]
    pub fn with_profits<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (QuantityKey, u32)>,
    {
        self.profits = partial(pairs);
        self
    }

    /// Override the printed copy count.
    #[must_use]
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = Some(amount);
        self
    }
}

/// A finished building record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Building {
    #[serde(rename = "objectId")]
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub tier: u8,
    pub name: String,
    pub card_text: String,
    pub flavor_text: String,
    pub defence: u32,
    pub cost: Cost,
    pub profits: QuantitySet,
    pub amount: u32,
    pub value: f64,
    pub cost_str: String,
    pub profits_str: String,
    pub outcome_str: String,
}

impl Building {
    pub(crate) fn build(
        id: ObjectId,
        spec: BuildingSpec,
        ctx: &BuildContext<'_>,
    ) -> Result<Self, DataError> {
        let amount = spec.amount.unwrap_or(if spec.tier == BOARD_TIER {
            0
        } else {
            ctx.building_supply
        });

        let cost = spec.cost.resolve(ctx.key_mode);
        let profits = ctx.set(&spec.profits);

        let cost_str = stringify_cost(&cost, ctx.token_style);
        let profits_str = stringify(&profits, ctx.token_style);
        let shown_cost = (!cost.is_free()).then_some(cost_str.as_str());
        let outcome_str = compose_outcome(shown_cost, &profits_str);

        let mut building = Self {
            id,
            kind: EntityKind::Building,
            tier: spec.tier,
            name: spec.name,
            card_text: spec.card_text,
            flavor_text: spec.flavor_text,
            defence: spec.defence,
            cost,
            profits,
            amount,
            value: 0.0,
            cost_str,
            profits_str,
            outcome_str,
        };
        building.value = ctx.valuer.value(&building)?;
        Ok(building)
    }
}

impl Valued for Building {
    fn profits(&self) -> Option<&QuantitySet> {
        Some(&self.profits)
    }

    fn cost(&self) -> &Cost {
        &self.cost
    }
}
