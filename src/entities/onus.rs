//! Onus tiles: burdens a player clears by paying the tax, earning the
//! bonus.

use serde::Serialize;

use super::catalog::BuildContext;
use super::cost::{partial, Cost, Partial};
use super::EntityKind;
use crate::balance::Valued;
use crate::core::{DataError, ObjectId};
use crate::render::{compose_outcome, stringify};
use crate::resources::{QuantityKey, QuantitySet};

static NO_COST: Cost = Cost::None;

/// Authored onus fields with their defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct OnusSpec {
    pub name: String,
    /// Default 1. Names the cost bracket the tax should land in.
    pub tier: u8,
    pub card_text: String,
    pub flavor_text: String,
    pub tax: Partial,
    pub bonus: Partial,
}

impl OnusSpec {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tier: 1,
            card_text: String::new(),
            flavor_text: String::new(),
            tax: Partial::new(),
            bonus: Partial::new(),
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
    pub fn with_tax<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (QuantityKey, u32)>,
    {
        self.tax = partial(pairs);
        self
    }

    #[must_use]
    pub fn with_bonus<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (QuantityKey, u32)>,
    {
        self.bonus = partial(pairs);
        self
    }
}

/// A finished onus record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Onus {
    #[serde(rename = "objectId")]
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub tier: u8,
    pub name: String,
    pub card_text: String,
    pub flavor_text: String,
    pub tax: QuantitySet,
    pub bonus: QuantitySet,
    pub value: f64,
    pub tax_str: String,
    pub bonus_str: String,
    pub outcome_str: String,
}

impl Onus {
    pub(crate) fn build(
        id: ObjectId,
        spec: OnusSpec,
        ctx: &BuildContext<'_>,
    ) -> Result<Self, DataError> {
        let tax = ctx.set(&spec.tax);
        let bonus = ctx.set(&spec.bonus);

        let tax_str = stringify(&tax, ctx.token_style);
        let bonus_str = stringify(&bonus, ctx.token_style);
        let shown_cost = (!tax.is_empty()).then_some(tax_str.as_str());
        let outcome_str = compose_outcome(shown_cost, &bonus_str);

        let mut onus = Self {
            id,
            kind: EntityKind::Onus,
            tier: spec.tier,
            name: spec.name,
            card_text: spec.card_text,
            flavor_text: spec.flavor_text,
            tax,
            bonus,
            value: 0.0,
            tax_str,
            bonus_str,
            outcome_str,
        };
        onus.value = ctx.valuer.value(&onus)?;
        Ok(onus)
    }
}

impl Valued for Onus {
    fn bonus(&self) -> Option<&QuantitySet> {
        Some(&self.bonus)
    }

    fn tax(&self) -> Option<&QuantitySet> {
        Some(&self.tax)
    }

    fn cost(&self) -> &Cost {
        &NO_COST
    }
}
