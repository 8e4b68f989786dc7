//! Balance value calculation.
//!
//! An entity's value is a designer-facing scalar with no gameplay effect:
//!
//! ```text
//! value = Σ profits + Σ bonus - Σ |tax| - cost
//! cost  = Σ |cost set|            when the cost is a quantity set
//!       = scalar * weight         when the cost is a single number
//!       = 0                       when there is no cost
//! ```
//!
//! Each Σ term is `unit_value(key) * count(key)`. Costs and taxes are
//! subtracted by magnitude, so an action stored with a negative unit value
//! still lowers the score when it appears on the cost side.

use serde::{Deserialize, Serialize};

use crate::core::DataError;
use crate::entities::Cost;
use crate::resources::{QuantitySet, ValueTable};

/// Which balance formula to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormula {
    /// Costs and taxes subtracted by magnitude, scalar costs weighted.
    Balanced,
    /// Earlier signed variant: costs and taxes subtracted as stored,
    /// scalar costs ignored. Only for reproducing old output.
    Legacy,
}

/// Anything that can be valued.
///
/// Every quantity set defaults to absent; implementors override the
/// ones they carry.
pub trait Valued {
    fn profits(&self) -> Option<&QuantitySet> {
        None
    }

    fn bonus(&self) -> Option<&QuantitySet> {
        None
    }

    fn tax(&self) -> Option<&QuantitySet> {
        None
    }

    fn cost(&self) -> &Cost;
}

/// Value split into what an entity yields and what it costs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValueBreakdown {
    /// Profits plus bonus.
    pub gains: f64,
    /// Tax plus cost, as subtracted by the active formula.
    pub costs: f64,
}

impl ValueBreakdown {
    /// The balance value.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.gains - self.costs
    }
}

/// Values entities against a unit-value table.
///
/// ## Example
///
/// ```
/// use hive_tables::balance::{ValueFormula, Valuer};
/// use hive_tables::resources::{QuantityKey, QuantitySet, ValueTable};
///
/// let table = ValueTable::standard();
/// let valuer = Valuer::new(&table, ValueFormula::Balanced, 0.33);
///
/// let tax = QuantitySet::empty()
///     .with(QuantityKey::Worker, 1)
///     .with(QuantityKey::Clay, 1)
///     .with(QuantityKey::Metal, 1);
/// assert_eq!(valuer.magnitude(&tax).unwrap(), 3.5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Valuer<'a> {
    table: &'a ValueTable,
    formula: ValueFormula,
    scalar_cost_weight: f64,
}

impl<'a> Valuer<'a> {
    pub fn new(table: &'a ValueTable, formula: ValueFormula, scalar_cost_weight: f64) -> Self {
        Self {
            table,
            formula,
            scalar_cost_weight,
        }
    }

    /// Signed sum of `unit_value * count` over a set.
    ///
    /// Zero and unset slots are skipped, so they never need a table entry.
    pub fn sum(&self, set: &QuantitySet) -> Result<f64, DataError> {
        self.fold(set, |v| v)
    }

    /// Sum of `|unit_value * count|` over a set.
    pub fn magnitude(&self, set: &QuantitySet) -> Result<f64, DataError> {
        self.fold(set, f64::abs)
    }

    fn fold(&self, set: &QuantitySet, term: impl Fn(f64) -> f64) -> Result<f64, DataError> {
        let mut total = 0.0;
        for (key, count) in set.defined().filter(|&(_, c)| c > 0) {
            total += term(self.table.unit_value(key)? * f64::from(count));
        }
        Ok(total)
    }

    /// Value of the cost side alone, as the active formula subtracts it.
    pub fn cost_value(&self, cost: &Cost) -> Result<f64, DataError> {
        match (self.formula, cost) {
            (_, Cost::None) => Ok(0.0),
            (ValueFormula::Balanced, Cost::Set(set)) => self.magnitude(set),
            (ValueFormula::Legacy, Cost::Set(set)) => self.sum(set),
            (ValueFormula::Balanced, Cost::Scalar(n)) => Ok(f64::from(*n) * self.scalar_cost_weight),
            (ValueFormula::Legacy, Cost::Scalar(_)) => Ok(0.0),
        }
    }

    /// Gains and costs of an entity.
    pub fn breakdown(&self, source: &impl Valued) -> Result<ValueBreakdown, DataError> {
        let mut gains = 0.0;
        for set in [source.profits(), source.bonus()].into_iter().flatten() {
            gains += self.sum(set)?;
        }

        let mut costs = self.cost_value(source.cost())?;
        if let Some(tax) = source.tax() {
            costs += match self.formula {
                ValueFormula::Balanced => self.magnitude(tax)?,
                ValueFormula::Legacy => self.sum(tax)?,
            };
        }

        Ok(ValueBreakdown { gains, costs })
    }

    /// Balance value of an entity.
    pub fn value(&self, source: &impl Valued) -> Result<f64, DataError> {
        Ok(self.breakdown(source)?.total())
    }
}
