//! Tier audit.
//!
//! A tier names the cost bracket an entity is meant to sit in. With a band
//! width `w`, tier `t` expects its cost side (cost for cards and
//! buildings, tax for onus tiles) within `[(t-1)·w, t·w]`; tier 0 expects
//! nothing to pay. Entities outside their bracket are reported, never
//! rejected.

use crate::core::{DataError, ObjectId};
use crate::entities::{Catalog, EntityKind};

/// Which side of its bracket an entity fell on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deviation {
    Under,
    Over,
}

/// An entity whose cost side is outside its tier's bracket.
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceWarning {
    pub id: ObjectId,
    pub kind: EntityKind,
    pub name: String,
    pub tier: u8,
    pub cost_value: f64,
    pub expected: (f64, f64),
    pub deviation: Deviation,
}

impl std::fmt::Display for BalanceWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = match self.deviation {
            Deviation::Under => "below",
            Deviation::Over => "above",
        };
        write!(
            f,
            "{:?} '{}' (tier {}) costs {:.2}, {side} expected {:.2}..={:.2}",
            self.kind, self.name, self.tier, self.cost_value, self.expected.0, self.expected.1
        )
    }
}

/// Expected cost bracket for a tier.
#[must_use]
pub fn tier_bracket(tier: u8, band: f64) -> (f64, f64) {
    let t = f64::from(tier);
    ((t - 1.0).max(0.0) * band, t * band)
}

/// Check every entity in the catalog against its tier bracket.
pub fn audit(catalog: &Catalog) -> Result<Vec<BalanceWarning>, DataError> {
    let valuer = catalog.valuer();
    let band = catalog.config().tier_band;
    let mut warnings = Vec::new();

    for entity in catalog.iter() {
        let cost_value = valuer.breakdown(&entity)?.costs;
        let (low, high) = tier_bracket(entity.tier(), band);

        let deviation = if cost_value < low {
            Deviation::Under
        } else if cost_value > high {
            Deviation::Over
        } else {
            continue;
        };

        warnings.push(BalanceWarning {
            id: entity.id(),
            kind: entity.kind(),
            name: entity.name().to_string(),
            tier: entity.tier(),
            cost_value,
            expected: (low, high),
            deviation,
        });
    }

    Ok(warnings)
}
