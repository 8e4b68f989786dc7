//! Onus tile table.

use crate::core::DataError;
use crate::entities::{Catalog, OnusSpec};
use crate::resources::QuantityKey::*;

pub fn author(catalog: &mut Catalog) -> Result<(), DataError> {
    catalog.add_onus(
        OnusSpec::new("Collapsed Wall")
            .with_flavor("Someone has to haul the rubble.")
            .with_tax([(Clay, 2), (Metal, 1)])
            .with_bonus([(Larvae, 1)]),
    )?;
    catalog.add_onus(
        OnusSpec::new("Rusted Machinery")
            .with_tax([(Metal, 2)])
            .with_bonus([(DrawCard, 1)]),
    )?;
    catalog.add_onus(
        OnusSpec::new("Unbloodied Altar")
            .with_tax([(Larvae, 1)])
            .with_bonus([(Clarity, 1)]),
    )?;
    catalog.add_onus(
        OnusSpec::new("Greedy Bureaucrats")
            .with_tax([(Honey, 2)])
            .with_bonus([(PlaceMeeple, 1)]),
    )?;
    catalog.add_onus(
        OnusSpec::new("Flooded Tunnel")
            .with_flavor("Bail, dig, shore it up.")
            .with_tax([(Worker, 1), (Clay, 1), (Metal, 1)])
            .with_bonus([(Strong, 1)]),
    )?;
    catalog.add_onus(
        OnusSpec::new("Rot")
            .with_text("Discard two cards to clear.")
            .with_tax([(DiscardCard, 2)])
            .with_bonus([(Clay, 1)]),
    )?;
    catalog.add_onus(
        OnusSpec::new("Tyrant Mantis")
            .with_tier(2)
            .with_flavor("It was here first.")
            .with_tax([(Strong, 2), (Metal, 2)])
            .with_bonus([(Clarity, 1), (Explore, 1)]),
    )?;

    Ok(())
}
