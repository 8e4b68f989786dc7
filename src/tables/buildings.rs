//! Building table.

use crate::core::DataError;
use crate::entities::{BuildingSpec, Catalog};
use crate::resources::QuantityKey::*;

pub fn author(catalog: &mut Catalog) -> Result<(), DataError> {
    // Tier 1: one of each starts on the board.
    catalog.add_building(
        BuildingSpec::new("Mud Pit")
            .with_tier(1)
            .with_flavor("Muck about.")
            .with_profits([(Clay, 2)]),
    )?;
    catalog.add_building(
        BuildingSpec::new("Mine")
            .with_tier(1)
            .with_flavor("Strike the Earth.")
            .with_profits([(Metal, 1)]),
    )?;
    // a great pollen making plant
    catalog.add_building(
        BuildingSpec::new("Hellebore Field")
            .with_tier(1)
            .with_flavor("Sweet blooms, bitter roots.")
            .with_profits([(Honey, 1)]),
    )?;
    catalog.add_building(
        BuildingSpec::new("Hatchery")
            .with_tier(1)
            .with_flavor("Little bug, little bug.")
            .with_profits([(Larvae, 1)]),
    )?;

    catalog.add_building(
        BuildingSpec::new("Larvae Chambers")
            .with_tier(2)
            .with_text("_production_x3: _larvae_x1.")
            .with_flavor("Fresh chitin for our Lord.")
            .with_defence(2)
            .with_cost([(Clay, 2), (Metal, 1)]),
    )?;
    catalog.add_building(
        BuildingSpec::new("Wasp Altar")
            .with_tier(2)
            .with_text(
                "_production_x2, sacrifice an unplayed bug: Reveal the top card of the \
                 central market, you may use its abilities this turn.",
            )
            .with_flavor("SPIKE! SPIKE! SPIKE!")
            .with_defence(2)
            .with_cost([(Clay, 2), (Honey, 1)]),
    )?;
    catalog.add_building(
        BuildingSpec::new("Shrine")
            .with_tier(2)
            .with_text("+1 hand size.\n_honey_x1: Draw, discard.")
            .with_flavor("Instability underpins all.")
            .with_defence(2)
            .with_cost([(Clay, 2), (Honey, 1), (Larvae, 1)])
            .with_profits([(Clarity, 1)]),
    )?;
    catalog.add_building(
        BuildingSpec::new("Bee Hive")
            .with_tier(2)
            .with_text("_production_x2: _honey_x1.")
            .with_flavor("Sweeting bites for later.")
            .with_defence(1)
            .with_cost([(Larvae, 2)]),
    )?;
    catalog.add_building(
        BuildingSpec::new("Embassy")
            .with_tier(2)
            .with_text("_production_x2: Swap a card in your market with any other market.")
            .with_flavor("Diplomatic relations are good, for now.")
            .with_defence(3)
            .with_cost([(Clay, 2), (Honey, 3)]),
    )?;
    catalog.add_building(
        BuildingSpec::new("Market")
            .with_tier(2)
            .with_text(
                "+2 Market Slots.\n_production_x2, _honey_x1: Swap a card in your market \
                 with the central market.",
            )
            .with_flavor("Buy low, sell high.")
            .with_defence(2)
            .with_cost([(Clay, 3), (Honey, 1)]),
    )?;

    catalog.add_building(
        BuildingSpec::new("Administration")
            .with_tier(3)
            .with_text(
                "_production costs for buildings directly under this are reduced by 1 \
                 (not below _production_x1).",
            )
            .with_flavor("Efficiency is key.")
            .with_defence(2)
            .with_cost([(Clay, 4), (Honey, 3)]),
    )?;
    catalog.add_building(
        BuildingSpec::new("Palace")
            .with_tier(3)
            .with_text(
                "+1_defence for buildings under this.\n+1_combatpower, +1_production for all your bugs.",
            )
            .with_flavor("Long live the Queen.")
            .with_defence(2)
            .with_cost([(Clay, 3), (Metal, 2), (Honey, 1)])
            .with_amount(1),
    )?;
    catalog.add_building(
        BuildingSpec::new("Pantheon")
            .with_tier(3)
            .with_text("+1 Hand Size\n_production_x2: Draw a card.")
            .with_flavor("Let him know your love.")
            .with_defence(2)
            .with_cost([(Clay, 4), (Honey, 3)])
            .with_amount(1),
    )?;

    catalog.add_building(
        BuildingSpec::new("Factory")
            .with_tier(4)
            .with_text("_x2 yield for _clay and _honey from buildings under this.")
            .with_flavor("Gyokai!")
            .with_defence(2)
            .with_cost([(Clay, 6), (Honey, 4)]),
    )?;
    catalog.add_building(
        BuildingSpec::new("Lady's Abode")
            .with_tier(5)
            .with_text("Roll a Die:\n_d1 _d2: _clay_x2\n_d3 _d4: _honey_x1\n_d5 _d6: _larvae_x1")
            .with_flavor("Lovely.")
            .with_defence(3)
            .with_cost([(Clay, 6), (Honey, 4), (Larvae, 1)])
            .with_amount(1),
    )?;

    Ok(())
}
