//! Card table.
//!
//! Cards marked `in_hand` are dealt at setup; the rest go to the market.

use crate::core::DataError;
use crate::entities::{CardSpec, Catalog};
use crate::resources::QuantityKey::*;

pub fn author(catalog: &mut Catalog) -> Result<(), DataError> {
    catalog.add_card(
        CardSpec::new("Small Man")
            .with_flavor("Pathetic, unremarkable.")
            .with_power(2, 1)
            .with_cost([(Larvae, 1)])
            .with_type(Worker)
            .in_hand(),
    )?;
    catalog.add_card(
        CardSpec::new("Worm")
            .with_text("+1_clay when producing _clay")
            .with_flavor("Loam is love, loam is life.")
            .with_power(1, 0)
            .with_cost([(Larvae, 1)])
            .with_type(Worker)
            .in_hand(),
    )?;
    catalog.add_card(
        CardSpec::new("Nest Tender")
            .with_tier(2)
            .with_text("+1_combatpower when defending.\n+1_larvae when producing _larvae.")
            .with_flavor("My children are meant for more.")
            .with_power(1, 0)
            .with_cost([(Larvae, 1), (Honey, 1)])
            .with_type(Worker)
            .with_type(Smart),
    )?;
    catalog.add_card(
        CardSpec::new("Wasp")
            .with_tier(2)
            .with_text("Sacrifice an unplayed bug: add its stats to this until end of turn.")
            .with_flavor("STRIKE! STRIKE! STRIKE!")
            .with_power(1, 2)
            .with_cost([(Larvae, 1), (Clay, 1), (Honey, 1)])
            .with_type(Strong)
            .with_type(Flying),
    )?;
    catalog.add_card(
        CardSpec::new("Dragonfly")
            .with_tier(3)
            .with_text("Kill weakest defender: +1_honey.")
            .with_flavor("Eyes on every side.")
            .with_power(0, 3)
            .with_cost([(Larvae, 1), (Clay, 2), (Honey, 2)])
            .with_type(Flying)
            .with_type(Strong),
    )?;
    catalog.add_card(
        CardSpec::new("Police")
            .with_tier(2)
            .with_text("+1_combatpower when defending.")
            .with_flavor("Don't even think of breaking the law!")
            .with_power(1, 2)
            .with_cost([(Larvae, 1), (Clay, 2)])
            .with_type(Strong),
    )?;
    catalog.add_card(
        CardSpec::new("Flying Man")
            .with_tier(2)
            .with_text("Choose the raided resource when raiding with this.")
            .with_flavor("I see what you have, and what you are.")
            .with_power(2, 2)
            .with_cost([(Larvae, 1), (Clay, 2), (Honey, 1)])
            .with_type(Flying)
            .with_type(Smart),
    )?;
    catalog.add_card(
        CardSpec::new("Lady Bug")
            .with_tier(2)
            .with_text("Roll a die:\n_d1_d2_d3: +1_clay.\n_d4_d5: +1_honey.\n_d6: +1_larvae.")
            .with_power(1, 1)
            .with_cost([(Larvae, 1), (Honey, 2)])
            .with_type(Flying),
    )?;
    catalog.add_card(
        CardSpec::new("Worker Bee")
            .with_tier(2)
            .with_text("+1_honey when producing _honey.")
            .with_power(1, 1)
            .with_cost([(Larvae, 1), (Honey, 2)])
            .with_type(Worker)
            .with_type(Flying),
    )?;

    // Later cards are priced with a single number.
    catalog.add_card(
        CardSpec::new("Scout Moth")
            .with_text("When played: _explore.")
            .with_flavor("Drawn to the far lights.")
            .with_power(0, 1)
            .with_scalar_cost(3)
            .with_profits([(Explore, 1)])
            .with_type(Flying),
    )?;
    catalog.add_card(
        CardSpec::new("Dung Beetle")
            .with_text("When played: _trash_card.")
            .with_flavor("One bug's trash.")
            .with_power(2, 0)
            .with_scalar_cost(4)
            .with_profits([(TrashCard, 1)])
            .with_type(Worker)
            .with_type(Strong),
    )?;

    Ok(())
}
