//! The hand-authored definition tables.
//!
//! Authoring order is buildings, cards, then onus tiles, which fixes the
//! object ids written to every output file.

pub mod buildings;
pub mod cards;
pub mod onus;

use crate::core::{DataError, GeneratorConfig};
use crate::entities::Catalog;
use crate::resources::ValueTable;

/// Author every table against the standard unit values.
pub fn build_catalog(config: GeneratorConfig) -> Result<Catalog, DataError> {
    build_catalog_with(config, ValueTable::standard())
}

/// Author every table against a given unit-value table.
pub fn build_catalog_with(config: GeneratorConfig, values: ValueTable) -> Result<Catalog, DataError> {
    let mut catalog = Catalog::new(config, values);

    buildings::author(&mut catalog)?;
    cards::author(&mut catalog)?;
    onus::author(&mut catalog)?;

    tracing::info!(
        cards = catalog.cards().len(),
        buildings = catalog.buildings().len(),
        onus = catalog.onus().len(),
        "tables authored"
    );
    Ok(catalog)
}
