//! Shipped table integration tests.
//!
//! These tests author the full tables the binary writes and check the
//! invariants a consumer relies on.

use std::collections::HashSet;

use hive_tables::balance::audit;
use hive_tables::core::{DataError, GeneratorConfig, ObjectId};
use hive_tables::entities::{Deck, EntityKind};
use hive_tables::resources::{QuantityKey, ValueTable};
use hive_tables::tables::{build_catalog, build_catalog_with};

/// Ids form the contiguous range 1..=N in authoring order.
#[test]
fn test_ids_contiguous_from_one() {
    let catalog = build_catalog(GeneratorConfig::default()).unwrap();

    let ids: Vec<u32> = catalog.iter().map(|e| e.id().raw()).collect();
    let expected: Vec<u32> = (1..=catalog.len() as u32).collect();
    assert_eq!(ids, expected);

    let unique: HashSet<ObjectId> = catalog.iter().map(|e| e.id()).collect();
    assert_eq!(unique.len(), catalog.len());
}

/// Buildings are authored first, then cards, then onus tiles.
#[test]
fn test_authoring_order() {
    let catalog = build_catalog(GeneratorConfig::default()).unwrap();
    let kinds: Vec<EntityKind> = catalog.iter().map(|e| e.kind()).collect();

    let first_card = kinds.iter().position(|k| *k == EntityKind::Card).unwrap();
    let first_onus = kinds.iter().position(|k| *k == EntityKind::Onus).unwrap();

    assert!(kinds[..first_card].iter().all(|k| *k == EntityKind::Building));
    assert!(kinds[first_card..first_onus].iter().all(|k| *k == EntityKind::Card));
    assert!(kinds[first_onus..].iter().all(|k| *k == EntityKind::Onus));
}

/// Two runs start their own sequences.
#[test]
fn test_runs_do_not_share_ids() {
    let a = build_catalog(GeneratorConfig::default()).unwrap();
    let b = build_catalog(GeneratorConfig::default()).unwrap();

    assert_eq!(a.cards()[0].id, b.cards()[0].id);
    assert_eq!(a.buildings()[0].id, ObjectId(1));
}

/// Board buildings are singletons already in play.
#[test]
fn test_board_buildings_have_no_supply() {
    let catalog = build_catalog(GeneratorConfig::default()).unwrap();

    for building in catalog.buildings().iter().filter(|b| b.tier == 1 && b.cost.is_free()) {
        assert_eq!(building.amount, 0, "{}", building.name);
    }

    let hive = catalog.find_by_name("Bee Hive").unwrap();
    match hive {
        hive_tables::entities::EntityRef::Building(b) => assert_eq!(b.amount, 4),
        other => panic!("expected building, got {:?}", other.kind()),
    }
}

/// The hand and market tables split the card table.
#[test]
fn test_hand_and_market_partition_cards() {
    let catalog = build_catalog(GeneratorConfig::default()).unwrap();

    let hand = catalog.cards_in(Deck::Hand).count();
    let market = catalog.cards_in(Deck::Market).count();

    assert!(hand > 0);
    assert!(market > 0);
    assert_eq!(hand + market, catalog.cards().len());
}

/// Every shipped value is finite.
#[test]
fn test_values_are_finite() {
    let catalog = build_catalog(GeneratorConfig::default()).unwrap();
    assert!(catalog.iter().all(|e| e.value().is_finite()));
}

/// The shipped tables sit inside their tier brackets.
#[test]
fn test_shipped_tables_pass_audit() {
    let catalog = build_catalog(GeneratorConfig::default()).unwrap();
    let warnings = audit(&catalog).unwrap();

    assert!(warnings.is_empty(), "{warnings:#?}");
}

/// A missing unit value stops the run instead of producing NaN.
#[test]
fn test_missing_unit_value_fails_fast() {
    let values = ValueTable::standard().without(QuantityKey::Larvae);
    let result = build_catalog_with(GeneratorConfig::default(), values);

    assert!(matches!(
        result,
        Err(DataError::UnknownKey {
            key: QuantityKey::Larvae
        })
    ));
}
