//! The catalog: every entity authored during one generation run.
//!
//! The `Catalog` owns the run's id sequence, so ids are contiguous from 1
//! across all three kinds in authoring order. It also owns the unit-value
//! table and configuration every entity is built against.

use rustc_hash::FxHashMap;

use super::building::{Building, BuildingSpec};
use super::card::{Card, CardSpec, Deck};
use super::cost::Partial;
use super::onus::{Onus, OnusSpec};
use super::{EntityKind, EntityRef};
use crate::balance::Valuer;
use crate::core::{DataError, GeneratorConfig, IdSequence, ObjectId};
use crate::render::TokenStyle;
use crate::resources::{KeyMode, QuantitySet, ValueTable};

/// Settings an entity needs while it is being built.
#[derive(Clone, Copy, Debug)]
pub struct BuildContext<'a> {
    pub key_mode: KeyMode,
    pub token_style: TokenStyle,
    pub building_supply: u32,
    pub valuer: Valuer<'a>,
}

impl<'a> BuildContext<'a> {
    pub fn new(config: &GeneratorConfig, values: &'a ValueTable) -> Self {
        Self {
            key_mode: config.key_mode,
            token_style: config.token_style,
            building_supply: config.building_supply,
            valuer: Valuer::new(values, config.formula, config.scalar_cost_weight),
        }
    }

    /// Fill an authored list into a set per the run's key mode.
    #[must_use]
    pub fn set(&self, pairs: &Partial) -> QuantitySet {
        QuantitySet::from_partial(pairs.iter().copied(), self.key_mode)
    }
}

/// Entities of one run, in authoring order.
///
/// ## Example
///
/// ```
/// use hive_tables::core::{GeneratorConfig, ObjectId};
/// use hive_tables::entities::{Catalog, CardSpec, OnusSpec};
/// use hive_tables::resources::{QuantityKey::*, ValueTable};
///
/// let mut catalog = Catalog::new(GeneratorConfig::default(), ValueTable::standard());
///
/// let card = catalog.add_card(CardSpec::new("Worm").with_cost([(Larvae, 1)])).unwrap();
/// let onus = catalog.add_onus(OnusSpec::new("Rusted Machinery").with_tax([(Metal, 2)])).unwrap();
///
/// assert_eq!(card, ObjectId(1));
/// assert_eq!(onus, ObjectId(2));
/// assert_eq!(catalog.get(onus).unwrap().value(), -4.0);
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    config: GeneratorConfig,
    values: ValueTable,
    ids: IdSequence,
    cards: Vec<Card>,
    buildings: Vec<Building>,
    onus: Vec<Onus>,
    index: FxHashMap<ObjectId, (EntityKind, usize)>,
}

impl Catalog {
    /// Create an empty catalog with a fresh id sequence.
    #[must_use]
    pub fn new(config: GeneratorConfig, values: ValueTable) -> Self {
        Self {
            config,
            values,
            ids: IdSequence::new(),
            cards: Vec::new(),
            buildings: Vec::new(),
            onus: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Run configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Unit-value table.
    #[must_use]
    pub fn values(&self) -> &ValueTable {
        &self.values
    }

    /// A valuer over this catalog's table and formula.
    #[must_use]
    pub fn valuer(&self) -> Valuer<'_> {
        self.context().valuer
    }

    fn context(&self) -> BuildContext<'_> {
        BuildContext::new(&self.config, &self.values)
    }

    /// Build and register a card.
    pub fn add_card(&mut self, spec: CardSpec) -> Result<ObjectId, DataError> {
        let id = self.ids.peek();
        let card = Card::build(id, spec, &self.context())?;
        self.ids.next_id();
        tracing::debug!(%id, name = %card.name, value = card.value, "card authored");

        self.index.insert(id, (EntityKind::Card, self.cards.len()));
        self.cards.push(card);
        Ok(id)
    }

    /// Build and register a building.
    pub fn add_building(&mut self, spec: BuildingSpec) -> Result<ObjectId, DataError> {
        let id = self.ids.peek();
        let building = Building::build(id, spec, &self.context())?;
        self.ids.next_id();
        tracing::debug!(%id, name = %building.name, value = building.value, "building authored");

        self.index
            .insert(id, (EntityKind::Building, self.buildings.len()));
        self.buildings.push(building);
        Ok(id)
    }

    /// Build and register an onus tile.
    pub fn add_onus(&mut self, spec: OnusSpec) -> Result<ObjectId, DataError> {
        let id = self.ids.peek();
        let onus = Onus::build(id, spec, &self.context())?;
        self.ids.next_id();
        tracing::debug!(%id, name = %onus.name, value = onus.value, "onus authored");

        self.index.insert(id, (EntityKind::Onus, self.onus.len()));
        self.onus.push(onus);
        Ok(id)
    }

    /// Look up any entity by id.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<EntityRef<'_>> {
        let &(kind, pos) = self.index.get(&id)?;
        Some(match kind {
            EntityKind::Card => EntityRef::Card(&self.cards[pos]),
            EntityKind::Building => EntityRef::Building(&self.buildings[pos]),
            EntityKind::Onus => EntityRef::Onus(&self.onus[pos]),
        })
    }

    /// Check if an id is registered.
    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.index.contains_key(&id)
    }

    /// First entity with the given name, in authoring order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<EntityRef<'_>> {
        self.iter().find(|e| e.name() == name)
    }

    /// All cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// All buildings.
    #[must_use]
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// All onus tiles.
    #[must_use]
    pub fn onus(&self) -> &[Onus] {
        &self.onus
    }

    /// Cards that start in a given deck.
    pub fn cards_in(&self, deck: Deck) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.deck == deck)
    }

    /// Every entity in id (authoring) order.
    pub fn iter(&self) -> impl Iterator<Item = EntityRef<'_>> {
        let mut ids: Vec<ObjectId> = self.index.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter().filter_map(move |id| self.get(id))
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ARROW_TOKEN, EMPTY_MARKER};
    use crate::resources::QuantityKey::*;

    fn catalog() -> Catalog {
        Catalog::new(GeneratorConfig::default(), ValueTable::standard())
    }

    #[test]
    fn test_ids_contiguous_across_kinds() {
        let mut catalog = catalog();

        let a = catalog.add_building(BuildingSpec::new("Mud Pit")).unwrap();
        let b = catalog.add_card(CardSpec::new("Worm")).unwrap();
        let c = catalog.add_onus(OnusSpec::new("Collapsed Wall")).unwrap();

        assert_eq!([a, b, c], [ObjectId(1), ObjectId(2), ObjectId(3)]);
        assert_eq!(catalog.len(), 3);

        let order: Vec<_> = catalog.iter().map(|e| e.kind()).collect();
        assert_eq!(
            order,
            vec![EntityKind::Building, EntityKind::Card, EntityKind::Onus]
        );
    }

    #[test]
    fn test_profit_only_building() {
        let mut catalog = catalog();
        let id = catalog
            .add_building(BuildingSpec::new("Mud Pit").with_tier(1).with_profits([(Clay, 2)]))
            .unwrap();

        let building = &catalog.buildings()[0];
        assert_eq!(building.id, id);
        assert_eq!(building.value, 2.0);
        assert_eq!(building.cost_str, EMPTY_MARKER);
        assert_eq!(building.profits_str, "_clay _clay");
        assert_eq!(building.outcome_str, building.profits_str);
    }

    #[test]
    fn test_building_amount_defaults() {
        let mut catalog = Catalog::new(
            GeneratorConfig::default().with_building_supply(3),
            ValueTable::standard(),
        );
        catalog.add_building(BuildingSpec::new("Mine").with_tier(1)).unwrap();
        catalog.add_building(BuildingSpec::new("Shrine").with_tier(2)).unwrap();
        catalog
            .add_building(BuildingSpec::new("Palace").with_tier(3).with_amount(1))
            .unwrap();

        let amounts: Vec<u32> = catalog.buildings().iter().map(|b| b.amount).collect();
        assert_eq!(amounts, vec![0, 3, 1]);
    }

    #[test]
    fn test_card_outcome_and_types() {
        let mut catalog = catalog();
        catalog
            .add_card(
                CardSpec::new("Worker Bee")
                    .with_cost([(Larvae, 1), (Honey, 2)])
                    .with_profits([(Honey, 1)])
                    .with_type(Worker)
                    .with_type(Flying)
                    .with_type(Smart),
            )
            .unwrap();

        let card = &catalog.cards()[0];
        assert_eq!(card.cost_str, "_honey _honey _larvae");
        assert_eq!(card.outcome_str, "_honey _honey _larvae _arrow _honey");
        assert_eq!(card.primary_type, Some(Worker));
        assert_eq!(card.secondary_type, Some(Flying));
        assert_eq!(card.types.count(Smart), 1);
        // 2 - (3 + 4)
        assert_eq!(card.value, -5.0);
    }

    #[test]
    fn test_card_type_must_be_bug_type() {
        let mut catalog = catalog();
        let err = catalog
            .add_card(CardSpec::new("Odd").with_type(Clay))
            .unwrap_err();
        assert!(matches!(err, DataError::NotABugType { key: Clay, .. }));
    }

    #[test]
    fn test_unknown_key_aborts_entity() {
        let mut catalog = Catalog::new(
            GeneratorConfig::default(),
            ValueTable::standard().without(Clarity),
        );
        let result = catalog.add_onus(OnusSpec::new("Shrine").with_bonus([(Clarity, 1)]));

        assert!(matches!(result, Err(DataError::UnknownKey { key: Clarity })));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_failed_build_does_not_consume_id() {
        let mut catalog = catalog();
        let first = catalog.add_card(CardSpec::new("Worm")).unwrap();
        catalog
            .add_card(CardSpec::new("Odd").with_type(Clay))
            .unwrap_err();
        let second = catalog.add_onus(OnusSpec::new("Rot")).unwrap();

        assert_eq!([first, second], [ObjectId(1), ObjectId(2)]);
        let ids: Vec<u32> = catalog.iter().map(|e| e.id().raw()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_hand_market_split() {
        let mut catalog = catalog();
        catalog.add_card(CardSpec::new("Small Man").in_hand()).unwrap();
        catalog.add_card(CardSpec::new("Wasp")).unwrap();
        catalog.add_card(CardSpec::new("Worm").in_hand()).unwrap();

        let hand: Vec<&str> = catalog.cards_in(Deck::Hand).map(|c| c.name.as_str()).collect();
        let market: Vec<&str> = catalog.cards_in(Deck::Market).map(|c| c.name.as_str()).collect();

        assert_eq!(hand, vec!["Small Man", "Worm"]);
        assert_eq!(market, vec!["Wasp"]);
    }

    #[test]
    fn test_lookup() {
        let mut catalog = catalog();
        let id = catalog.add_onus(OnusSpec::new("Greedy Bureaucrats")).unwrap();

        assert!(catalog.contains(id));
        assert!(!catalog.contains(ObjectId(99)));
        assert_eq!(catalog.find_by_name("Greedy Bureaucrats").map(|e| e.id()), Some(id));
        assert!(catalog.find_by_name("Nobody").is_none());
    }

    #[test]
    fn test_zero_fill_counted_strings() {
        let config = GeneratorConfig::default()
            .with_key_mode(KeyMode::ZeroFill)
            .with_token_style(TokenStyle::Counted);
        let mut catalog = Catalog::new(config, ValueTable::standard());
        catalog
            .add_onus(OnusSpec::new("Collapsed Wall").with_tax([(Clay, 2)]))
            .unwrap();

        let onus = &catalog.onus()[0];
        assert!(onus.tax_str.starts_with("_clay_x2, _metal_x0"));
        assert_eq!(onus.value, -2.0);
    }

    #[test]
    fn test_zero_fill_counted_empty_cost() {
        let config = GeneratorConfig::default()
            .with_key_mode(KeyMode::ZeroFill)
            .with_token_style(TokenStyle::Counted);
        let mut catalog = Catalog::new(config, ValueTable::standard());
        catalog
            .add_building(BuildingSpec::new("Mud Pit").with_tier(1).with_profits([(Clay, 2)]))
            .unwrap();
        catalog
            .add_onus(OnusSpec::new("Lucky Find").with_bonus([(Honey, 1)]))
            .unwrap();

        let building = &catalog.buildings()[0];
        assert_eq!(building.cost_str, EMPTY_MARKER);
        assert!(building.profits_str.starts_with("_clay_x2, _metal_x0"));
        assert_eq!(building.outcome_str, building.profits_str);
        assert!(!building.outcome_str.contains(ARROW_TOKEN));

        let onus = &catalog.onus()[0];
        assert_eq!(onus.tax_str, EMPTY_MARKER);
        assert_eq!(onus.outcome_str, onus.bonus_str);
    }
}
