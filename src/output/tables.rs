//! Output tables and record preparation.
//!
//! Each table is a JSON array of plain records. Records are serialized to
//! `serde_json::Value` first, then glyphs are applied to every string
//! value. Field names are never touched.

use serde::Serialize;
use serde_json::Value;

use crate::core::DataError;
use crate::entities::{Catalog, Deck};
use crate::render::GlyphTable;

/// One output destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputTable {
    Cards,
    Buildings,
    Onus,
    HandCards,
    MarketCards,
}

impl OutputTable {
    /// Every table, in write order.
    pub const ALL: [OutputTable; 5] = [
        OutputTable::Cards,
        OutputTable::Buildings,
        OutputTable::Onus,
        OutputTable::HandCards,
        OutputTable::MarketCards,
    ];

    /// File name inside the output directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            OutputTable::Cards => "card_data.json",
            OutputTable::Buildings => "building_data.json",
            OutputTable::Onus => "onus_data.json",
            OutputTable::HandCards => "hand_cards_data.json",
            OutputTable::MarketCards => "market_cards_data.json",
        }
    }
}

impl std::fmt::Display for OutputTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OutputTable::Cards => "cards",
            OutputTable::Buildings => "buildings",
            OutputTable::Onus => "onus",
            OutputTable::HandCards => "hand cards",
            OutputTable::MarketCards => "market cards",
        })
    }
}

fn to_records<'a, T, I>(table: OutputTable, items: I, glyphs: &GlyphTable) -> Result<Vec<Value>, DataError>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|item| {
            let mut value =
                serde_json::to_value(item).map_err(|source| DataError::Encode { table, source })?;
            glyphs.render_value(&mut value);
            Ok(value)
        })
        .collect()
}

/// Plain records for one table, glyphs applied.
pub fn records(
    catalog: &Catalog,
    table: OutputTable,
    glyphs: &GlyphTable,
) -> Result<Vec<Value>, DataError> {
    match table {
        OutputTable::Cards => to_records(table, catalog.cards(), glyphs),
        OutputTable::Buildings => to_records(table, catalog.buildings(), glyphs),
        OutputTable::Onus => to_records(table, catalog.onus(), glyphs),
        OutputTable::HandCards => to_records(table, catalog.cards_in(Deck::Hand), glyphs),
        OutputTable::MarketCards => to_records(table, catalog.cards_in(Deck::Market), glyphs),
    }
}

/// Encode records as a JSON array, 4-space indented when `pretty`.
pub fn encode(table: OutputTable, records: &[Value], pretty: bool) -> Result<String, DataError> {
    let encoded = if pretty {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records
            .serialize(&mut ser)
            .map(|()| String::from_utf8_lossy(&buf).into_owned())
    } else {
        serde_json::to_string(records)
    };

    encoded.map_err(|source| DataError::Encode { table, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeneratorConfig;
    use crate::entities::{BuildingSpec, CardSpec};
    use crate::resources::{QuantityKey::*, ValueTable};

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new(GeneratorConfig::default(), ValueTable::standard());
        catalog
            .add_card(
                CardSpec::new("Nest Tender")
                    .with_text("+1_combatpower when defending.")
                    .with_cost([(Larvae, 1), (Honey, 1)])
                    .in_hand(),
            )
            .unwrap();
        catalog.add_card(CardSpec::new("Wasp")).unwrap();
        catalog
            .add_building(BuildingSpec::new("Mine").with_tier(1).with_profits([(Metal, 1)]))
            .unwrap();
        catalog
    }

    #[test]
    fn test_file_names_distinct() {
        let mut names: Vec<_> = OutputTable::ALL.iter().map(|t| t.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), OutputTable::ALL.len());
    }

    #[test]
    fn test_card_record_fields() {
        let records = records(&catalog(), OutputTable::Cards, &GlyphTable::standard()).unwrap();
        assert_eq!(records.len(), 2);

        let card = &records[0];
        assert_eq!(card["objectId"], 1);
        assert_eq!(card["type"], "card");
        assert_eq!(card["tier"], 1);
        assert_eq!(card["card_text"], "+1⚔️ when defending.");
        assert_eq!(card["cost"]["larvae"], 1);
        assert_eq!(card["cost_str"], "🍯 🐛");
        assert_eq!(card["deck"], "hand");
        assert!(card.get("profits").is_none());
    }

    #[test]
    fn test_hand_and_market_are_card_subsets() {
        let catalog = catalog();
        let glyphs = GlyphTable::standard();

        let hand = records(&catalog, OutputTable::HandCards, &glyphs).unwrap();
        let market = records(&catalog, OutputTable::MarketCards, &glyphs).unwrap();

        assert_eq!(hand.len(), 1);
        assert_eq!(hand[0]["name"], "Nest Tender");
        assert_eq!(market.len(), 1);
        assert_eq!(market[0]["name"], "Wasp");
    }

    #[test]
    fn test_building_record() {
        let records = records(&catalog(), OutputTable::Buildings, &GlyphTable::standard()).unwrap();
        assert_eq!(records[0]["type"], "building");
        assert_eq!(records[0]["amount"], 0);
        assert_eq!(records[0]["profits_str"], "💿");
        assert_eq!(records[0]["cost"], Value::Null);
    }

    #[test]
    fn test_encode_pretty_uses_four_spaces() {
        let records = vec![serde_json::json!({ "name": "Mine" })];

        let pretty = encode(OutputTable::Buildings, &records, true).unwrap();
        assert_eq!(pretty, "[\n    {\n        \"name\": \"Mine\"\n    }\n]");

        let compact = encode(OutputTable::Buildings, &records, false).unwrap();
        assert_eq!(compact, r#"[{"name":"Mine"}]"#);
    }
}
