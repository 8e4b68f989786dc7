//! Token-to-glyph substitution.
//!
//! Substitution is a single left-to-right pass. At each `_` the longest
//! token that matches wins, and a match only counts when it is not
//! immediately followed by a letter (so `_x` never eats the front of
//! `_xylem`, and `_production` is never split by a shorter rule). Replaced
//! text is never rescanned, and unknown tokens are left verbatim.

use serde_json::Value;

use crate::resources::QuantityKey;

use super::tokens::{ARROW_TOKEN, EMPTY_MARKER};

/// Ordered table of token → glyph rules.
///
/// ## Example
///
/// ```
/// use hive_tables::render::GlyphTable;
///
/// let glyphs = GlyphTable::standard();
/// assert_eq!(glyphs.render("_honey_x1: _d1 _d2"), "🍯×1: ⚀ ⚁");
/// assert_eq!(glyphs.render("_unknown"), "_unknown");
/// ```
#[derive(Clone, Debug, Default)]
pub struct GlyphTable {
    // Longest token first.
    rules: Vec<(String, String)>,
}

impl GlyphTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The glyph set used by the shipped tables.
    #[must_use]
    pub fn standard() -> Self {
        use QuantityKey::*;
        let keys = [
            (Honey, "🍯"),
            (Clay, "🪨"),
            (Metal, "💿"),
            (Clarity, "✨"),
            (Larvae, "🐛"),
            (DiscardCard, "🗑"),
            (PlaceMeeple, "♟"),
            (DrawCard, "🂠"),
            (TrashCard, "🔥"),
            (Explore, "🧭"),
            (Worker, "🐜"),
            (Smart, "🧠"),
            (Strong, "💪"),
            (Flying, "🪰"),
        ];

        let table = keys
            .into_iter()
            .fold(Self::new(), |t, (key, glyph)| t.with(key.token(), glyph));

        [
            ("_defence", "🛡"),
            ("_combatpower", "⚔️"),
            ("_production", "⚒️"),
            ("_x", "×"),
            ("_d1", "⚀"),
            ("_d2", "⚁"),
            ("_d3", "⚂"),
            ("_d4", "⚃"),
            ("_d5", "⚄"),
            ("_d6", "⚅"),
            (ARROW_TOKEN, "➜"),
            (EMPTY_MARKER, "∅"),
        ]
        .into_iter()
        .fold(table, |t, (token, glyph)| t.with(token, glyph))
    }

    /// Add or replace a rule (builder pattern).
    ///
    /// Tokens must start with `_`.
    #[must_use]
    pub fn with(mut self, token: impl Into<String>, glyph: impl Into<String>) -> Self {
        let token = token.into();
        debug_assert!(token.starts_with('_'), "glyph token must start with '_'");
        let glyph = glyph.into();

        match self.rules.iter_mut().find(|(t, _)| *t == token) {
            Some(rule) => rule.1 = glyph,
            None => {
                self.rules.push((token, glyph));
                self.rules
                    .sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
            }
        }
        self
    }

    /// Glyph for an exact token.
    #[must_use]
    pub fn glyph(&self, token: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, g)| g.as_str())
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Replace every known token in `text`.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(pos) = rest.find('_') {
            out.push_str(&rest[..pos]);
            rest = &rest[pos..];

            match self.longest_match(rest) {
                Some((token, glyph)) => {
                    out.push_str(glyph);
                    rest = &rest[token.len()..];
                }
                None => {
                    out.push('_');
                    rest = &rest[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }

    fn longest_match(&self, text: &str) -> Option<(&str, &str)> {
        self.rules
            .iter()
            .find(|(token, _)| {
                text.starts_with(token.as_str())
                    && !text[token.len()..]
                        .chars()
                        .next()
                        .is_some_and(|c| c.is_ascii_alphabetic())
            })
            .map(|(t, g)| (t.as_str(), g.as_str()))
    }

    /// Render every string inside a JSON value. Object keys are left alone.
    pub fn render_value(&self, value: &mut Value) {
        match value {
            Value::String(s) => *s = self.render(s),
            Value::Array(items) => items.iter_mut().for_each(|v| self.render_value(v)),
            Value::Object(map) => map.values_mut().for_each(|v| self.render_value(v)),
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_covers_every_key() {
        let glyphs = GlyphTable::standard();
        for key in QuantityKey::ALL {
            assert!(glyphs.glyph(&key.token()).is_some(), "no glyph for {key}");
        }
    }

    #[test]
    fn test_rules_sorted_longest_first() {
        let glyphs = GlyphTable::standard();
        let lens: Vec<usize> = glyphs.rules.iter().map(|(t, _)| t.len()).collect();
        assert!(lens.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_prefix_token_does_not_swallow_longer_token() {
        let glyphs = GlyphTable::new()
            .with("_p", "P")
            .with("_production", "⚒️");

        assert_eq!(glyphs.render("_production_x2"), "⚒️_x2");
        assert_eq!(glyphs.render("_p _p1"), "P P1");
    }

    #[test]
    fn test_token_boundary() {
        let glyphs = GlyphTable::standard();
        assert_eq!(glyphs.render("_xylem"), "_xylem");
        assert_eq!(glyphs.render("_x2"), "×2");
        assert_eq!(glyphs.render("card_text"), "card_text");
    }

    #[test]
    fn test_adjacent_tokens() {
        let glyphs = GlyphTable::standard();
        assert_eq!(glyphs.render("_d1_d2_d3: +1_clay."), "⚀⚁⚂: +1🪨.");
    }

    #[test]
    fn test_replacement_not_rescanned() {
        let glyphs = GlyphTable::new().with("_a", "_b").with("_b", "B");
        assert_eq!(glyphs.render("_a"), "_b");
    }

    #[test]
    fn test_with_replaces_existing_rule() {
        let glyphs = GlyphTable::standard().with("_x", "x");
        assert_eq!(glyphs.glyph("_x"), Some("x"));
        assert_eq!(glyphs.len(), GlyphTable::standard().len());
    }

    #[test]
    fn test_render_value_leaves_keys() {
        let glyphs = GlyphTable::standard();
        let mut value = serde_json::json!({
            "card_text": "_honey_x1",
            "nested": ["_clay", 3, null],
        });
        glyphs.render_value(&mut value);

        assert_eq!(value["card_text"], "🍯×1");
        assert_eq!(value["nested"][0], "🪨");
        assert_eq!(value["nested"][1], 3);
    }
}
