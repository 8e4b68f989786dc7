//! Token strings for quantity sets and outcomes.
//!
//! Two styles are supported:
//!
//! - `Repeated`: one `_<key>` token per unit, space separated
//!   (`_clay _clay _honey`). Explicit zeros and unset slots both vanish.
//! - `Counted`: one `_<key>_x<n>` entry per defined slot, comma separated
//!   (`_clay_x2, _honey_x1`). Explicit zeros render, unset slots do not.
//!
//! A set whose counts total zero renders as [`EMPTY_MARKER`] in either
//! style, never as an empty string or a list of `_x0` entries.

use serde::{Deserialize, Serialize};

use crate::core::DataError;
use crate::entities::Cost;
use crate::resources::{KeyMode, QuantityKey, QuantitySet};

/// Rendered in place of a set with nothing to show.
pub const EMPTY_MARKER: &str = "_none";

/// Separates cost from profit in an outcome string.
pub const ARROW_TOKEN: &str = "_arrow";

/// How a quantity set is turned into tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenStyle {
    Repeated,
    Counted,
}

/// Stringify a quantity set in vocabulary order.
///
/// ```
/// use hive_tables::render::{stringify, TokenStyle, EMPTY_MARKER};
/// use hive_tables::resources::{QuantityKey, QuantitySet};
///
/// let set = QuantitySet::empty().with(QuantityKey::Clay, 2);
/// assert_eq!(stringify(&set, TokenStyle::Repeated), "_clay _clay");
/// assert_eq!(stringify(&set, TokenStyle::Counted), "_clay_x2");
/// assert_eq!(stringify(&QuantitySet::empty(), TokenStyle::Repeated), EMPTY_MARKER);
/// ```
#[must_use]
pub fn stringify(set: &QuantitySet, style: TokenStyle) -> String {
    if set.is_empty() {
        return EMPTY_MARKER.to_string();
    }

    let parts: Vec<String> = match style {
        TokenStyle::Repeated => set
            .defined()
            .flat_map(|(key, count)| std::iter::repeat(key.token()).take(count as usize))
            .collect(),
        TokenStyle::Counted => set
            .defined()
            .map(|(key, count)| format!("{}_x{count}", key.token()))
            .collect(),
    };

    let separator = match style {
        TokenStyle::Repeated => " ",
        TokenStyle::Counted => ", ",
    };
    parts.join(separator)
}

/// Stringify an entity cost.
///
/// A scalar cost renders as its number; no cost renders as the marker.
#[must_use]
pub fn stringify_cost(cost: &Cost, style: TokenStyle) -> String {
    match cost {
        Cost::None => EMPTY_MARKER.to_string(),
        Cost::Set(set) => stringify(set, style),
        Cost::Scalar(0) => EMPTY_MARKER.to_string(),
        Cost::Scalar(n) => n.to_string(),
    }
}

/// Compose `<cost> _arrow <profit>`, or just the profit when there is no
/// cost to show.
///
/// Callers pass `None` when the cost is free (see [`Cost::is_free`] and
/// [`QuantitySet::is_empty`]).
#[must_use]
pub fn compose_outcome(cost: Option<&str>, profit: &str) -> String {
    match cost {
        Some(cost) => format!("{cost} {ARROW_TOKEN} {profit}"),
        None => profit.to_string(),
    }
}

/// Count `Repeated` tokens back into a set.
///
/// The empty marker (or a blank string) parses to an empty set.
pub fn parse_tokens(text: &str) -> Result<QuantitySet, DataError> {
    let mut set = QuantitySet::new(KeyMode::Unset);
    for token in text.split_whitespace().filter(|t| *t != EMPTY_MARKER) {
        let key = QuantityKey::from_token(token).ok_or_else(|| DataError::UnknownToken {
            token: token.to_string(),
        })?;
        set.set(key, set.count(key) + 1);
    }
    Ok(set)
}
