//! Run configuration.
//!
//! A generation run is configured by a single `GeneratorConfig`. The
//! binary uses the defaults; tests and other callers adjust fields with
//! the builder methods.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::balance::ValueFormula;
use crate::render::TokenStyle;
use crate::resources::KeyMode;

/// Weight applied to a scalar card cost when computing value.
pub const DEFAULT_SCALAR_COST_WEIGHT: f64 = 0.33;

/// Copies printed of a building outside the board-placed tier.
pub const DEFAULT_BUILDING_SUPPLY: u32 = 4;

/// Width of each tier's expected cost band.
pub const DEFAULT_TIER_BAND: f64 = 4.0;

/// Configuration for one generation run.
///
/// ## Example
///
/// ```
/// use hive_tables::core::GeneratorConfig;
/// use hive_tables::resources::KeyMode;
///
/// let config = GeneratorConfig::default()
///     .with_output_dir("target/tables")
///     .compact()
///     .with_key_mode(KeyMode::ZeroFill);
///
/// assert!(!config.pretty);
/// assert_eq!(config.output_dir.to_str(), Some("target/tables"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory every table file is written into.
    pub output_dir: PathBuf,

    /// Pretty-print with 4-space indentation.
    pub pretty: bool,

    /// How keys missing from an authored quantity set are filled.
    pub key_mode: KeyMode,

    /// How quantity sets are stringified.
    pub token_style: TokenStyle,

    /// Which balance formula values entities.
    pub formula: ValueFormula,

    /// Weight applied to a scalar card cost.
    pub scalar_cost_weight: f64,

    /// Default copy count for buildings that are not board-placed.
    pub building_supply: u32,

    /// Width of each tier's expected cost band in the tier audit.
    pub tier_band: f64,
}

impl GeneratorConfig {
    /// Set the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Emit single-line JSON.
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Set the key fill mode.
    #[must_use]
    pub fn with_key_mode(mut self, mode: KeyMode) -> Self {
        self.key_mode = mode;
        self
    }

    /// Set the token style.
    #[must_use]
    pub fn with_token_style(mut self, style: TokenStyle) -> Self {
        self.token_style = style;
        self
    }

    /// Set the value formula.
    #[must_use]
    pub fn with_formula(mut self, formula: ValueFormula) -> Self {
        self.formula = formula;
        self
    }

    /// Set the scalar cost weight.
    #[must_use]
    pub fn with_scalar_cost_weight(mut self, weight: f64) -> Self {
        self.scalar_cost_weight = weight;
        self
    }

    /// Set the default building supply.
    #[must_use]
    pub fn with_building_supply(mut self, supply: u32) -> Self {
        self.building_supply = supply;
        self
    }

    /// Set the tier band width.
    #[must_use]
    pub fn with_tier_band(mut self, band: f64) -> Self {
        self.tier_band = band;
        self
    }

    /// Full path for a file inside the output directory.
    #[must_use]
    pub fn destination(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("data"),
            pretty: true,
            key_mode: KeyMode::Unset,
            token_style: TokenStyle::Repeated,
            formula: ValueFormula::Balanced,
            scalar_cost_weight: DEFAULT_SCALAR_COST_WEIGHT,
            building_supply: DEFAULT_BUILDING_SUPPLY,
            tier_band: DEFAULT_TIER_BAND,
        }
    }
}
