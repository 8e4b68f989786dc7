//! # hive-tables
//!
//! Static data tables for the hive board/card game: cards, buildings and
//! onus tiles, each annotated with a balance value and display strings,
//! written as JSON for the game client and card renderer.
//!
//! ## Pipeline
//!
//! 1. **Definition tables** (`tables`) author every entity through an
//!    explicit spec builder per kind.
//! 2. **Resource model** (`resources`) supplies the key vocabulary, unit
//!    values and quantity sets those specs are made of.
//! 3. **Value calculator** (`balance`) scores each entity once, at
//!    construction, and audits tiers against cost brackets.
//! 4. **Symbol renderer** (`render`) stringifies quantity sets into tokens
//!    and later swaps tokens for glyphs.
//! 5. **Writer** (`output`) encodes each table and persists it through a
//!    `Sink`, reporting every destination independently.
//!
//! ## Design Principles
//!
//! - **Run-scoped state**: ids come from the `Catalog` of one run, never
//!   from a process-wide counter.
//! - **Fail fast on authoring mistakes**: a key with no unit value is an
//!   error, not a NaN in the output.
//! - **Single-pass glyphs**: longest token first, token boundaries
//!   respected, replaced text never rescanned.

pub mod core;
pub mod resources;
pub mod balance;
pub mod render;
pub mod entities;
pub mod tables;
pub mod output;

// Re-export commonly used types
pub use crate::core::{DataError, GeneratorConfig, IdSequence, ObjectId};

pub use crate::resources::{KeyMode, Namespace, QuantityKey, QuantitySet, ValueTable};

pub use crate::balance::{audit, BalanceWarning, ValueFormula, Valued, Valuer};

pub use crate::render::{GlyphTable, TokenStyle, EMPTY_MARKER};

pub use crate::entities::{
    Building, BuildingSpec, Card, CardSpec, Catalog, Cost, Deck, EntityKind, EntityRef, Onus,
    OnusSpec,
};

pub use crate::tables::build_catalog;

pub use crate::output::{export, ExportReport, FsSink, OutputTable, Sink};
