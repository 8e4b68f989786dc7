//! Balance scoring: entity values and the tier audit.
//!
//! Values are designer-facing metadata only. Nothing in the game reads
//! them; they exist to spot cards that are too cheap or too dear.

pub mod audit;
pub mod value;

pub use audit::{audit, tier_bracket, BalanceWarning, Deviation};
pub use value::{ValueBreakdown, ValueFormula, Valued, Valuer};
