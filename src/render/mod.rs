//! Symbol rendering: token strings and glyph substitution.
//!
//! Entities keep their display strings in token form (`_clay _clay`).
//! Glyphs are applied only when records are prepared for output.

pub mod glyphs;
pub mod tokens;

pub use glyphs::GlyphTable;
pub use tokens::{
    compose_outcome, parse_tokens, stringify, stringify_cost, TokenStyle, ARROW_TOKEN,
    EMPTY_MARKER,
};
