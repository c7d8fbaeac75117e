//! `bf-render`: plain-text presentation of a round.
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`legend`] | Legend glyphs and the help text that explains them    |
//! | [`map`]    | Terrain maps, per-unit route overlays, summary lines  |
//!
//! Output is `String`s; where they go is the caller's business.

pub mod legend;
pub mod map;

#[cfg(test)]
mod tests;

pub use legend::help_text;
pub use map::{render_round, render_terrain, render_unit, unit_summary};
