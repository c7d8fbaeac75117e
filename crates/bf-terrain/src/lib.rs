//! `bf-terrain`: the battlefield grid and where units start and end.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`grid`]    | `Terrain`, `TerrainGrid` and its random generator        |
//! | [`sampler`] | `Endpoints`, `place_units` (rejection sampling)          |
//! | [`error`]   | `TerrainError`, `TerrainResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod sampler;

#[cfg(test)]
mod tests;

pub use error::{TerrainError, TerrainResult};
pub use grid::{Terrain, TerrainGrid};
pub use sampler::{Endpoints, place_units, required_ground_cells};
