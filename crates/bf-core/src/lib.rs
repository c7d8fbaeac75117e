//! `bf-core`: foundational types for the battlefield router.
//!
//! This crate is a dependency of every other `bf-*` crate.  It has no `bf-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `UnitId`                                               |
//! | [`coord`]  | `Coord`, `Direction`, the fixed search order           |
//! | [`rng`]    | `RoundRng` (one per round)                             |
//! | [`config`] | `RoundConfig`, `RoundLimits`                           |
//! | [`error`]  | `BfError`, `BfResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{RoundConfig, RoundLimits};
pub use coord::{Coord, Direction};
pub use error::{BfError, BfResult};
pub use ids::UnitId;
pub use rng::RoundRng;
