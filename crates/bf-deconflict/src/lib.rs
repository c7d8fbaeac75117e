//! `bf-deconflict`: spreading routes out in time with wait steps.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`deconflict`] | `deconflict`, `DeconflictReport`                       |
//! | [`audit`]      | `find_conflicts`, `Conflict`: post-hoc verification   |
//!
//! Deconfliction only ever lengthens routes by repeating a cell; it never
//! reroutes.  A head-on swap in a one-lane corridor therefore cannot be
//! resolved, and is reported as a stall instead of looping forever.

pub mod audit;
pub mod deconflict;


pub use audit::{Conflict, find_conflicts, is_conflict_free};
pub use deconflict::{DeconflictReport, deconflict};
