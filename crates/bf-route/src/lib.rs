//! `bf-route`: finding a route from each unit's start to its target.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`route`]   | `Route`: the per-unit time-indexed coordinate list   |
//! | [`visited`] | `VisitedGrid`: one search's private visited markers  |
//! | [`router`]  | `Router` trait, `DfsRouter`                           |
//!
//! A route that could not be found is an empty [`Route`], not an error.

pub mod route;
pub mod router;
pub mod visited;


pub use route::Route;
pub use router::{DfsRouter, Router};
pub use visited::VisitedGrid;
