//! `bf-round`: runs one round of the battlefield router.
//!
//! # Pipeline
//!
//! ```text
//! ① Grid        TerrainGrid::generate (or a supplied grid)
//! ② Placement   place_units, distinct starts, target ≠ own start
//! ③ Search      Router::route for each unit, ascending UnitId
//!                 (parallel with the `parallel` feature)
//! ④ Deconflict  insert wait steps into the complete route set
//! ```
//!
//! Every step runs to completion before the next begins.  One [`RoundRng`]
//! feeds ① and ②; ③ and ④ are deterministic.
//!
//! [`RoundRng`]: bf_core::RoundRng
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the search phase on Rayon's thread pool.          |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `RoundOutcome`.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bf_core::RoundConfig;
//! use bf_route::DfsRouter;
//! use bf_round::{NoopObserver, RoundBuilder};
//!
//! let config = RoundConfig::square(16, 3, 20).with_seed(42);
//! let outcome = RoundBuilder::new(config, DfsRouter).build()?.run(&mut NoopObserver)?;
//! for route in &outcome.routes {
//!     println!("{}: {} steps", route.unit, route.step_count());
//! }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod round;


pub use builder::RoundBuilder;
pub use error::{RoundError, RoundResult};
pub use observer::{NoopObserver, RoundObserver};
pub use round::{Round, RoundOutcome};
