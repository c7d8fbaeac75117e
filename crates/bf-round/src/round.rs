//! The `Round` struct and its pipeline.

use bf_core::{RoundConfig, RoundRng, UnitId};
use bf_deconflict::{Conflict, DeconflictReport, deconflict, find_conflicts};
use bf_route::{Route, Router};
use bf_terrain::{Endpoints, TerrainGrid, place_units};

use crate::builder::check_endpoints;
use crate::{RoundObserver, RoundResult};

// ── RoundOutcome ──────────────────────────────────────────────────────────────

/// Everything a presentation layer needs to show one round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundOutcome {
    /// Seed the round actually ran with.
    pub seed: u64,

    pub grid: TerrainGrid,

    pub endpoints: Endpoints,

    /// Final routes, indexed by `UnitId`.  Empty where no route exists.
    pub routes: Vec<Route>,

    pub report: DeconflictReport,
}

impl RoundOutcome {
    pub fn route(&self, unit: UnitId) -> &Route {
        &self.routes[unit.index()]
    }

    pub fn routes_found(&self) -> usize {
        self.routes.iter().filter(|r| r.is_found()).count()
    }

    /// Remaining same-cell encounters between travelling units.
    pub fn conflicts(&self) -> Vec<Conflict> {
        find_conflicts(&self.routes)
    }
}

// ── Round ─────────────────────────────────────────────────────────────────────

/// A single round, ready to run.
///
/// Owns the grid and the route set for the round's duration.  Create via
/// [`RoundBuilder`][crate::RoundBuilder].
pub struct Round<R: Router> {
    pub config: RoundConfig,

    /// Seed resolved at build time.
    pub seed: u64,

    pub(crate) rng:       RoundRng,
    pub(crate) router:    R,
    pub(crate) grid:      Option<TerrainGrid>,
    pub(crate) endpoints: Option<Endpoints>,
}

impl<R: Router> Round<R> {
    /// Run the full pipeline once.
    ///
    /// A unit without a route is a normal outcome; errors come only from
    /// endpoint placement on an unusable grid or from supplied endpoints
    /// that break the placement rules.
    pub fn run<O: RoundObserver>(mut self, observer: &mut O) -> RoundResult<RoundOutcome> {
        tracing::info!(
            rows = self.config.rows,
            cols = self.config.cols,
            units = self.config.unit_count,
            elevation = self.config.elevation_percent,
            seed = self.seed,
            "round starting"
        );
        observer.on_round_start(&self.config, self.seed);

        // ── ① Grid ────────────────────────────────────────────────────────
        let grid = match self.grid.take() {
            Some(g) => g,
            None => TerrainGrid::generate(
                self.config.rows,
                self.config.cols,
                self.config.elevation_percent,
                &mut self.rng,
            ),
        };
        observer.on_grid(&grid);

        // ── ② Placement ───────────────────────────────────────────────────
        let endpoints = match self.endpoints.take() {
            Some(e) => {
                check_endpoints(&grid, &e)?;
                e
            }
            None => place_units(
                &grid,
                self.config.unit_count,
                self.config.max_sampling_attempts,
                &mut self.rng,
            )?,
        };
        observer.on_units_placed(&endpoints);

        // ── ③ Search ──────────────────────────────────────────────────────
        let mut routes = compute_routes(&self.router, &grid, &endpoints);
        for route in &routes {
            tracing::debug!(
                unit = %route.unit,
                found = route.is_found(),
                steps = route.step_count(),
                "route searched"
            );
            observer.on_route(route.unit, route);
        }

        // ── ④ Deconflict ──────────────────────────────────────────────────
        let report = deconflict(&mut routes);
        observer.on_deconflicted(&routes, &report);

        let outcome = RoundOutcome { seed: self.seed, grid, endpoints, routes, report };
        tracing::info!(
            found = outcome.routes_found(),
            units = outcome.routes.len(),
            waits = outcome.report.waits_inserted,
            stalled = outcome.report.stalled,
            "round finished"
        );
        Ok(outcome)
    }
}

/// One route per unit, in ascending `UnitId` order.
///
/// With the `parallel` Cargo feature the searches run on Rayon's thread
/// pool.  Each search allocates its own visited markers, so the grid is the
/// only shared state and it is read-only.
fn compute_routes<R: Router>(router: &R, grid: &TerrainGrid, endpoints: &Endpoints) -> Vec<Route> {
    #[cfg(not(feature = "parallel"))]
    {
        endpoints
            .iter()
            .map(|(unit, start, target)| router.route(grid, unit, start, target))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        // Indexed parallel collect keeps UnitId order.
        (0..endpoints.len())
            .into_par_iter()
            .map(|i| {
                let unit = UnitId(i as u32);
                let (start, target) = endpoints.of(unit);
                router.route(grid, unit, start, target)
            })
            .collect()
    }
}
