//! Round observer trait for progress reporting and presentation.

use bf_core::{RoundConfig, UnitId};
use bf_deconflict::DeconflictReport;
use bf_route::Route;
use bf_terrain::{Endpoints, TerrainGrid};

/// Callbacks invoked by [`Round::run`][crate::Round::run] between pipeline
/// stages.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait RoundObserver {
    /// Called once the round's parameters are final (including the seed).
    fn on_round_start(&mut self, _config: &RoundConfig, _seed: u64) {}

    /// Called after the terrain grid exists.
    fn on_grid(&mut self, _grid: &TerrainGrid) {}

    /// Called after every unit has a start and a target.
    fn on_units_placed(&mut self, _endpoints: &Endpoints) {}

    /// Called once per unit, in ascending `UnitId` order, with the route as
    /// found by search (before any wait steps).
    fn on_route(&mut self, _unit: UnitId, _route: &Route) {}

    /// Called after deconfliction with the final routes.
    fn on_deconflicted(&mut self, _routes: &[Route], _report: &DeconflictReport) {}
}

/// A [`RoundObserver`] that does nothing.
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}
