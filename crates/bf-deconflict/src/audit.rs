//! Post-hoc collision audit.

use rustc_hash::FxHashMap;

use bf_core::{Coord, UnitId};
use bf_route::Route;

/// Two travelling units on one cell at one time step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conflict {
    pub step:   usize,
    pub cell:   Coord,
    pub first:  UnitId,
    pub second: UnitId,
}

/// Every `(step, cell)` shared by two units that are both strictly before
/// their final index.  Units parked on their target are ignored.
pub fn find_conflicts(routes: &[Route]) -> Vec<Conflict> {
    let horizon = routes.iter().map(Route::len).max().unwrap_or(0);
    let mut conflicts = Vec::new();
    let mut occupied: FxHashMap<Coord, UnitId> = FxHashMap::default();

    for step in 0..horizon {
        occupied.clear();
        for route in routes.iter().filter(|r| r.is_active_at(step)) {
            let cell = route.steps[step];
            if let Some(&first) = occupied.get(&cell) {
                conflicts.push(Conflict { step, cell, first, second: route.unit });
            } else {
                occupied.insert(cell, route.unit);
            }
        }
    }
    conflicts
}

#[inline]
pub fn is_conflict_free(routes: &[Route]) -> bool {
    find_conflicts(routes).is_empty()
}
