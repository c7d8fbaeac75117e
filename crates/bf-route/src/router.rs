//! Routing trait and the default depth-first implementation.
//!
//! # Pluggability
//!
//! `bf-round` calls search through the [`Router`] trait, so a round can be
//! built with a different strategy without touching the orchestrator.  The
//! default [`DfsRouter`] returns the first route an exhaustive depth-first
//! search discovers.  It is not a shortest-path search: route length is an
//! artifact of [`Direction::SEARCH_ORDER`].

use bf_core::{Coord, Direction, UnitId};
use bf_terrain::TerrainGrid;

use crate::{Route, VisitedGrid};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable per-unit route search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one router can serve per-unit
/// searches on Rayon worker threads.  The grid is shared read-only; any
/// per-search state must be owned by the call.
pub trait Router: Send + Sync {
    /// Find a route for `unit` from `start` to `target`.
    ///
    /// Returns [`Route::not_found`] when `target` is unreachable.
    fn route(&self, grid: &TerrainGrid, unit: UnitId, start: Coord, target: Coord) -> Route;
}

// ── DfsRouter ─────────────────────────────────────────────────────────────────

/// Exhaustive depth-first search with an explicit frame stack.
///
/// Each frame holds a cell and the index of the next direction to try in
/// [`Direction::SEARCH_ORDER`].  A cell is rejected when out of bounds,
/// elevated, or already visited by this search; otherwise it is marked,
/// appended to the route, and compared with the target.  When a frame runs
/// out of directions its cell is popped from the route.  Visited markers are
/// never cleared on backtrack, so every cell is entered at most once and the
/// search is linear in the grid size.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsRouter;

#[derive(Clone, Copy)]
struct Frame {
    at:   Coord,
    next: usize,
}

impl Router for DfsRouter {
    fn route(&self, grid: &TerrainGrid, unit: UnitId, start: Coord, target: Coord) -> Route {
        let mut visited = VisitedGrid::new(grid);
        let steps = dfs(grid, &mut visited, start, target);
        tracing::trace!(
            %unit,
            found = !steps.is_empty(),
            cells_visited = visited.count(),
            "depth-first search finished"
        );
        Route::new(unit, steps)
    }
}

fn dfs(grid: &TerrainGrid, visited: &mut VisitedGrid, start: Coord, target: Coord) -> Vec<Coord> {
    let mut path = Vec::new();
    if !visited.try_enter(grid, start) {
        return path;
    }
    path.push(start);
    if start == target {
        return path;
    }

    let mut stack = vec![Frame { at: start, next: 0 }];
    while let Some(frame) = stack.last_mut() {
        let Some(&dir) = Direction::SEARCH_ORDER.get(frame.next) else {
            // Dead end: backtrack.
            stack.pop();
            path.pop();
            continue;
        };
        frame.next += 1;

        let next = frame.at.step(dir);
        if !visited.try_enter(grid, next) {
            continue;
        }
        path.push(next);
        if next == target {
            return path;
        }
        stack.push(Frame { at: next, next: 0 });
    }

    // Every frame popped its own cell.
    debug_assert!(path.is_empty());
    path
}
