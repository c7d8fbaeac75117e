//! The wait-insertion pass.
//!
//! # Rule
//!
//! Time steps are swept forward from 1 (step 0 holds the distinct starts).
//! At each step, units are visited in ascending `UnitId` order as if they
//! moved one after another.  Unit `i`, if still travelling, compares its
//! step-`t` cell with every other non-empty route `j`:
//!
//! | Other unit | Collision when                                     |
//! |------------|----------------------------------------------------|
//! | `j < i`    | `j` still travelling and `route_j[t] == route_i[t]` |
//! | `j > i`    | `t < len_j` and `route_i[t] == route_j[t - 1]`     |
//!
//! Lower units have already moved this step, so `i` checks where they are
//! now; higher units have not, so `i` checks where they still stand.  Each
//! collision inserts one wait into `route_i` at `t`.  A step is not
//! re-verified after an insertion.
//!
//! The sweep ends once at most one unit is still travelling.  A unit that
//! has reached its final index no longer blocks anyone, so several units may
//! share a target cell.

use bf_core::UnitId;
use bf_route::Route;

/// What a deconfliction pass did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeconflictReport {
    /// Total wait steps inserted across all routes.
    pub waits_inserted: usize,

    /// Highest time step examined.
    pub steps_processed: usize,

    /// `true` if the sweep stopped because the remaining units can never get
    /// past each other by waiting alone.
    pub stalled: bool,

    /// Units still travelling when the sweep stalled, in ascending order.
    /// Empty unless `stalled`.
    pub blocked: Vec<UnitId>,
}

/// Insert wait steps into `routes` so units do not share cells in time.
///
/// `routes[k]` must belong to `UnitId(k)`.  Empty routes take no part.
pub fn deconflict(routes: &mut [Route]) -> DeconflictReport {
    let mut report = DeconflictReport::default();

    // Each wait is caused by another unit still travelling, so a healthy
    // sweep never needs more steps than all routes together.
    let horizon: usize = routes.iter().map(Route::len).sum::<usize>() + 1;

    let mut step = 1;
    loop {
        let active = routes.iter().filter(|r| r.is_active_at(step)).count();
        if active <= 1 {
            break;
        }
        if step > horizon {
            report.stalled = true;
            report.blocked = travelling(routes, step);
            tracing::warn!(step, horizon, blocked = ?report.blocked, "deconfliction horizon reached");
            break;
        }

        let mut waited = 0;
        for i in 0..routes.len() {
            if !routes[i].is_active_at(step) {
                continue;
            }
            let mut held = false;
            for j in 0..routes.len() {
                if j != i && collides(routes, i, j, step) {
                    routes[i].insert_wait(step);
                    report.waits_inserted += 1;
                    held = true;
                }
            }
            if held {
                waited += 1;
            }
        }
        report.steps_processed = step;

        // Every traveller waited and nobody arrived: the next step sees the
        // exact same configuration, and so would every step after it.
        let arrived = routes.iter().any(|r| r.last_index() == Some(step));
        if waited == active && !arrived {
            report.stalled = true;
            report.blocked = travelling(routes, step);
            tracing::warn!(step, blocked = ?report.blocked, "deconfliction stalled: units block each other");
            break;
        }

        step += 1;
    }

    tracing::debug!(
        waits = report.waits_inserted,
        steps = report.steps_processed,
        stalled = report.stalled,
        "deconfliction finished"
    );
    report
}

fn travelling(routes: &[Route], step: usize) -> Vec<UnitId> {
    routes.iter().filter(|r| r.is_active_at(step)).map(|r| r.unit).collect()
}

/// Does unit `i` at `step` run into unit `j`?
#[inline]
fn collides(routes: &[Route], i: usize, j: usize, step: usize) -> bool {
    let here = routes[i].steps[step];
    let other = &routes[j];
    if other.is_empty() {
        return false;
    }
    if j < i {
        other.is_active_at(step) && other.steps[step] == here
    } else {
        step < other.len() && other.steps[step - 1] == here
    }
}
