//! Time-indexed unit routes.

use bf_core::{Coord, UnitId};

/// The cells a unit occupies, one per discrete time step.
///
/// `steps[t]` is the unit's position at time `t`; `steps[0]` is its start and
/// the last entry its target.  Consecutive entries are either orthogonally
/// adjacent (a move) or equal (a wait, inserted only by deconfliction).
///
/// An empty `steps` means no route exists.  Because a unit's start and target
/// always differ, a found route has at least two entries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub unit:  UnitId,
    pub steps: Vec<Coord>,
}

impl Route {
    pub fn new(unit: UnitId, steps: Vec<Coord>) -> Self {
        Self { unit, steps }
    }

    /// The "no route found" result.
    pub fn not_found(unit: UnitId) -> Self {
        Self { unit, steps: Vec::new() }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Number of entries (time steps occupied, including step 0).
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the final entry, or `None` for an empty route.
    #[inline]
    pub fn last_index(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }

    /// Position at `step`, or `None` past the end.
    #[inline]
    pub fn at(&self, step: usize) -> Option<Coord> {
        self.steps.get(step).copied()
    }

    /// Position at `step`, holding the final cell once the route has ended.
    #[inline]
    pub fn position_at(&self, step: usize) -> Option<Coord> {
        self.steps.get(step).or_else(|| self.steps.last()).copied()
    }

    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.steps.first().copied()
    }

    #[inline]
    pub fn target(&self) -> Option<Coord> {
        self.steps.last().copied()
    }

    /// `true` if the unit is still travelling at `step`, i.e. `step` is
    /// strictly before its final index.
    #[inline]
    pub fn is_active_at(&self, step: usize) -> bool {
        step + 1 < self.steps.len()
    }

    /// `true` if `step` repeats the previous entry.
    #[inline]
    pub fn is_wait(&self, step: usize) -> bool {
        step > 0 && step < self.steps.len() && self.steps[step] == self.steps[step - 1]
    }

    pub fn wait_count(&self) -> usize {
        self.steps.windows(2).filter(|w| w[0] == w[1]).count()
    }

    /// Steps taken including waits (`len - 1`); zero for an empty route.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Hold the unit at its step `step - 1` cell for one more time step,
    /// shifting every later entry one step later.
    ///
    /// # Panics
    /// Panics if `step == 0` or `step > len`.
    pub fn insert_wait(&mut self, step: usize) {
        let hold = self.steps[step - 1];
        self.steps.insert(step, hold);
    }
}
