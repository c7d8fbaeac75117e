//! Start and target placement by uniform rejection sampling.
//!
//! For each unit in ascending `UnitId` order a start is drawn first, then a
//! target:
//!
//! - start: ground, and distinct from every start already placed;
//! - target: ground, and distinct from this unit's own start.
//!
//! Targets may coincide across units and may sit on another unit's start.
//!
//! Each candidate is drawn uniformly over the whole coordinate space, so
//! sparse ground makes sampling slow.  Two guards keep it finite: a ground
//! count check up front, and `max_attempts` draws per coordinate.

use bf_core::{Coord, RoundRng, UnitId};

use crate::{TerrainError, TerrainGrid, TerrainResult};

/// Per-unit start and target coordinates, indexed by `UnitId`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoints {
    pub starts:  Vec<Coord>,
    pub targets: Vec<Coord>,
}

impl Endpoints {
    /// Build from explicit start/target pairs, in `UnitId` order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Coord, Coord)>) -> Self {
        let (starts, targets) = pairs.into_iter().unzip();
        Self { starts, targets }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// `(start, target)` of `unit`.
    #[inline]
    pub fn of(&self, unit: UnitId) -> (Coord, Coord) {
        (self.starts[unit.index()], self.targets[unit.index()])
    }

    pub fn iter(&self) -> impl Iterator<Item = (UnitId, Coord, Coord)> + '_ {
        UnitId::range(self.len()).map(move |u| {
            let (s, t) = self.of(u);
            (u, s, t)
        })
    }
}

/// Minimum ground cells needed to place `unit_count` units.
///
/// Starts are pairwise distinct (`unit_count` cells) and a target must differ
/// from its own start (at least 2 cells).
#[inline]
pub fn required_ground_cells(unit_count: usize) -> usize {
    unit_count.max(2)
}

/// Choose a start and a target for each of `unit_count` units.
///
/// # Errors
///
/// - [`TerrainError::ZeroUnits`] if `unit_count == 0`.
/// - [`TerrainError::Infeasible`] if the grid has fewer ground cells than
///   [`required_ground_cells`].  Checked before any sampling.
/// - [`TerrainError::SamplingExhausted`] if `max_attempts` draws in a row fail
///   for one coordinate.
pub fn place_units(
    grid:         &TerrainGrid,
    unit_count:   usize,
    max_attempts: u32,
    rng:          &mut RoundRng,
) -> TerrainResult<Endpoints> {
    if unit_count == 0 {
        return Err(TerrainError::ZeroUnits);
    }

    let ground_cells = grid.ground_count();
    let required = required_ground_cells(unit_count);
    tracing::debug!(ground_cells, required, unit_count, "placing units");
    if ground_cells < required {
        tracing::warn!(ground_cells, required, "not enough ground terrain for units");
        return Err(TerrainError::Infeasible { ground_cells, required });
    }

    let mut starts: Vec<Coord> = Vec::with_capacity(unit_count);
    let mut targets: Vec<Coord> = Vec::with_capacity(unit_count);

    for unit in UnitId::range(unit_count) {
        let start = sample(grid, unit, max_attempts, rng, |c| !starts.contains(&c))?;
        starts.push(start);

        let target = sample(grid, unit, max_attempts, rng, |c| c != start)?;
        targets.push(target);
    }

    Ok(Endpoints { starts, targets })
}

/// Draw uniform coordinates until one is ground and passes `accept`.
fn sample(
    grid:         &TerrainGrid,
    unit:         UnitId,
    max_attempts: u32,
    rng:          &mut RoundRng,
    accept:       impl Fn(Coord) -> bool,
) -> TerrainResult<Coord> {
    for attempt in 1..=max_attempts {
        let c = Coord::new(
            rng.gen_range(0..grid.rows() as i32),
            rng.gen_range(0..grid.cols() as i32),
        );
        if grid.is_ground(c) && accept(c) {
            if attempt > 1 {
                tracing::trace!(%unit, attempt, "endpoint accepted after rejections");
            }
            return Ok(c);
        }
    }
    tracing::warn!(%unit, max_attempts, "endpoint sampling exhausted");
    Err(TerrainError::SamplingExhausted { unit, attempts: max_attempts })
}
