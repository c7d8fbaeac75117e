//! Per-search visited markers.

use bf_core::Coord;
use bf_terrain::TerrainGrid;

/// One boolean per grid cell, owned by a single unit's search.
///
/// The terrain grid is only read; each search allocates its own
/// `VisitedGrid`, so searches for different units never see each other's
/// markers and may run on separate threads over the same grid.
#[derive(Clone, Debug)]
pub struct VisitedGrid {
    marks: Vec<bool>,
    count: usize,
}

impl VisitedGrid {
    pub fn new(grid: &TerrainGrid) -> Self {
        Self { marks: vec![false; grid.cell_count()], count: 0 }
    }

    /// Mark and accept `c` if it is in bounds, ground, and not yet visited.
    /// Otherwise leave the markers unchanged and return `false`.
    #[inline]
    pub fn try_enter(&mut self, grid: &TerrainGrid, c: Coord) -> bool {
        let Some(i) = grid.index_of(c) else {
            return false;
        };
        if !grid.is_ground(c) || self.marks[i] {
            return false;
        }
        self.marks[i] = true;
        self.count += 1;
        true
    }

    /// Number of cells entered so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}
